use crate::constants::{LANG_TOGGLE_ID, LOCALIZED_SELECTOR};
use crate::core::{apply_language, Lang, LangPreference, LocalizedText};
use crate::dom;
use crate::storage::LocalStore;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Elements carrying `data-en`/`data-he`, read fresh on every switch.
fn localized_elements(
    document: &web::Document,
) -> anyhow::Result<Vec<(web::Element, LocalizedText)>> {
    Ok(dom::query_all(document, LOCALIZED_SELECTOR)?
        .into_iter()
        .map(|el| {
            let text = LocalizedText {
                en: el.get_attribute("data-en"),
                he: el.get_attribute("data-he"),
            };
            (el, text)
        })
        .collect())
}

/// Rewrite root attributes and localized text for `lang`.
pub fn set_lang(document: &web::Document, lang: Lang) -> anyhow::Result<()> {
    let entries = localized_elements(document)?;
    let update = apply_language(lang, &entries);

    if let Some(root) = document.document_element() {
        root.set_attribute("lang", update.lang).map_err(dom::js_err)?;
        root.set_attribute("dir", update.dir).map_err(dom::js_err)?;
        root.set_attribute("data-lang", update.data_lang).map_err(dom::js_err)?;
    }
    for (el, text) in &update.texts {
        el.set_text_content(Some(*text));
    }
    log::info!("[lang] applied {} ({} texts)", lang, update.texts.len());
    Ok(())
}

/// Language the page currently shows.
pub fn current_lang(document: &web::Document) -> Lang {
    let attr = document
        .document_element()
        .and_then(|root| root.get_attribute("data-lang"));
    Lang::from_root_attr(attr.as_deref())
}

/// Restore the saved language and wire the toggle button.
pub fn init_lang(document: &web::Document) -> anyhow::Result<()> {
    let store = Rc::new(RefCell::new(LocalStore::open()));
    let pref = Rc::new(RefCell::new(LangPreference::load(&*store.borrow())));

    let doc = document.clone();
    let toggle_store = store.clone();
    let toggle_pref = pref.clone();
    let wired = dom::add_click_listener(document, LANG_TOGGLE_ID, move || {
        let next = current_lang(&doc).toggled();
        if let Err(e) = set_lang(&doc, next) {
            log::error!("[lang] toggle failed: {:?}", e);
            return;
        }
        toggle_pref
            .borrow_mut()
            .save(&mut *toggle_store.borrow_mut(), next);
    });
    if !wired {
        log::info!("[lang] no #{} on this page", LANG_TOGGLE_ID);
    }

    let restore = pref.borrow().restore_target();
    if let Some(lang) = restore {
        set_lang(document, lang)?;
        pref.borrow_mut().save(&mut *store.borrow_mut(), lang);
    }
    Ok(())
}
