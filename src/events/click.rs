use crate::constants::ANCHOR_SELECTOR;
use crate::core::{anchor_id, anchor_scroll_top};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn scroll_to_anchor(ev: &web::MouseEvent, href: &str) {
    let Some(id) = anchor_id(href) else {
        return;
    };
    let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
        return;
    };
    let Some(target) = document.get_element_by_id(id) else {
        log::warn!("[anchor] no element #{}", id);
        return;
    };
    ev.prevent_default();

    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(&window),
        dom::nav_height(&document),
    );
    let opts = web::ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Smooth-scroll in-page links, leaving room for the fixed nav.
pub fn wire_anchor_scroll(document: &web::Document) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let link = anchor.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if let Some(href) = link.get_attribute("href") {
                scroll_to_anchor(&ev, &href);
            }
        }) as Box<dyn FnMut(_)>);
        anchor
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(dom::js_err)?;
        closure.forget();
    }
    log::info!("[anchor] wired {} links", anchors.len());
    Ok(())
}
