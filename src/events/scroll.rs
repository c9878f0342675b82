use crate::constants::{NAV_SELECTOR, TOC_ACTIVE_CLASS, TOC_ITEM_SELECTOR, TOC_SELECTOR};
use crate::core::{active_section, nav_border_color, toc_link_id};
use crate::dom;
use web_sys as web;

/// Darken the nav's bottom border once the page has scrolled.
pub fn wire_nav_border(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(nav) = dom::query_html(document, NAV_SELECTOR) else {
        return Ok(());
    };
    let wnd = window.clone();
    dom::add_passive_listener(window, "scroll", move |_ev: web::Event| {
        let color = nav_border_color(dom::scroll_y(&wnd));
        _ = nav.style().set_property("border-bottom-color", color);
    })
}

struct Toc {
    links: Vec<(web::Element, Option<String>)>,
    sections: Vec<web::Element>,
}

impl Toc {
    fn find(document: &web::Document) -> anyhow::Result<Option<Toc>> {
        let Some(toc) = document.query_selector(TOC_SELECTOR).map_err(dom::js_err)? else {
            return Ok(None);
        };
        let items = dom::elements(toc.query_selector_all(TOC_ITEM_SELECTOR).map_err(dom::js_err)?);
        if items.is_empty() {
            return Ok(None);
        }
        let links: Vec<_> = items
            .into_iter()
            .map(|a| {
                let id = a
                    .get_attribute("href")
                    .as_deref()
                    .and_then(toc_link_id)
                    .map(str::to_string);
                (a, id)
            })
            .collect();
        let sections = links
            .iter()
            .filter_map(|(_, id)| id.as_deref())
            .filter_map(|id| document.get_element_by_id(id))
            .collect();
        Ok(Some(Toc { links, sections }))
    }

    fn highlight(&self, window: &web::Window, document: &web::Document) {
        let scroll_y = dom::scroll_y(window);
        // Layout can shift (images, fonts), so read positions on every pass.
        let tops: Vec<(String, f64)> = self
            .sections
            .iter()
            .map(|sec| (sec.id(), sec.get_bounding_client_rect().top() + scroll_y))
            .collect();
        let current = active_section(scroll_y, dom::nav_height(document), &tops);
        for (a, id) in &self.links {
            let on = current.is_some() && id.as_deref() == current;
            _ = a.class_list().toggle_with_force(TOC_ACTIVE_CLASS, on);
        }
    }
}

/// Keep the case-study TOC entry for the section in view highlighted.
pub fn wire_toc(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(toc) = Toc::find(document)? else {
        return Ok(());
    };
    log::info!(
        "[toc] {} links, {} sections",
        toc.links.len(),
        toc.sections.len()
    );
    toc.highlight(window, document);

    let wnd = window.clone();
    let doc = document.clone();
    dom::add_passive_listener(window, "scroll", move |_ev: web::Event| {
        toc.highlight(&wnd, &doc);
    })
}
