use crate::constants::{REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS};
use crate::core::constants::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn show(el: &web::Element) {
    _ = el.class_list().add_1(REVEAL_VISIBLE_CLASS);
}

fn has_intersection_observer(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Fade in `.reveal` blocks the first time they scroll into view. Without
/// `IntersectionObserver` everything is shown immediately.
pub fn wire_reveal(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_SELECTOR)?;
    if targets.is_empty() {
        return Ok(());
    }

    if !has_intersection_observer(window) {
        log::warn!("[reveal] no IntersectionObserver; showing {} blocks", targets.len());
        targets.iter().for_each(show);
        return Ok(());
    }

    let on_intersect = move |entries: js_sys::Array, observer: web::IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                show(&target);
                observer.unobserve(&target);
            }
        }
    };
    let callback = Closure::wrap(
        Box::new(on_intersect) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>
    );

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    opts.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(dom::js_err)?;
    callback.forget();

    for el in &targets {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} blocks", targets.len());
    Ok(())
}
