#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod lang;
mod reveal;
mod storage;

/// Install the hero spotlight when the page has both the hero and its sharp
/// layer. Pages without a hero are left alone.
fn wire_spotlight(document: &web::Document) -> anyhow::Result<()> {
    let hero = document
        .query_selector(constants::HERO_SELECTOR)
        .map_err(dom::js_err)?;
    let layer = dom::query_html(document, constants::SPOT_LAYER_SELECTOR);
    match (hero, layer) {
        (Some(hero), Some(layer)) => {
            events::wire_hero_spotlight(hero, layer)?;
            Ok(())
        }
        _ => {
            log::info!("[spotlight] no hero on this page");
            Ok(())
        }
    }
}

/// Run one feature's setup; a failure is logged and does not stop the rest.
fn install(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] setup failed: {:?}", name, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    install("lang", lang::init_lang(&document));
    install("reveal", reveal::wire_reveal(&window, &document));
    install("nav", events::wire_nav_border(&window, &document));
    install("spotlight", wire_spotlight(&document));
    install("anchor", events::wire_anchor_scroll(&document));
    install("toc", events::wire_toc(&window, &document));
    Ok(())
}
