use crate::constants::{SPOT_GAIN_ATTR, SPOT_RADIUS_ATTR, SPOT_SMOOTHING_ATTR};
use crate::core::SpotlightConfig;
use crate::dom;
use crate::frame::{self, HeroSpotlight};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position relative to `region`'s top-left and to the viewport.
#[inline]
pub fn pointer_region_px(ev: &web::MouseEvent, region: &web::Element) -> (Vec2, Vec2) {
    let rect = region.get_bounding_client_rect();
    let global = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
    let local = global - Vec2::new(rect.left() as f32, rect.top() as f32);
    (local, global)
}

/// Spotlight tuning with any overrides the hero element carries.
pub fn spotlight_config(hero: &web::Element) -> SpotlightConfig {
    SpotlightConfig::default().with_overrides(
        hero.get_attribute(SPOT_RADIUS_ATTR).as_deref(),
        hero.get_attribute(SPOT_SMOOTHING_ATTR).as_deref(),
        hero.get_attribute(SPOT_GAIN_ATTR).as_deref(),
    )
}

pub fn wire_hero_spotlight(
    hero: web::Element,
    layer: web::HtmlElement,
) -> anyhow::Result<Rc<RefCell<HeroSpotlight>>> {
    let config = spotlight_config(&hero);
    log::info!(
        "[spotlight] radius={} smoothing={} gain={}",
        config.base_radius,
        config.smoothing,
        config.speed_gain
    );
    let spot = frame::create_spotlight(layer, config)?;
    wire_mousemove(&hero, spot.clone())?;
    wire_mouseleave(&hero, spot.clone())?;
    Ok(spot)
}

fn wire_mousemove(hero: &web::Element, spot: Rc<RefCell<HeroSpotlight>>) -> anyhow::Result<()> {
    let region = hero.clone();
    dom::add_passive_listener(hero, "mousemove", move |ev: web::MouseEvent| {
        let (local, global) = pointer_region_px(&ev, &region);
        spot.borrow_mut().pointer_move(local, global);
    })
}

fn wire_mouseleave(hero: &web::Element, spot: Rc<RefCell<HeroSpotlight>>) -> anyhow::Result<()> {
    dom::add_passive_listener(hero, "mouseleave", move |_ev: web::MouseEvent| {
        spot.borrow_mut().pointer_leave();
    })
}
