use crate::constants::{SPOT_ACTIVE_CLASS, SPOT_X_PROPERTY, SPOT_Y_PROPERTY};
use crate::core::{ClipCircle, FrameScheduler, Spotlight, SpotlightConfig, SpotlightLayer};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type HeroSpotlight = Spotlight<RafScheduler, ClipLayer>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame`-backed scheduler. Every request re-arms the same
/// tick closure, which is filled in once the animator exists.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[spotlight] requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// The sharp hero layer revealed through the spotlight.
pub struct ClipLayer {
    el: web::HtmlElement,
}

impl ClipLayer {
    pub fn new(el: web::HtmlElement) -> Self {
        Self { el }
    }

    fn set_style(&self, name: &str, value: &str) {
        if let Err(e) = self.el.style().set_property(name, value) {
            log::error!("[spotlight] style {} error: {:?}", name, e);
        }
    }
}

impl SpotlightLayer for ClipLayer {
    fn set_engaged(&mut self, engaged: bool) {
        let cl = self.el.class_list();
        _ = if engaged {
            cl.add_1(SPOT_ACTIVE_CLASS)
        } else {
            cl.remove_1(SPOT_ACTIVE_CLASS)
        };
    }

    fn set_clip(&mut self, clip: ClipCircle) {
        self.set_style("clip-path", &clip.to_string());
    }

    fn set_spot(&mut self, global: Vec2) {
        self.set_style(SPOT_X_PROPERTY, &format!("{}px", global.x));
        self.set_style(SPOT_Y_PROPERTY, &format!("{}px", global.y));
    }
}

/// Build the animator and hook its render step up to the RAF tick. No frame
/// is requested here; the first pointer move starts the loop.
pub fn create_spotlight(
    layer_el: web::HtmlElement,
    config: SpotlightConfig,
) -> anyhow::Result<Rc<RefCell<HeroSpotlight>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler {
        window,
        tick: tick.clone(),
    };
    let spot = Rc::new(RefCell::new(Spotlight::new(
        config,
        scheduler,
        ClipLayer::new(layer_el),
    )));

    let spot_tick = spot.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        spot_tick.borrow_mut().render_frame();
    }) as Box<dyn FnMut()>));

    Ok(spot)
}
