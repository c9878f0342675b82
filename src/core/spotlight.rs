use super::constants::{SPOT_BASE_RADIUS, SPOT_SMOOTHING, SPOT_SPEED_GAIN};
use glam::Vec2;
use std::fmt;

/// Spotlight tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightConfig {
    /// Radius at rest, in px.
    pub base_radius: f32,
    /// Fraction of the remaining distance closed per frame, in (0, 1].
    pub smoothing: f32,
    /// Extra radius per px of residual distance.
    pub speed_gain: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            base_radius: SPOT_BASE_RADIUS,
            smoothing: SPOT_SMOOTHING,
            speed_gain: SPOT_SPEED_GAIN,
        }
    }
}

impl SpotlightConfig {
    /// Apply optional per-page overrides given as raw attribute strings.
    ///
    /// Values that do not parse, are not finite, or fall outside their valid
    /// range are ignored and the current value is kept.
    pub fn with_overrides(
        mut self,
        radius: Option<&str>,
        smoothing: Option<&str>,
        speed_gain: Option<&str>,
    ) -> Self {
        if let Some(r) = parse_override("radius", radius, |v| v >= 0.0) {
            self.base_radius = r;
        }
        if let Some(s) = parse_override("smoothing", smoothing, |v| v > 0.0 && v <= 1.0) {
            self.smoothing = s;
        }
        if let Some(g) = parse_override("speed gain", speed_gain, |v| v >= 0.0) {
            self.speed_gain = g;
        }
        self
    }
}

fn parse_override(name: &str, raw: Option<&str>, valid: impl Fn(f32) -> bool) -> Option<f32> {
    let raw = raw?.trim();
    match raw.parse::<f32>() {
        Ok(v) if v.is_finite() && valid(v) => Some(v),
        _ => {
            log::warn!("[spotlight] ignoring {} override {:?}", name, raw);
            None
        }
    }
}

/// One exponential-smoothing step: close fraction `t` of the gap.
/// A zero gap leaves `current` bit-for-bit unchanged.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, t: f32) -> Vec2 {
    current + (target - current) * t
}

/// Where a clip circle is centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipCenter {
    /// Region-relative pixel position.
    Px(Vec2),
    /// Middle of the region.
    Midpoint,
}

/// Circular clip geometry applied to the visual layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipCircle {
    pub radius: f32,
    pub center: ClipCenter,
}

impl ClipCircle {
    #[inline]
    pub fn at(radius: f32, center: Vec2) -> Self {
        Self {
            radius,
            center: ClipCenter::Px(center),
        }
    }

    /// Zero radius at the region midpoint; nothing of the layer shows.
    #[inline]
    pub fn collapsed() -> Self {
        Self {
            radius: 0.0,
            center: ClipCenter::Midpoint,
        }
    }
}

/// Renders as a CSS `clip-path` value.
impl fmt::Display for ClipCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.center {
            ClipCenter::Px(c) => write!(f, "circle({}px at {}px {}px)", self.radius, c.x, c.y),
            ClipCenter::Midpoint => write!(f, "circle({}px at 50% 50%)", self.radius),
        }
    }
}

/// "Call me back before the next repaint."
pub trait FrameScheduler {
    type Handle: Copy;

    /// Request one callback. `None` means the host refused.
    fn request_frame(&mut self) -> Option<Self::Handle>;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

/// The element the spotlight is drawn onto.
pub trait SpotlightLayer {
    fn set_engaged(&mut self, engaged: bool);
    fn set_clip(&mut self, clip: ClipCircle);
    /// Publish the smoothed viewport position for decorative effects.
    fn set_spot(&mut self, global: Vec2);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpotState {
    Idle,
    Tracking,
}

/// What a single frame computed and applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotFrame {
    pub radius: f32,
    pub local: Vec2,
    pub global: Vec2,
}

/// Cursor-following spotlight for the hero banner.
///
/// Smooths the raw pointer position into a lagged one with per-frame
/// exponential smoothing, grows the radius with the residual distance still
/// to cover, and pushes the result to a [`SpotlightLayer`]. Frames are
/// requested from a [`FrameScheduler`] one at a time, so the loop only runs
/// while the pointer is over the region.
///
/// Nothing here touches the DOM; the browser side supplies the scheduler
/// (`requestAnimationFrame`) and the layer (clip-path + custom properties).
pub struct Spotlight<S: FrameScheduler, L: SpotlightLayer> {
    config: SpotlightConfig,
    target_local: Vec2,
    current_local: Vec2,
    target_global: Vec2,
    current_global: Vec2,
    active: bool,
    loop_handle: Option<S::Handle>,
    scheduler: S,
    layer: L,
}

impl<S: FrameScheduler, L: SpotlightLayer> Spotlight<S, L> {
    pub fn new(config: SpotlightConfig, scheduler: S, layer: L) -> Self {
        Self {
            config,
            target_local: Vec2::ZERO,
            current_local: Vec2::ZERO,
            target_global: Vec2::ZERO,
            current_global: Vec2::ZERO,
            active: false,
            loop_handle: None,
            scheduler,
            layer,
        }
    }

    /// Record a pointer position over the region. The first move after idle
    /// snaps the smoothed positions to the pointer and starts the loop.
    pub fn pointer_move(&mut self, local: Vec2, global: Vec2) {
        self.target_local = local;
        self.target_global = global;

        if !self.active {
            self.active = true;
            self.current_local = local;
            self.current_global = global;
            self.layer.set_engaged(true);
            self.schedule();
        }
    }

    /// Stop tracking: cancel the pending frame and collapse the clip.
    pub fn pointer_leave(&mut self) {
        self.active = false;
        self.layer.set_engaged(false);
        if let Some(handle) = self.loop_handle.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.layer.set_clip(ClipCircle::collapsed());
    }

    /// Body of the scheduled callback. Returns `None` when the animator is
    /// idle, in which case nothing is applied and no frame is requested.
    pub fn render_frame(&mut self) -> Option<SpotFrame> {
        // the callback running now was the pending one
        self.loop_handle = None;
        if !self.active {
            return None;
        }

        let t = self.config.smoothing;
        self.current_local = smooth_toward(self.current_local, self.target_local, t);
        self.current_global = smooth_toward(self.current_global, self.target_global, t);

        // Residual distance after the step, not raw pointer delta.
        let speed = (self.target_local - self.current_local).length();
        let radius = self.config.base_radius + speed * self.config.speed_gain;

        self.layer.set_clip(ClipCircle::at(radius, self.current_local));
        self.layer.set_spot(self.current_global);

        self.schedule();

        Some(SpotFrame {
            radius,
            local: self.current_local,
            global: self.current_global,
        })
    }

    fn schedule(&mut self) {
        if self.loop_handle.is_some() {
            return;
        }
        self.loop_handle = self.scheduler.request_frame();
        if self.loop_handle.is_none() {
            log::warn!("[spotlight] frame request refused; loop not running");
        }
    }

    #[inline]
    pub fn state(&self) -> SpotState {
        if self.active {
            SpotState::Tracking
        } else {
            SpotState::Idle
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.loop_handle.is_some()
    }

    #[inline]
    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    pub fn target_local(&self) -> Vec2 {
        self.target_local
    }

    pub fn current_local(&self) -> Vec2 {
        self.current_local
    }

    pub fn current_global(&self) -> Vec2 {
        self.current_global
    }
}
