// Tuning constants shared by the pure core and the browser wiring.

// Hero spotlight
pub const SPOT_BASE_RADIUS: f32 = 460.0; // px, radius at rest
pub const SPOT_SMOOTHING: f32 = 0.09; // fraction of remaining distance closed per frame
pub const SPOT_SPEED_GAIN: f32 = 0.35; // extra radius per px of residual distance

// Nav border
pub const NAV_SCROLLED_AFTER_PX: f64 = 10.0;
pub const NAV_BORDER_RESTING: &str = "rgba(26,26,24,.08)";
pub const NAV_BORDER_SCROLLED: &str = "rgba(26,26,24,.15)";

// Anchor scroll: gap kept between the nav and the scrolled-to element
pub const ANCHOR_GUTTER_PX: f64 = 24.0;

// TOC: a section counts as current once its top passes this far below the nav
pub const TOC_BELOW_NAV_PX: f64 = 80.0;

// Scroll reveal
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";
