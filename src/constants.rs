/// DOM hooks the page markup provides.
///
/// Every feature looks its elements up through these names and quietly skips
/// installing itself when they are absent.
// Language
pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const LOCALIZED_SELECTOR: &str = "[data-en]";

// Scroll reveal
pub const REVEAL_SELECTOR: &str = ".reveal:not([data-stack])";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

// Nav
pub const NAV_SELECTOR: &str = ".nav";

// Hero spotlight
pub const HERO_SELECTOR: &str = ".hero";
pub const SPOT_LAYER_SELECTOR: &str = ".hero__layer--sharp";
pub const SPOT_ACTIVE_CLASS: &str = "is-active";
pub const SPOT_X_PROPERTY: &str = "--spot-x";
pub const SPOT_Y_PROPERTY: &str = "--spot-y";
pub const SPOT_RADIUS_ATTR: &str = "data-spot-radius";
pub const SPOT_SMOOTHING_ATTR: &str = "data-spot-smoothing";
pub const SPOT_GAIN_ATTR: &str = "data-spot-gain";

// Anchors
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Case-study table of contents
pub const TOC_SELECTOR: &str = ".cs-toc";
pub const TOC_ITEM_SELECTOR: &str = ".cs-toc__item";
pub const TOC_ACTIVE_CLASS: &str = "active";
