pub mod click;
pub mod pointer;
pub mod scroll;

pub use click::wire_anchor_scroll;
pub use pointer::wire_hero_spotlight;
pub use scroll::{wire_nav_border, wire_toc};
