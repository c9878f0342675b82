// Scroll-position helpers for the nav, anchor links and the case-study TOC.

use super::constants::{
    ANCHOR_GUTTER_PX, NAV_BORDER_RESTING, NAV_BORDER_SCROLLED, NAV_SCROLLED_AFTER_PX,
    TOC_BELOW_NAV_PX,
};

/// Nav bottom border colour for a given vertical scroll offset.
#[inline]
pub fn nav_border_color(scroll_y: f64) -> &'static str {
    if scroll_y > NAV_SCROLLED_AFTER_PX {
        NAV_BORDER_SCROLLED
    } else {
        NAV_BORDER_RESTING
    }
}

/// Element id an in-page link points at (`"#about"` -> `"about"`).
#[inline]
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just under the nav.
///
/// `target_top` is the target's viewport-relative top edge.
#[inline]
pub fn anchor_scroll_top(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height - ANCHOR_GUTTER_PX
}

/// Section id a TOC link refers to. Only the leading `#` is dropped.
#[inline]
pub fn toc_link_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    (!id.is_empty()).then_some(id)
}

/// Section whose heading has most recently scrolled past the nav.
///
/// `sections` holds `(id, document_top)` pairs in page order. The first
/// section is current until any later one qualifies.
pub fn active_section<'a>(
    scroll_y: f64,
    nav_height: f64,
    sections: &'a [(String, f64)],
) -> Option<&'a str> {
    let offset = nav_height + TOC_BELOW_NAV_PX;
    let mut current = sections.first().map(|(id, _)| id.as_str());
    for (id, doc_top) in sections {
        if doc_top - offset <= scroll_y {
            current = Some(id.as_str());
        }
    }
    current
}
