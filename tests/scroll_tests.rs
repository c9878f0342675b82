// Host-side tests for nav, anchor and TOC scroll helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

fn sections(list: &[(&str, f64)]) -> Vec<(String, f64)> {
    list.iter().map(|(id, top)| (id.to_string(), *top)).collect()
}

#[test]
fn nav_border_darkens_past_ten_px() {
    assert_eq!(nav_border_color(0.0), "rgba(26,26,24,.08)");
    assert_eq!(nav_border_color(10.0), "rgba(26,26,24,.08)");
    assert_eq!(nav_border_color(10.5), "rgba(26,26,24,.15)");
    assert_eq!(nav_border_color(2400.0), "rgba(26,26,24,.15)");
}

#[test]
fn anchor_id_strips_hash() {
    assert_eq!(anchor_id("#about"), Some("about"));
    assert_eq!(anchor_id("#case-study-1"), Some("case-study-1"));
    assert_eq!(anchor_id("#"), None);
    assert_eq!(anchor_id("about"), None);
    assert_eq!(anchor_id(""), None);
}

#[test]
fn anchor_scroll_leaves_room_for_nav_and_gutter() {
    // Target 300px below viewport top, page scrolled 1000px, 64px nav.
    assert_eq!(anchor_scroll_top(300.0, 1000.0, 64.0), 1212.0);
    // No nav on the page.
    assert_eq!(anchor_scroll_top(300.0, 0.0, 0.0), 276.0);
    // Target above the viewport.
    assert_eq!(anchor_scroll_top(-200.0, 1000.0, 64.0), 712.0);
}

#[test]
fn toc_link_id_drops_leading_hash() {
    assert_eq!(toc_link_id("#intro"), Some("intro"));
    assert_eq!(toc_link_id("intro"), Some("intro"));
    assert_eq!(toc_link_id("#"), None);
    assert_eq!(toc_link_id(""), None);
}

#[test]
fn active_section_follows_scroll() {
    let secs = sections(&[("intro", 0.0), ("work", 800.0), ("contact", 1600.0)]);
    // 60px nav -> sections count once their top is within 140px of the view top.
    assert_eq!(active_section(0.0, 60.0, &secs), Some("intro"));
    assert_eq!(active_section(659.0, 60.0, &secs), Some("intro"));
    assert_eq!(active_section(660.0, 60.0, &secs), Some("work"));
    assert_eq!(active_section(1459.0, 60.0, &secs), Some("work"));
    assert_eq!(active_section(1460.0, 60.0, &secs), Some("contact"));
    assert_eq!(active_section(9000.0, 60.0, &secs), Some("contact"));
}

#[test]
fn first_section_is_current_before_any_qualifies() {
    let secs = sections(&[("overview", 900.0), ("process", 1800.0)]);
    assert_eq!(active_section(0.0, 64.0, &secs), Some("overview"));
}

#[test]
fn taller_nav_activates_sections_earlier() {
    let secs = sections(&[("a", 0.0), ("b", 1000.0)]);
    assert_eq!(active_section(850.0, 60.0, &secs), Some("a"));
    assert_eq!(active_section(850.0, 80.0, &secs), Some("b"));
}

#[test]
fn no_sections_means_no_active_entry() {
    assert_eq!(active_section(500.0, 60.0, &[]), None);
}
