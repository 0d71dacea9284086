// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup contract shared by the DOM adapter and its fallback controls.

use std::fmt::Write as _;

use understory_carousel::Transition;

/// Element that receives `transform`/`transition`.
pub const CONTAINER_SELECTOR: &str = "[data-slider-container]";
/// Slide panels.
pub const SLIDE_SELECTOR: &str = "[data-slide]";
/// Attribute carrying a slide's 1-based position.
pub const SLIDE_ATTR: &str = "data-slide";
/// Prev/next buttons.
pub const BUTTON_SELECTOR: &str = "[data-button]";
/// Marks a button (or an ancestor of the click target) as "next".
pub const NEXT_BUTTON_SELECTOR: &str = "[data-button-next]";
/// Marks a button (or an ancestor of the click target) as "prev".
pub const PREV_BUTTON_SELECTOR: &str = "[data-button-prev]";
/// Pagination container.
pub const DOTS_SELECTOR: &str = "[data-dots]";
/// Pagination dots.
pub const DOT_SELECTOR: &str = "[data-dot]";
/// Attribute carrying a dot's 1-based position.
pub const DOT_ATTR: &str = "data-dot";
/// Class added to the active slide and dot.
pub const ACTIVE_CLASS: &str = "slide-active";

/// Default prev/next buttons appended when the markup has fewer than two.
pub const FALLBACK_BUTTONS_HTML: &str = concat!(
    r#"<button class="slider-button" data-button data-button-prev="button">prev</button>"#,
    r#"<button class="slider-button" data-button data-button-next="button">next</button>"#,
);

/// Default pagination: one numbered dot per slide.
pub fn fallback_dots_html(slide_count: usize) -> String {
    let mut html = String::from(r#"<div class="slider-dots" data-dots>"#);
    for position in 1..=slide_count {
        let _ = write!(html, r#"<button data-dot="{position}">{position}</button>"#);
    }
    html.push_str("</div>");
    html
}

/// CSS `transform` value for a horizontal offset.
pub fn transform_value(offset: f64) -> String {
    format!("translateX({offset}px)")
}

/// CSS `transition` value for a [`Transition`], in whole milliseconds (`0ms`, `300ms`).
pub fn transition_value(transition: Transition) -> String {
    format!("{}ms", transition.duration_ms())
}
