// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM adapter for [`understory_carousel`].
//!
//! On `wasm32` this crate mounts a [`Carousel`](understory_carousel::Carousel)
//! on existing markup through `web_sys`: it measures slides, writes
//! `transform`/`transition` on the container, toggles the `slide-active` class,
//! creates fallback controls, and wires touch, button, and dot listeners. A
//! `setTimeout` pump drives autoplay.
//!
//! Expected markup:
//!
//! ```html
//! <div data-slider>
//!   <div data-slider-container>
//!     <div data-slide="1">…</div>
//!     <div data-slide="2">…</div>
//!   </div>
//!   <button data-button data-button-prev>prev</button>
//!   <button data-button data-button-next>next</button>
//!   <div data-dots><button data-dot="1"></button><button data-dot="2"></button></div>
//! </div>
//! ```
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start() -> Result<understory_carousel_web::CarouselHandle, wasm_bindgen::JsValue> {
//!     understory_carousel_web::mount_json(r#"{"selector":"[data-slider]","dots":true}"#)
//! }
//! ```
//!
//! The markup constants and option parsing are available on every target.

mod markup;

#[cfg(any(target_arch = "wasm32", test))]
mod clock;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use markup::{
    ACTIVE_CLASS, BUTTON_SELECTOR, CONTAINER_SELECTOR, DOT_ATTR, DOT_SELECTOR, DOTS_SELECTOR,
    FALLBACK_BUTTONS_HTML, NEXT_BUTTON_SELECTOR, PREV_BUTTON_SELECTOR, SLIDE_ATTR, SLIDE_SELECTOR,
    fallback_dots_html, transform_value, transition_value,
};

#[cfg(target_arch = "wasm32")]
pub use dom::{CarouselHandle, DomView, JsCarousel, mount, mount_json};

use understory_carousel::CarouselOptions;

/// Parses and validates options from a JSON object such as
/// `{"selector": "[data-slider]", "autoplay": true, "autoplaySpeed": 4000}`.
pub fn options_from_json(json: &str) -> Result<CarouselOptions, String> {
    let options: CarouselOptions = serde_json::from_str(json).map_err(|err| err.to_string())?;
    options.validate().map_err(|err| err.to_string())?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_parse_with_defaults() {
        let options = options_from_json(r##"{"selector":"#hero","autoplay":true}"##).unwrap();
        assert_eq!(options.selector, "#hero");
        assert!(options.autoplay);
        assert!(!options.dots);
        assert_eq!(options.autoplay_period(), 3_000);
    }

    #[test]
    fn options_reject_blank_selector_and_bad_json() {
        assert!(options_from_json(r#"{"selector":"  "}"#).is_err());
        assert!(options_from_json(r#"{"buttons":true}"#).is_err());
        assert!(options_from_json("not json").is_err());
    }
}
