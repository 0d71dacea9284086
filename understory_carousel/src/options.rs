// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing configuration.

use alloc::string::String;

use crate::error::{Anchor, CarouselError, CarouselResult};

/// Autoplay interval used when none is configured.
pub const DEFAULT_AUTOPLAY_SPEED: u64 = 3_000;

/// Smallest effective autoplay interval; shorter requests are clamped up.
pub const MIN_AUTOPLAY_SPEED: u64 = 500;

/// Options recognized by a carousel instance.
///
/// With the `serde` feature this deserializes from the camelCase shape hosts
/// usually write by hand; only `selector` is required:
///
/// ```json
/// { "selector": "[data-slider]", "buttons": true, "dots": true,
///   "autoplay": true, "autoplaySpeed": 4000 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct CarouselOptions {
    /// Locates the widget root in the host view.
    pub selector: String,
    /// Enable prev/next buttons, creating them if the markup has none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub buttons: bool,
    /// Enable pagination dots, creating them if the markup has none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dots: bool,
    /// Advance to the next slide on a timer.
    #[cfg_attr(feature = "serde", serde(default))]
    pub autoplay: bool,
    /// Autoplay interval. See [`CarouselOptions::autoplay_period`].
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub autoplay_speed: Option<u64>,
}

impl CarouselOptions {
    /// Options for the widget at `selector` with every feature disabled.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            ..Self::default()
        }
    }

    /// Sets [`CarouselOptions::buttons`].
    #[must_use]
    pub fn with_buttons(mut self, enabled: bool) -> Self {
        self.buttons = enabled;
        self
    }

    /// Sets [`CarouselOptions::dots`].
    #[must_use]
    pub fn with_dots(mut self, enabled: bool) -> Self {
        self.dots = enabled;
        self
    }

    /// Enables autoplay with the given interval, or the default when `None`.
    #[must_use]
    pub fn with_autoplay(mut self, speed: Option<u64>) -> Self {
        self.autoplay = true;
        self.autoplay_speed = speed;
        self
    }

    /// Effective autoplay interval.
    ///
    /// Unset or zero falls back to [`DEFAULT_AUTOPLAY_SPEED`]; anything below
    /// [`MIN_AUTOPLAY_SPEED`] is raised to it.
    #[must_use]
    pub fn autoplay_period(&self) -> u64 {
        match self.autoplay_speed {
            None | Some(0) => DEFAULT_AUTOPLAY_SPEED,
            Some(speed) => speed.max(MIN_AUTOPLAY_SPEED),
        }
    }

    /// Checks the options before any view lookups happen.
    pub fn validate(&self) -> CarouselResult<()> {
        if self.selector.trim().is_empty() {
            return Err(CarouselError::MissingAnchor(Anchor::Root));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_period_defaults_and_clamps() {
        let opts = CarouselOptions::new("#s");
        assert_eq!(opts.autoplay_period(), DEFAULT_AUTOPLAY_SPEED);

        assert_eq!(opts.clone().with_autoplay(Some(0)).autoplay_period(), 3_000);
        assert_eq!(opts.clone().with_autoplay(Some(200)).autoplay_period(), 500);
        assert_eq!(opts.clone().with_autoplay(Some(500)).autoplay_period(), 500);
        assert_eq!(opts.with_autoplay(Some(4_000)).autoplay_period(), 4_000);
    }

    #[test]
    fn builder_sets_flags() {
        let opts = CarouselOptions::new("[data-slider]")
            .with_buttons(true)
            .with_dots(true)
            .with_autoplay(None);
        assert!(opts.buttons && opts.dots && opts.autoplay);
        assert_eq!(opts.autoplay_speed, None);
    }

    #[test]
    fn validate_rejects_blank_selector() {
        assert_eq!(
            CarouselOptions::new("  ").validate(),
            Err(CarouselError::MissingAnchor(Anchor::Root))
        );
        assert_eq!(CarouselOptions::new("#a").validate(), Ok(()));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_camel_case_with_defaults() {
        let opts: CarouselOptions = serde_json::from_str(
            r#"{ "selector": "[data-slider]", "dots": true, "autoplay": true, "autoplaySpeed": 4000 }"#,
        )
        .unwrap();
        assert_eq!(opts.selector, "[data-slider]");
        assert!(!opts.buttons);
        assert!(opts.dots);
        assert_eq!(opts.autoplay_period(), 4_000);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn selector_is_required() {
        let parsed = serde_json::from_str::<CarouselOptions>(r#"{ "buttons": true }"#);
        assert!(parsed.is_err());
    }
}
