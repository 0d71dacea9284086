// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control-surface planning: which prev/next buttons and dots to create,
//! keep, or remove before listeners are wired.

use tracing::debug;

use crate::options::CarouselOptions;

/// Existing controls in the host markup, plus ways to create or remove them.
pub trait ControlSurface {
    /// Number of prev/next buttons currently present.
    fn button_count(&self) -> usize;

    /// Appends the default prev and next buttons.
    fn create_buttons(&mut self);

    /// Removes every prev/next button from the view.
    fn remove_buttons(&mut self);

    /// Returns `true` if a dots container is present.
    fn has_dots(&self) -> bool;

    /// Appends a dots container with one dot per slide, numbered from `1`.
    fn create_dots(&mut self, slide_count: usize);
}

/// What happened to one control group during [`prepare_controls`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// The feature is off and there was nothing to do.
    Disabled,
    /// The feature is off; existing controls were removed.
    Removed,
    /// Controls from the markup are kept as they are.
    Existing,
    /// Default controls were synthesized.
    Created,
}

impl ControlAction {
    /// Returns `true` if the host should wire listeners for this group.
    #[must_use]
    pub fn is_wired(self) -> bool {
        matches!(self, Self::Existing | Self::Created)
    }
}

/// Outcome of [`prepare_controls`] for both control groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlPlan {
    /// Prev/next buttons.
    pub buttons: ControlAction,
    /// Pagination dots.
    pub dots: ControlAction,
}

/// Brings the control surface in line with `options`.
///
/// - Buttons enabled: fewer than two present → create the defaults;
///   otherwise keep what the markup has.
/// - Buttons disabled: remove any that are present.
/// - Dots enabled: no dots container → create one; otherwise keep it.
/// - Dots disabled: leave the markup untouched.
pub fn prepare_controls<C: ControlSurface>(
    options: &CarouselOptions,
    surface: &mut C,
    slide_count: usize,
) -> ControlPlan {
    let buttons = match (options.buttons, surface.button_count()) {
        (true, n) if n < 2 => {
            surface.create_buttons();
            ControlAction::Created
        }
        (true, _) => ControlAction::Existing,
        (false, 0) => ControlAction::Disabled,
        (false, _) => {
            surface.remove_buttons();
            ControlAction::Removed
        }
    };

    let dots = match (options.dots, surface.has_dots()) {
        (true, false) => {
            surface.create_dots(slide_count);
            ControlAction::Created
        }
        (true, true) => ControlAction::Existing,
        (false, _) => ControlAction::Disabled,
    };

    debug!(?buttons, ?dots, slide_count, "prepared carousel controls");
    ControlPlan { buttons, dots }
}
