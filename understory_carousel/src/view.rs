// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between carousel state and whatever renders it.

use alloc::vec::Vec;

/// Settle animation length for offset changes outside a drag.
pub const SETTLE_DURATION_MS: u32 = 300;

/// Which element group a query or highlight refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    /// The slide panels.
    Slides,
    /// The pagination dots.
    Dots,
}

/// How the container should move to a new offset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Jump immediately. Used while a finger is dragging the strip.
    Instant,
    /// Animate over the given duration in milliseconds.
    Animated {
        /// Animation length.
        duration_ms: u32,
    },
}

impl Transition {
    /// The animation used for every non-drag offset change.
    pub const SETTLE: Self = Self::Animated {
        duration_ms: SETTLE_DURATION_MS,
    };

    /// Duration in milliseconds (`0` for [`Transition::Instant`]).
    #[must_use]
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Instant => 0,
            Self::Animated { duration_ms } => duration_ms,
        }
    }
}

/// Host view used by a [`Carousel`](crate::Carousel).
///
/// Implementations own element lookup and styling; the carousel only decides
/// *what* should be shown. Element lists are re-queried on demand, so controls
/// created after construction (for example fallback dots) are picked up.
pub trait ViewAdapter {
    /// Handle to one element in the host view.
    type Element;

    /// Elements of `group` in document order. Dots may be empty.
    fn elements(&self, group: Group) -> Vec<Self::Element>;

    /// Declared 1-based position of `element` within `group`, if it has a
    /// valid one.
    fn position_of(&self, group: Group, element: &Self::Element) -> Option<usize>;

    /// Width of a slide element, used once at construction.
    fn measure_width(&self, slide: &Self::Element) -> f64;

    /// Moves the slide container to the horizontal `offset`.
    fn apply_offset(&mut self, offset: f64, transition: Transition);

    /// Adds or removes the "active" designation on `element`.
    fn set_active(&mut self, element: &Self::Element, active: bool);
}
