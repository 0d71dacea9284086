// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe interpretation: turn one touch interaction into a live offset and,
//! at the end, a commit or snap-back decision.
//!
//! ## Usage
//!
//! 1) On touch-start inside a slide, call [`GestureInterpreter::begin`] with the
//!    touch point, the touched slide's bounds, the slide width, and the current
//!    index. That index is frozen for the rest of the gesture.
//! 2) On each move sample, call [`GestureInterpreter::update`]; the returned
//!    value is the container offset to show right now.
//! 3) On touch-end, call [`GestureInterpreter::end`] to get a [`GestureOutcome`]
//!    and return to idle.
//!
//! Positions are normalized against the slide's right edge plus the distance
//! already scrolled (`slide_width * frozen_index`), so the live delta is itself
//! a container offset no matter which slide was physically touched.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_carousel::{Direction, GestureInterpreter, GestureOutcome};
//!
//! let slide = Rect::new(0.0, 0.0, 300.0, 200.0);
//! let mut swipe = GestureInterpreter::new();
//!
//! swipe.begin(Point::new(250.0, 100.0), slide, 300.0, 0);
//! assert_eq!(swipe.update(Point::new(140.0, 100.0)), Some(-110.0));
//! assert_eq!(swipe.end(), Some(GestureOutcome::Commit(Direction::Next)));
//! assert!(!swipe.is_dragging());
//! ```

use kurbo::{Point, Rect};

use crate::position::Direction;

/// Decision taken when a drag ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureOutcome {
    /// Move one slide in the given direction.
    Commit(Direction),
    /// Keep the frozen index and return to its resting offset.
    SnapBack,
}

/// State captured for the lifetime of a single drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureState {
    /// Right edge of the touched slide at touch-start.
    pub edge: f64,
    /// Normalized start position: `(x - edge) + slide_width * frozen_index`.
    pub start_movement: f64,
    /// Slide width used for thresholds.
    pub slide_width: f64,
    /// Index captured at touch-start.
    pub frozen_index: usize,
    /// Latest delta, `None` until the first move sample.
    pub delta: Option<f64>,
}

impl GestureState {
    fn normalized(&self, touch: Point) -> f64 {
        round_half_up(touch.x - self.edge)
    }
}

/// Single-touch swipe state machine: idle or dragging.
#[derive(Copy, Clone, Debug, Default)]
pub struct GestureInterpreter {
    state: Option<GestureState>,
}

impl GestureInterpreter {
    /// Creates an idle interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Starts a drag at `touch` on a slide occupying `slide_bounds`.
    ///
    /// Starting while already dragging replaces the previous gesture.
    pub fn begin(
        &mut self,
        touch: Point,
        slide_bounds: Rect,
        slide_width: f64,
        frozen_index: usize,
    ) {
        let edge = slide_bounds.x1;
        let scrolled = slide_width * frozen_index as f64;
        self.state = Some(GestureState {
            edge,
            start_movement: round_half_up(touch.x - edge) + scrolled,
            slide_width,
            frozen_index,
            delta: None,
        });
    }

    /// Feeds a move sample and returns the live container offset.
    ///
    /// Returns `None` when no gesture is active.
    pub fn update(&mut self, touch: Point) -> Option<f64> {
        let state = self.state.as_mut()?;
        let delta = state.normalized(touch) - state.start_movement;
        state.delta = Some(delta);
        Some(delta)
    }

    /// Ends the gesture and decides its outcome.
    ///
    /// A gesture that never received a move sample snaps back. Returns `None`
    /// when no gesture is active.
    pub fn end(&mut self) -> Option<GestureOutcome> {
        let state = self.state.take()?;
        Some(match state.delta {
            Some(delta) => resolve_swipe(delta, state.slide_width, state.frozen_index),
            None => GestureOutcome::SnapBack,
        })
    }

    /// Drops an in-flight gesture without resolving it.
    pub(crate) fn discard(&mut self) {
        self.state = None;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    /// The in-flight gesture, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GestureState> {
        self.state.as_ref()
    }
}

/// Threshold rule applied at drag end.
///
/// With `third = slide_width / 3`:
/// - `-delta > third + slide_width * frozen_index` commits to the next slide;
/// - otherwise `delta + slide_width * frozen_index > third` commits to the
///   previous slide;
/// - otherwise the drag snaps back.
#[must_use]
pub fn resolve_swipe(delta: f64, slide_width: f64, frozen_index: usize) -> GestureOutcome {
    let third = slide_width / 3.0;
    let scrolled = slide_width * frozen_index as f64;
    if -delta > third + scrolled {
        GestureOutcome::Commit(Direction::Next)
    } else if delta + scrolled > third {
        GestureOutcome::Commit(Direction::Prev)
    } else {
        GestureOutcome::SnapBack
    }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
///
/// Touch coordinates are snapped to whole units before any gesture math.
fn round_half_up(value: f64) -> f64 {
    let shifted = value + 0.5;
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Touch coordinates are far inside the i64 range"
    )]
    let truncated = shifted as i64 as f64;
    if truncated > shifted {
        truncated - 1.0
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f64 = 300.0;

    /// The slide in view always sits at `0..WIDTH`, whatever its index.
    fn visible_slide() -> Rect {
        Rect::new(0.0, 0.0, WIDTH, 200.0)
    }

    #[test]
    fn new_interpreter_is_idle() {
        let mut swipe = GestureInterpreter::new();
        assert!(!swipe.is_dragging());
        assert_eq!(swipe.update(Point::new(1.0, 1.0)), None);
        assert_eq!(swipe.end(), None);
    }

    #[test]
    fn live_offset_starts_from_resting_offset() {
        let mut swipe = GestureInterpreter::new();
        swipe.begin(Point::new(200.0, 50.0), visible_slide(), WIDTH, 2);

        // No movement yet: the container stays at -W * index.
        assert_eq!(swipe.update(Point::new(200.0, 50.0)), Some(-600.0));
        // Dragging right by 40 moves the container right by 40.
        assert_eq!(swipe.update(Point::new(240.0, 80.0)), Some(-560.0));
    }

    #[test]
    fn thresholds_from_index_zero() {
        assert_eq!(
            resolve_swipe(-110.0, WIDTH, 0),
            GestureOutcome::Commit(Direction::Next)
        );
        assert_eq!(
            resolve_swipe(110.0, WIDTH, 0),
            GestureOutcome::Commit(Direction::Prev)
        );
        assert_eq!(resolve_swipe(20.0, WIDTH, 0), GestureOutcome::SnapBack);
        assert_eq!(resolve_swipe(-20.0, WIDTH, 0), GestureOutcome::SnapBack);
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(resolve_swipe(-100.0, WIDTH, 0), GestureOutcome::SnapBack);
        assert_eq!(resolve_swipe(100.0, WIDTH, 0), GestureOutcome::SnapBack);
    }

    #[test]
    fn thresholds_follow_frozen_index() {
        // From index 2 the resting offset is -600; a third of a slide either way commits.
        assert_eq!(
            resolve_swipe(-710.0, WIDTH, 2),
            GestureOutcome::Commit(Direction::Next)
        );
        assert_eq!(
            resolve_swipe(-490.0, WIDTH, 2),
            GestureOutcome::Commit(Direction::Prev)
        );
        assert_eq!(resolve_swipe(-580.0, WIDTH, 2), GestureOutcome::SnapBack);
    }

    #[test]
    fn end_without_moves_snaps_back() {
        let mut swipe = GestureInterpreter::new();
        swipe.begin(Point::new(10.0, 0.0), visible_slide(), WIDTH, 0);
        assert_eq!(swipe.end(), Some(GestureOutcome::SnapBack));
        assert!(!swipe.is_dragging());
    }

    #[test]
    fn end_uses_latest_sample() {
        let mut swipe = GestureInterpreter::new();
        swipe.begin(Point::new(250.0, 0.0), visible_slide(), WIDTH, 0);
        swipe.update(Point::new(100.0, 0.0));
        swipe.update(Point::new(240.0, 0.0));
        assert_eq!(swipe.end(), Some(GestureOutcome::SnapBack));
    }

    #[test]
    fn begin_replaces_active_gesture() {
        let mut swipe = GestureInterpreter::new();
        swipe.begin(Point::new(250.0, 0.0), visible_slide(), WIDTH, 0);
        swipe.update(Point::new(0.0, 0.0));
        swipe.begin(Point::new(100.0, 0.0), visible_slide(), WIDTH, 1);

        let state = swipe.state().unwrap();
        assert_eq!(state.frozen_index, 1);
        assert_eq!(state.delta, None);
    }

    #[test]
    fn samples_are_rounded_before_math() {
        let mut swipe = GestureInterpreter::new();
        swipe.begin(Point::new(150.4, 0.0), visible_slide(), WIDTH, 0);
        assert_eq!(swipe.update(Point::new(100.5, 0.0)), Some(-49.0));
    }

    #[test]
    fn round_half_up_matches_pixel_snapping() {
        assert_eq!(round_half_up(1.5), 2.0);
        assert_eq!(round_half_up(1.49), 1.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.51), -2.0);
        assert_eq!(round_half_up(-0.2), 0.0);
    }
}
