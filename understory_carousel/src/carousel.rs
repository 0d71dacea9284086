// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel composite: position, gesture, and autoplay wired to a view.

use kurbo::{Point, Rect};
use tracing::{debug, trace, warn};

use crate::autoplay::Autoplay;
use crate::error::{Anchor, CarouselError, CarouselResult, parse_position};
use crate::gesture::{GestureInterpreter, GestureOutcome};
use crate::highlight::{ActiveMarks, highlight_active};
use crate::options::CarouselOptions;
use crate::position::{Direction, PositionController};
use crate::view::{Group, Transition, ViewAdapter};

/// One carousel instance over a host view.
///
/// All state changes go through `&mut self`, so a single owner applies each
/// transition (index, then offset, then highlighting) before anything else can
/// observe it. Hosts that share an instance between event handlers wrap it in
/// a `RefCell` on the UI thread or a `Mutex` elsewhere; that lock is the
/// instance's critical section.
#[derive(Debug)]
pub struct Carousel<V: ViewAdapter> {
    view: V,
    options: CarouselOptions,
    position: PositionController,
    gesture: GestureInterpreter,
    autoplay: Option<Autoplay>,
    offset: f64,
}

impl<V: ViewAdapter> Carousel<V> {
    /// Builds a carousel at slide `0` and applies the initial highlighting.
    ///
    /// The slide width is measured once, from the first slide. Autoplay, if
    /// enabled, stays stopped until [`Carousel::start_autoplay`].
    pub fn new(options: CarouselOptions, mut view: V) -> CarouselResult<Self> {
        options.validate()?;
        let slides = view.elements(Group::Slides);
        let first = slides
            .first()
            .ok_or(CarouselError::MissingAnchor(Anchor::Slides))?;
        let width = view.measure_width(first);
        let position = PositionController::new(slides.len(), width)?;
        let marks = highlight_active(&mut view, 0);
        debug!(
            selector = %options.selector,
            slides = position.slide_count(),
            width,
            ?marks,
            "carousel created"
        );

        let autoplay = options
            .autoplay
            .then(|| Autoplay::new(options.autoplay_period()));
        Ok(Self {
            view,
            options,
            offset: position.offset(),
            position,
            gesture: GestureInterpreter::new(),
            autoplay,
        })
    }

    /// The options this instance was built with.
    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The host view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the host view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Current 0-based slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.position.index()
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.position.slide_count()
    }

    /// Slide width measured at construction.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.position.slide_width()
    }

    /// Offset most recently applied to the view.
    ///
    /// Equals `-slide_width * index` except while a drag is in progress.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Returns `true` while a swipe is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Jumps to slide `index`.
    ///
    /// Out-of-range targets fail with [`CarouselError::IndexOutOfRange`]; the
    /// view is not touched.
    pub fn go_to(&mut self, index: usize) -> CarouselResult<()> {
        let from = self.position.index();
        self.position.go_to(index)?;
        debug!(from, to = index, "carousel go_to");
        self.settle();
        Ok(())
    }

    /// Jumps to the slide named by a dot's raw position attribute (1-based).
    pub fn select_dot(&mut self, raw_position: &str) -> CarouselResult<()> {
        let result = parse_position(raw_position).and_then(|position| self.go_to(position - 1));
        if let Err(err) = &result {
            warn!(%err, "ignoring dot selection");
        }
        result
    }

    /// Steps one slide in `direction`, wrapping at both ends.
    ///
    /// Buttons, autoplay ticks, and committed swipes all go through here.
    pub fn advance(&mut self, direction: Direction) {
        let from = self.position.index();
        self.position.advance(direction);
        debug!(from, to = self.position.index(), ?direction, "carousel advance");
        self.settle();
    }

    /// Starts a swipe on a slide occupying `slide_bounds`.
    ///
    /// The current index is frozen until [`Carousel::touch_end`].
    pub fn touch_start(&mut self, touch: Point, slide_bounds: Rect) {
        self.gesture.begin(
            touch,
            slide_bounds,
            self.position.slide_width(),
            self.position.index(),
        );
        trace!(x = touch.x, index = self.position.index(), "swipe started");
    }

    /// Feeds a move sample; the strip follows the finger without animation.
    ///
    /// Returns the applied offset, or `None` when no swipe is active.
    pub fn touch_move(&mut self, touch: Point) -> Option<f64> {
        let offset = self.gesture.update(touch)?;
        trace!(offset, "swipe moved");
        self.apply(offset, Transition::Instant);
        Some(offset)
    }

    /// Ends the swipe: commits to a neighbor or snaps back, then animates to
    /// the resting offset of the resulting index.
    ///
    /// Returns `None` when no swipe was active.
    pub fn touch_end(&mut self) -> Option<GestureOutcome> {
        let frozen = self.gesture.state().map(|state| state.frozen_index);
        let delta = self.gesture.state().and_then(|state| state.delta);
        let outcome = self.gesture.end()?;
        debug!(?delta, ?frozen, ?outcome, "swipe resolved");
        match outcome {
            GestureOutcome::Commit(direction) => self.advance(direction),
            GestureOutcome::SnapBack => self.settle(),
        }
        Some(outcome)
    }

    /// Starts autoplay if it is enabled; the first tick is one period after
    /// `now`. Returns `true` if autoplay is running afterwards.
    pub fn start_autoplay(&mut self, now: u64) -> bool {
        let Some(autoplay) = self.autoplay.as_mut() else {
            return false;
        };
        if autoplay.start(now) {
            debug!(period = autoplay.period(), now, "autoplay started");
        }
        true
    }

    /// Stops autoplay. Manual navigation keeps working.
    pub fn stop(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut()
            && autoplay.stop()
        {
            debug!("autoplay stopped");
        }
    }

    /// Returns `true` while autoplay is running.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.as_ref().is_some_and(Autoplay::is_running)
    }

    /// When the host should call [`Carousel::tick`] next.
    #[must_use]
    pub fn next_wakeup(&self) -> Option<u64> {
        self.autoplay.as_ref().and_then(Autoplay::next_deadline)
    }

    /// Advances to the next slide if an autoplay tick is due at `now`.
    ///
    /// A tick that falls inside a swipe is consumed without moving, so the
    /// frozen index stays valid. Returns `true` if the carousel advanced.
    pub fn tick(&mut self, now: u64) -> bool {
        let Some(autoplay) = self.autoplay.as_mut() else {
            return false;
        };
        if !autoplay.poll(now) {
            return false;
        }
        if self.gesture.is_dragging() {
            trace!(now, "autoplay tick skipped during swipe");
            return false;
        }
        self.advance(Direction::Next);
        true
    }

    /// Stops autoplay, drops any in-flight swipe, and returns the view.
    pub fn destroy(mut self) -> V {
        self.stop();
        self.gesture.discard();
        debug!(selector = %self.options.selector, "carousel destroyed");
        self.view
    }

    /// Re-applies highlighting for the current index.
    pub fn refresh_highlight(&mut self) -> ActiveMarks {
        highlight_active(&mut self.view, self.position.index())
    }

    fn settle(&mut self) {
        self.apply(self.position.offset(), Transition::SETTLE);
        self.refresh_highlight();
    }

    fn apply(&mut self, offset: f64, transition: Transition) {
        self.offset = offset;
        self.view.apply_offset(offset, transition);
    }
}
