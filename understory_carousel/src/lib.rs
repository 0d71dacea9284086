// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: headless state for carousel (slider) widgets.
//!
//! A carousel shows one panel ("slide") of a horizontal strip at a time and
//! moves between them through buttons, pagination dots, swipes, or a timer.
//! This crate owns the parts of that behavior with real logic and leaves the
//! rest to the host:
//!
//! - [`PositionController`]: the current index, wraparound stepping, jumps,
//!   and the resting offset `-slide_width * index`.
//! - [`GestureInterpreter`]: turns one touch drag into a live offset and, at
//!   release, a [`GestureOutcome`] (commit to a neighbor, or snap back) using a
//!   one-third-of-a-slide threshold.
//! - [`highlight_active`]: keeps exactly one slide and one dot marked active.
//! - [`prepare_controls`]: decides which prev/next buttons and dots to create,
//!   keep, or remove for a given [`CarouselOptions`].
//! - [`Autoplay`]: a stoppable repeating tick on top of `understory_timing`.
//! - [`Carousel`]: the composite that applies all of the above to a
//!   [`ViewAdapter`].
//!
//! The crate does not know about the DOM or any UI toolkit. Hosts implement
//! [`ViewAdapter`] (element lookup, offset application, active marking) and
//! [`ControlSurface`] (fallback controls), then forward input:
//!
//! - button clicks → [`Carousel::advance`]
//! - dot clicks → [`Carousel::select_dot`] (positions are validated)
//! - touch start / move / end → [`Carousel::touch_start`],
//!   [`Carousel::touch_move`], [`Carousel::touch_end`]
//! - timer wake-ups at [`Carousel::next_wakeup`] → [`Carousel::tick`]
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{
//!     Carousel, CarouselOptions, Direction, Group, Transition, ViewAdapter,
//! };
//!
//! /// Three 300px slides and no dots.
//! #[derive(Default)]
//! struct Strip {
//!     offset: f64,
//!     active: [bool; 3],
//! }
//!
//! impl ViewAdapter for Strip {
//!     type Element = usize;
//!
//!     fn elements(&self, group: Group) -> Vec<usize> {
//!         match group {
//!             Group::Slides => vec![0, 1, 2],
//!             Group::Dots => Vec::new(),
//!         }
//!     }
//!
//!     fn position_of(&self, _group: Group, element: &usize) -> Option<usize> {
//!         Some(element + 1)
//!     }
//!
//!     fn measure_width(&self, _slide: &usize) -> f64 {
//!         300.0
//!     }
//!
//!     fn apply_offset(&mut self, offset: f64, _transition: Transition) {
//!         self.offset = offset;
//!     }
//!
//!     fn set_active(&mut self, element: &usize, active: bool) {
//!         self.active[*element] = active;
//!     }
//! }
//!
//! let mut carousel = Carousel::new(CarouselOptions::new("#gallery"), Strip::default()).unwrap();
//! carousel.advance(Direction::Next);
//! carousel.advance(Direction::Next);
//! assert_eq!(carousel.index(), 2);
//! assert_eq!(carousel.view().offset, -600.0);
//! assert_eq!(carousel.view().active, [false, false, true]);
//!
//! carousel.advance(Direction::Next);
//! assert_eq!(carousel.index(), 0);
//! ```
//!
//! ## Limitations
//!
//! - Slides are assumed to share one width, measured from the first slide at
//!   construction. Layout changes afterwards are not tracked.
//! - One touch at a time; starting a new swipe replaces the previous one.
//!
//! ## Features
//!
//! - `serde`: (de)serialize [`CarouselOptions`] (enabled by default).
//! - `std` / `libm`: forwarded to `kurbo`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod autoplay;
mod carousel;
mod controls;
mod error;
mod gesture;
mod highlight;
mod options;
mod position;
mod view;

pub use autoplay::Autoplay;
pub use carousel::Carousel;
pub use controls::{ControlAction, ControlPlan, ControlSurface, prepare_controls};
pub use error::{Anchor, CarouselError, CarouselResult, parse_position};
pub use gesture::{GestureInterpreter, GestureOutcome, GestureState, resolve_swipe};
pub use highlight::{ActiveMarks, highlight_active};
pub use options::{CarouselOptions, DEFAULT_AUTOPLAY_SPEED, MIN_AUTOPLAY_SPEED};
pub use position::{Direction, PositionController};
pub use view::{Group, SETTLE_DURATION_MS, Transition, ViewAdapter};
