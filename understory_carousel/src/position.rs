// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide position state: the current index and the offset it implies.
//!
//! [`PositionController`] is pure state. It never talks to a view; the
//! [`Carousel`](crate::Carousel) composite applies the offsets it returns and
//! refreshes highlighting.
//!
//! ```
//! use understory_carousel::{Direction, PositionController};
//!
//! let mut pos = PositionController::new(3, 300.0).unwrap();
//! assert_eq!(pos.advance(Direction::Prev), -600.0);
//! assert_eq!(pos.index(), 2);
//! assert_eq!(pos.advance(Direction::Next), 0.0);
//! ```

use crate::error::{Anchor, CarouselError, CarouselResult};

/// Step direction for [`PositionController::advance`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward higher indices, wrapping from the last slide to the first.
    Next,
    /// Toward lower indices, wrapping from the first slide to the last.
    Prev,
}

/// Owns the current slide index for a strip of uniformly sized slides.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionController {
    index: usize,
    len: usize,
    slide_width: f64,
}

impl PositionController {
    /// Creates a controller at index `0`.
    ///
    /// Fails with [`CarouselError::MissingAnchor`] when `len` is zero and with
    /// [`CarouselError::InvalidSlideWidth`] unless `slide_width` is finite and
    /// positive.
    pub fn new(len: usize, slide_width: f64) -> CarouselResult<Self> {
        if len == 0 {
            return Err(CarouselError::MissingAnchor(Anchor::Slides));
        }
        if !slide_width.is_finite() || slide_width <= 0.0 {
            return Err(CarouselError::InvalidSlideWidth { width: slide_width });
        }
        Ok(Self {
            index: 0,
            len,
            slide_width,
        })
    }

    /// Current 0-based slide index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides. Always at least one.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Width of a single slide, measured once at construction.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.slide_width
    }

    /// Resting offset for the current index.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset_for(self.index)
    }

    /// Resting offset that brings slide `index` into view.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f64 {
        -(self.slide_width * index as f64)
    }

    /// Index that [`PositionController::advance`] would move to.
    #[must_use]
    pub fn peek(&self, direction: Direction) -> usize {
        match direction {
            Direction::Next if self.index + 1 >= self.len => 0,
            Direction::Next => self.index + 1,
            Direction::Prev if self.index == 0 => self.len - 1,
            Direction::Prev => self.index - 1,
        }
    }

    /// Steps one slide in `direction` with wraparound and returns the new
    /// resting offset.
    pub fn advance(&mut self, direction: Direction) -> f64 {
        self.index = self.peek(direction);
        self.offset()
    }

    /// Jumps to `index` and returns the new resting offset.
    ///
    /// Out-of-range targets fail with [`CarouselError::IndexOutOfRange`] and
    /// leave the index unchanged.
    pub fn go_to(&mut self, index: usize) -> CarouselResult<f64> {
        if index >= self.len {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(self.offset())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn rejects_empty_and_degenerate_widths() {
        assert_eq!(
            PositionController::new(0, 100.0),
            Err(CarouselError::MissingAnchor(Anchor::Slides))
        );
        for width in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(PositionController::new(3, width).is_err(), "{width}");
        }
    }

    #[test]
    fn next_cycles_forward_with_wrap() {
        for len in 1..=5 {
            let mut pos = PositionController::new(len, 10.0).unwrap();
            let seen: Vec<usize> = (0..len * 2)
                .map(|_| {
                    pos.advance(Direction::Next);
                    pos.index()
                })
                .collect();
            let expected: Vec<usize> = (1..=len * 2).map(|i| i % len).collect();
            assert_eq!(seen, expected, "len = {len}");
        }
    }

    #[test]
    fn prev_cycles_backward_with_wrap() {
        for len in 1..=5 {
            let mut pos = PositionController::new(len, 10.0).unwrap();
            let seen: Vec<usize> = (0..len * 2)
                .map(|_| {
                    pos.advance(Direction::Prev);
                    pos.index()
                })
                .collect();
            let expected: Vec<usize> = (1..=len * 2).map(|i| (len * 2 - i) % len).collect();
            assert_eq!(seen, expected, "len = {len}");
        }
    }

    #[test]
    fn go_to_round_trips_offset() {
        let mut pos = PositionController::new(4, 300.0).unwrap();
        for k in 0..4 {
            assert_eq!(pos.go_to(k), Ok(-300.0 * k as f64));
            assert_eq!(pos.offset(), -300.0 * k as f64);
        }
    }

    #[test]
    fn go_to_out_of_range_keeps_state() {
        let mut pos = PositionController::new(3, 300.0).unwrap();
        pos.go_to(1).unwrap();
        assert_eq!(
            pos.go_to(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(pos.index(), 1);
        assert_eq!(pos.offset(), -300.0);
    }

    #[test]
    fn peek_does_not_move() {
        let pos = PositionController::new(3, 1.0).unwrap();
        assert_eq!(pos.peek(Direction::Prev), 2);
        assert_eq!(pos.peek(Direction::Next), 1);
        assert_eq!(pos.index(), 0);
    }
}
