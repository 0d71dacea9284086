// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for carousel construction and navigation.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Structural pieces a carousel cannot work without.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The widget root (located by the configured selector).
    Root,
    /// The element that receives the horizontal offset.
    Container,
    /// The slide collection; it must contain at least one slide.
    Slides,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Root => "root",
            Self::Container => "container",
            Self::Slides => "slides",
        })
    }
}

/// Errors raised by carousel operations.
///
/// Every failing operation leaves the carousel state untouched.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum CarouselError {
    /// A jump target outside `[0, len)`.
    #[error("slide index {index} is out of range for {len} slides")]
    IndexOutOfRange {
        /// The rejected 0-based index.
        index: usize,
        /// Number of slides.
        len: usize,
    },

    /// A required anchor is absent or empty.
    #[error("missing carousel anchor: {0}")]
    MissingAnchor(Anchor),

    /// The measured slide width cannot drive offset math.
    #[error("slide width must be finite and positive, got {width}")]
    InvalidSlideWidth {
        /// The measured width.
        width: f64,
    },

    /// A position attribute that is not a positive integer.
    #[error("malformed 1-based position {raw:?}")]
    MalformedPosition {
        /// The attribute text as read from the view.
        raw: String,
    },
}

/// Result type alias for carousel operations.
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Parses a declared 1-based position attribute (`"1"`, `" 3 "`).
///
/// Attribute values come from markup and are treated as untrusted: anything
/// other than a positive integer is rejected.
pub fn parse_position(raw: &str) -> CarouselResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(CarouselError::MalformedPosition { raw: raw.into() }),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn parse_position_accepts_positive_integers() {
        assert_eq!(parse_position("1"), Ok(1));
        assert_eq!(parse_position(" 12 "), Ok(12));
    }

    #[test]
    fn parse_position_rejects_zero_and_garbage() {
        for raw in ["0", "", "-1", "two", "1.5"] {
            assert_eq!(
                parse_position(raw),
                Err(CarouselError::MalformedPosition { raw: raw.into() }),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn messages_name_the_problem() {
        let err = CarouselError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "slide index 5 is out of range for 3 slides");

        let err = CarouselError::MissingAnchor(Anchor::Slides);
        assert_eq!(err.to_string(), "missing carousel anchor: slides");
    }
}
