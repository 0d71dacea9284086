// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Millisecond arithmetic for the autoplay timeout pump.
//!
//! Readings come from `Performance::now()`, which counts from page load and
//! never steps backward, so a deadline minus the current reading is always
//! the true remaining wait.

/// Whole milliseconds from a `DOMHighResTimeStamp`.
///
/// Negative and NaN readings map to `0`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Milliseconds since page load fit in u64; the cast saturates."
)]
pub(crate) fn millis(timestamp: f64) -> u64 {
    timestamp as u64
}

/// `setTimeout` delay that wakes at `deadline` when read at `now`.
///
/// Past deadlines fire immediately; delays beyond `i32::MAX` are clamped.
pub(crate) fn timeout_delay(deadline: u64, now: u64) -> i32 {
    i32::try_from(deadline.saturating_sub(now)).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_truncates_and_saturates() {
        assert_eq!(millis(1_234.9), 1_234);
        assert_eq!(millis(0.2), 0);
        assert_eq!(millis(-5.0), 0);
        assert_eq!(millis(f64::NAN), 0);
    }

    #[test]
    fn delay_never_exceeds_time_to_deadline() {
        let period = 500;
        let started = millis(10_000.4);
        let deadline = started + period;

        // Monotonic readings only move forward, so the wait shrinks to zero.
        for elapsed in [0, 1, 250, 499, 500, 900] {
            let delay = timeout_delay(deadline, started + elapsed);
            assert!(delay >= 0);
            assert!(u64::try_from(delay).unwrap() <= period);
        }
        assert_eq!(timeout_delay(deadline, started), 500);
        assert_eq!(timeout_delay(deadline, started + 900), 0);
    }

    #[test]
    fn far_deadlines_clamp_to_i32() {
        assert_eq!(timeout_delay(u64::MAX, 0), i32::MAX);
    }
}
