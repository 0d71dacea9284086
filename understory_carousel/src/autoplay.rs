// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timing on top of [`understory_timing::TimerQueue`].
//!
//! The driver only answers "how many ticks are due at `now`?". Hosts decide
//! how to wake up, typically by arming a platform timer for
//! [`Autoplay::next_deadline`].

use understory_timing::{TimerId, TimerQueue};

/// A stoppable repeating tick.
///
/// Starting acquires a timer in the queue and stopping releases it; a stopped
/// driver never reports ticks.
#[derive(Clone, Debug)]
pub struct Autoplay {
    queue: TimerQueue,
    timer: Option<TimerId>,
    period: u64,
}

impl Autoplay {
    /// Creates a stopped driver with the given interval.
    #[must_use]
    pub fn new(period: u64) -> Self {
        Self {
            queue: TimerQueue::new(),
            timer: None,
            period,
        }
    }

    /// Interval between ticks.
    #[must_use]
    pub fn period(&self) -> u64 {
        self.period
    }

    /// Returns `true` while started.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts ticking; the first tick is due one period after `now`.
    ///
    /// Returns `false` if the driver was already running.
    pub fn start(&mut self, now: u64) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(
            self.queue
                .schedule_repeating(now.saturating_add(self.period), self.period),
        );
        true
    }

    /// Stops ticking. Returns `false` if the driver was not running.
    pub fn stop(&mut self) -> bool {
        match self.timer.take() {
            Some(id) => self.queue.cancel(id),
            None => false,
        }
    }

    /// When the next tick is due, if running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.next_deadline()
    }

    /// Returns `true` if a tick was due at `now`.
    ///
    /// Missed periods coalesce into a single tick.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.timer {
            Some(id) => self.queue.poll(now).contains(&id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_driver_never_ticks() {
        let mut autoplay = Autoplay::new(500);
        assert!(!autoplay.poll(10_000));
        assert_eq!(autoplay.next_deadline(), None);
    }

    #[test]
    fn ticks_once_per_period() {
        let mut autoplay = Autoplay::new(500);
        assert!(autoplay.start(1_000));
        assert!(!autoplay.start(1_200), "second start is a no-op");

        assert!(!autoplay.poll(1_499));
        assert!(autoplay.poll(1_500));
        assert!(!autoplay.poll(1_999));
        assert!(autoplay.poll(2_000));
        assert_eq!(autoplay.next_deadline(), Some(2_500));
    }

    #[test]
    fn stop_releases_the_timer() {
        let mut autoplay = Autoplay::new(500);
        autoplay.start(0);
        assert!(autoplay.stop());
        assert!(!autoplay.stop());
        assert!(!autoplay.is_running());
        assert!(!autoplay.poll(5_000));
        assert_eq!(autoplay.next_deadline(), None);
    }

    #[test]
    fn restart_counts_from_new_start() {
        let mut autoplay = Autoplay::new(500);
        autoplay.start(0);
        autoplay.stop();
        autoplay.start(700);
        assert_eq!(autoplay.next_deadline(), Some(1_200));
    }
}
