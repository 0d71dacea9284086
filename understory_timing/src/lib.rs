// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI components often need "wake me up later" behavior (autoplay, cursor
//! blink, long-press detection) without owning an event loop. This crate keeps
//! the bookkeeping of pending deadlines and leaves the actual waiting to the
//! host:
//!
//! 1) Schedule one-shot or repeating timers with [`TimerQueue::schedule_once`]
//!    and [`TimerQueue::schedule_repeating`].
//! 2) Ask [`TimerQueue::next_deadline`] when the host should wake up next, and
//!    arm whatever platform timer is available (`setTimeout`, a winit
//!    `WaitUntil`, a test clock).
//! 3) When woken, call [`TimerQueue::poll`] with the current time to collect the
//!    timers that fired.
//!
//! Times are plain `u64` values in a caller-chosen monotonic unit, typically
//! milliseconds. The queue never reads a clock itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let blink = timers.schedule_repeating(500, 500);
//! let once = timers.schedule_once(200);
//!
//! assert_eq!(timers.next_deadline(), Some(200));
//! assert_eq!(timers.poll(200), vec![once]);
//! assert_eq!(timers.poll(650), vec![blink]);
//!
//! // Repeating timers re-arm themselves; one-shot timers are gone.
//! assert_eq!(timers.next_deadline(), Some(1000));
//! assert!(!timers.is_scheduled(once));
//!
//! timers.cancel(blink);
//! assert!(timers.is_empty());
//! ```
//!
//! ## Missed periods
//!
//! A repeating timer fires at most once per [`TimerQueue::poll`]. If the host
//! slept through several periods, the missed firings are coalesced and the
//! timer is re-armed for the first period boundary after `now`, which matches
//! how browsers treat `setInterval` in background tabs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use smallvec::SmallVec;

/// Opaque identifier for a scheduled timer.
///
/// Identifiers are unique within a single [`TimerQueue`] and are never reused,
/// so a stale id can be passed to [`TimerQueue::cancel`] safely.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Returns the raw numeric value of this id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Whether a timer fires once or keeps re-arming itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once and is removed from the queue.
    Once,
    /// Fires every `period` units until cancelled.
    Repeating {
        /// Distance between consecutive deadlines. Always at least `1`.
        period: u64,
    },
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    id: TimerId,
    deadline: u64,
    kind: TimerKind,
}

/// A small queue of pending deadlines.
///
/// Most widgets own a handful of timers at most, so entries live inline in a
/// `SmallVec` and lookups are linear scans.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    entries: SmallVec<[Entry; 4]>,
    next_id: u64,
}

impl TimerQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a timer that fires once at `deadline`.
    pub fn schedule_once(&mut self, deadline: u64) -> TimerId {
        self.push(deadline, TimerKind::Once)
    }

    /// Schedules a timer that first fires at `first_deadline` and then every
    /// `period` units after that.
    ///
    /// A `period` of zero is treated as `1` so a repeating timer can never fire
    /// infinitely often within a single instant.
    pub fn schedule_repeating(&mut self, first_deadline: u64, period: u64) -> TimerId {
        self.push(
            first_deadline,
            TimerKind::Repeating {
                period: period.max(1),
            },
        )
    }

    /// Cancels a timer. Returns `true` if it was still scheduled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Removes every pending timer.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if `id` is still pending.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the pending deadline of `id`, if it is still scheduled.
    #[must_use]
    pub fn deadline_of(&self, id: TimerId) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.deadline)
    }

    /// Returns the kind of `id`, if it is still scheduled.
    #[must_use]
    pub fn kind_of(&self, id: TimerId) -> Option<TimerKind> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.kind)
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collects every timer whose deadline is at or before `now`.
    ///
    /// Fired ids are returned in deadline order; ties keep scheduling order.
    /// One-shot timers are removed. Repeating timers are re-armed for the first
    /// period boundary strictly after `now`.
    pub fn poll(&mut self, now: u64) -> Vec<TimerId> {
        let mut fired: SmallVec<[(u64, TimerId); 4]> = SmallVec::new();
        self.entries.retain(|entry| {
            if entry.deadline > now {
                return true;
            }
            fired.push((entry.deadline, entry.id));
            match entry.kind {
                TimerKind::Once => false,
                TimerKind::Repeating { period } => {
                    let missed = (now - entry.deadline) / period;
                    entry.deadline += (missed + 1) * period;
                    true
                }
            }
        });
        // Stable sort keeps scheduling order between equal deadlines.
        fired.sort_by_key(|&(deadline, _)| deadline);
        fired.into_iter().map(|(_, id)| id).collect()
    }

    fn push(&mut self, deadline: u64, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.entries.push(Entry { id, deadline, kind });
        id
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn new_queue_is_empty() {
        let timers = TimerQueue::new();
        assert!(timers.is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn once_fires_at_deadline_and_is_removed() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_once(100);

        assert!(timers.poll(99).is_empty());
        assert_eq!(timers.poll(100), vec![id]);
        assert!(!timers.is_scheduled(id));
        assert!(timers.poll(1_000).is_empty());
    }

    #[test]
    fn repeating_rearms_after_each_period() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(500, 500);

        assert_eq!(timers.poll(500), vec![id]);
        assert_eq!(timers.deadline_of(id), Some(1_000));
        assert!(timers.poll(999).is_empty());
        assert_eq!(timers.poll(1_000), vec![id]);
        assert_eq!(timers.deadline_of(id), Some(1_500));
    }

    #[test]
    fn repeating_coalesces_missed_periods() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(500, 500);

        // Slept through five periods: one firing, next boundary after now.
        assert_eq!(timers.poll(2_700), vec![id]);
        assert_eq!(timers.deadline_of(id), Some(3_000));
    }

    #[test]
    fn zero_period_is_clamped_to_one() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(10, 0);

        assert_eq!(timers.kind_of(id), Some(TimerKind::Repeating { period: 1 }));
        assert_eq!(timers.poll(10), vec![id]);
        assert_eq!(timers.deadline_of(id), Some(11));
    }

    #[test]
    fn poll_returns_fired_in_deadline_order() {
        let mut timers = TimerQueue::new();
        let late = timers.schedule_once(30);
        let early = timers.schedule_once(10);
        let tie = timers.schedule_once(10);

        assert_eq!(timers.poll(50), vec![early, tie, late]);
    }

    #[test]
    fn cancel_reports_whether_timer_was_pending() {
        let mut timers = TimerQueue::new();
        let id = timers.schedule_repeating(100, 100);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.poll(10_000).is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_cancel() {
        let mut timers = TimerQueue::new();
        let first = timers.schedule_once(1);
        timers.cancel(first);
        let second = timers.schedule_once(1);

        assert_ne!(first, second);
        assert!(!timers.cancel(first));
        assert!(timers.is_scheduled(second));
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let mut timers = TimerQueue::new();
        timers.schedule_once(300);
        let soon = timers.schedule_once(100);

        assert_eq!(timers.next_deadline(), Some(100));
        timers.cancel(soon);
        assert_eq!(timers.next_deadline(), Some(300));
        timers.clear();
        assert_eq!(timers.next_deadline(), None);
    }
}
