//! Virtual clock for presentation delays.
//!
//! The orchestrator never sleeps. It schedules steps with a delay and the
//! host advances the clock (from a frame timer, or all at once in tests).
//! Each step is stamped with the epoch current when it was scheduled; a
//! reset bumps the epoch so steps from an abandoned game can be recognized
//! and dropped when they come due. Nothing is ever cancelled.

use std::collections::VecDeque;
use std::time::Duration;

/// A step waiting for its due time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduled<S> {
    /// Clock reading at which the step fires.
    pub due: Duration,
    /// Epoch the step was scheduled in.
    pub epoch: u64,
    /// The step itself.
    pub step: S,
}

/// Ordered queue of delayed steps.
///
/// Steps fire in due order; steps due at the same instant fire in the order
/// they were scheduled.
#[derive(Clone, Debug)]
pub struct Timeline<S> {
    now: Duration,
    epoch: u64,
    pending: VecDeque<Scheduled<S>>,
}

impl<S> Default for Timeline<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Timeline<S> {
    /// Empty timeline at time zero, epoch zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            epoch: 0,
            pending: VecDeque::new(),
        }
    }

    /// Current clock reading.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Current epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new epoch. Already-scheduled steps become stale.
    pub fn bump_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Schedule a step `delay` after now, in the current epoch.
    pub fn schedule(&mut self, delay: Duration, step: S) {
        let due = self.now + delay;
        let at = self.pending.partition_point(|s| s.due <= due);
        self.pending.insert(
            at,
            Scheduled {
                due,
                epoch: self.epoch,
                step,
            },
        );
    }

    /// Due time of the earliest pending step.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.front().map(|s| s.due)
    }

    /// Remove the earliest step if it is due by `limit`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, limit: Duration) -> Option<Scheduled<S>> {
        if self.pending.front()?.due > limit {
            return None;
        }
        let scheduled = self.pending.pop_front()?;
        self.now = self.now.max(scheduled.due);
        Some(scheduled)
    }

    /// Move the clock forward to `to`. Never moves backwards.
    pub fn advance_clock(&mut self, to: Duration) {
        self.now = self.now.max(to);
    }

    /// True if a step from the current epoch is still waiting.
    #[must_use]
    pub fn has_current(&self) -> bool {
        self.pending.iter().any(|s| s.epoch == self.epoch)
    }

    /// Number of waiting steps, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
