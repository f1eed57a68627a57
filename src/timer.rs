//! Clock-driven timers for the reveal animations.
//!
//! Nothing here reads the wall clock. Callers pass `now` into every poll, which
//! keeps the sequencer and session state machines deterministic under test.
//! Each scheduled instant is anchored to when it was *due*, not to when it was
//! observed, so a late poll catches up without drifting.

use std::time::{Duration, Instant};

/// Smallest period a timer accepts. Keeps catch-up loops finite.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A fixed-period repeating timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    /// Start an interval at `start`; the first fire is due at `start + period`.
    pub fn starting_at(start: Instant, period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: start + period,
        }
    }

    /// Consume one due fire, if any.
    ///
    /// Returns the instant the fire was scheduled for. Call in a loop to
    /// drain every fire that is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        if now < self.next_due {
            return None;
        }
        let due = self.next_due;
        self.next_due += self.period;
        Some(due)
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// A one-shot deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout {
    deadline: Instant,
}

impl Timeout {
    pub fn after(start: Instant, delay: Duration) -> Self {
        Self {
            deadline: start + delay,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}
