//! Cancellable deferred callbacks.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Identifies one scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerToken(pub u64);

impl std::fmt::Display for TimerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Source of deferred ticks.
///
/// The rendering layer implements this over its own timer facility (an
/// event loop, a UI framework's timeout) and delivers each fired token back
/// to the engine. Implementations must never run the callback inline from
/// `schedule`.
pub trait Scheduler {
    /// Request a tick `delay` from now.
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Cancel a pending tick.
    ///
    /// Cancelling a token that already fired or was never issued is a
    /// no-op. Receivers still guard against a cancelled tick arriving.
    fn cancel(&mut self, token: TimerToken);
}

/// Deterministic scheduler driven by explicit time advancement.
///
/// Used by tests and headless front ends. Ticks fire in deadline order;
/// ties fire in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_token: u64,
    queue: BinaryHeap<Reverse<(Duration, TimerToken)>>,
    cancelled: FxHashSet<TimerToken>,
}

impl VirtualClock {
    /// Create a clock at time zero with nothing scheduled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of ticks scheduled and not cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue
            .iter()
            .filter(|Reverse((_, token))| !self.cancelled.contains(token))
            .count()
    }

    /// Deadline of the earliest live tick.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|Reverse((_, token))| !self.cancelled.contains(token))
            .map(|Reverse((deadline, _))| *deadline)
            .min()
    }

    /// Pop the earliest live tick due at or before `until`.
    ///
    /// Time advances to that tick's deadline. Returns `None` once nothing
    /// is due, leaving time unchanged.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerToken> {
        while let Some(Reverse((deadline, token))) = self.queue.peek().copied() {
            if deadline > until {
                return None;
            }
            self.queue.pop();
            if self.cancelled.remove(&token) {
                continue;
            }
            self.now = self.now.max(deadline);
            return Some(token);
        }
        None
    }

    /// Move time forward to `at` without firing anything. Time never runs
    /// backwards.
    pub fn advance_to(&mut self, at: Duration) {
        self.now = self.now.max(at);
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.queue.push(Reverse((self.now + delay, token)));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        let queued = self.queue.iter().any(|Reverse((_, t))| *t == token);
        if queued {
            self.cancelled.insert(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_in_deadline_order() {
        let mut clock = VirtualClock::new();
        let late = clock.schedule(30 * MS);
        let early = clock.schedule(10 * MS);

        assert_eq!(clock.pop_due(100 * MS), Some(early));
        assert_eq!(clock.now(), 10 * MS);
        assert_eq!(clock.pop_due(100 * MS), Some(late));
        assert_eq!(clock.now(), 30 * MS);
        assert_eq!(clock.pop_due(100 * MS), None);
    }

    #[test]
    fn test_ties_fire_in_scheduling_order() {
        let mut clock = VirtualClock::new();
        let a = clock.schedule(5 * MS);
        let b = clock.schedule(5 * MS);

        assert_eq!(clock.pop_due(5 * MS), Some(a));
        assert_eq!(clock.pop_due(5 * MS), Some(b));
    }

    #[test]
    fn test_not_due_yet() {
        let mut clock = VirtualClock::new();
        clock.schedule(50 * MS);

        assert_eq!(clock.pop_due(49 * MS), None);
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.next_deadline(), Some(50 * MS));
    }

    #[test]
    fn test_cancelled_ticks_never_fire() {
        let mut clock = VirtualClock::new();
        let a = clock.schedule(10 * MS);
        let b = clock.schedule(20 * MS);
        clock.cancel(a);

        assert_eq!(clock.pending(), 1);
        assert_eq!(clock.next_deadline(), Some(20 * MS));
        assert_eq!(clock.pop_due(100 * MS), Some(b));
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn test_cancel_unknown_token_is_noop() {
        let mut clock = VirtualClock::new();
        clock.cancel(TimerToken(99));
        let a = clock.schedule(MS);

        assert_eq!(a, TimerToken(0));
        assert_eq!(clock.pop_due(MS), Some(a));
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut clock = VirtualClock::new();
        clock.advance_to(100 * MS);
        clock.schedule(10 * MS);

        assert_eq!(clock.next_deadline(), Some(110 * MS));
        clock.advance_to(50 * MS);
        assert_eq!(clock.now(), 100 * MS);
    }
}
