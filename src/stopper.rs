//! `SearchStopper`: an abstract, cheaply-pollable abort predicate.
//!
//! The search polls `is_stopped()` at throttled frequency (every ~2048 nodes)
//! rather than per-node, so cancellation costs nothing measurable in the hot
//! path while still being detected within milliseconds.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Polled by the search to decide whether to unwind early.
pub trait SearchStopper {
    /// Clear any abort state and (for time-based stoppers) record a new
    /// start time. Called once at the beginning of `Search::run`.
    fn reset(&self);

    /// Request that the current search stop as soon as it is next polled.
    fn abort(&self);

    /// True if the search should unwind now.
    fn is_stopped(&self) -> bool;
}

/// Stopped only by an explicit external `abort()` call, e.g. a UCI `stop`
/// command. Never times out on its own.
#[derive(Default)]
pub struct ManualStopper {
    stopped: AtomicBool,
}

impl ManualStopper {
    #[must_use]
    pub fn new() -> Self {
        ManualStopper { stopped: AtomicBool::new(false) }
    }
}

impl SearchStopper for ManualStopper {
    fn reset(&self) {
        self.stopped.store(false, Ordering::Relaxed);
    }

    fn abort(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Stops once a millisecond budget elapses, or on external `abort()`.
pub struct TimeBudgetStopper {
    budget: Duration,
    start: std::sync::Mutex<Option<Instant>>,
    aborted: AtomicBool,
}

impl TimeBudgetStopper {
    #[must_use]
    pub fn new(budget_ms: u64) -> Self {
        TimeBudgetStopper {
            budget: Duration::from_millis(budget_ms),
            start: std::sync::Mutex::new(None),
            aborted: AtomicBool::new(false),
        }
    }
}

impl SearchStopper for TimeBudgetStopper {
    fn reset(&self) {
        self.aborted.store(false, Ordering::Relaxed);
        *self.start.lock().unwrap() = Some(Instant::now());
    }

    fn abort(&self) {
        self.aborted.store(true, Ordering::Relaxed);
    }

    fn is_stopped(&self) -> bool {
        if self.aborted.load(Ordering::Relaxed) {
            return true;
        }
        match *self.start.lock().unwrap() {
            Some(start) => start.elapsed() >= self.budget,
            None => false,
        }
    }
}

/// How often (in nodes) `Search::negamax` polls the stopper.
pub const POLL_INTERVAL_NODES: u64 = 2048;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_stopper_round_trips() {
        let stopper = ManualStopper::new();
        assert!(!stopper.is_stopped());
        stopper.abort();
        assert!(stopper.is_stopped());
        stopper.reset();
        assert!(!stopper.is_stopped());
    }

    #[test]
    fn time_budget_stopper_expires() {
        let stopper = TimeBudgetStopper::new(1);
        stopper.reset();
        std::thread::sleep(Duration::from_millis(20));
        assert!(stopper.is_stopped());
    }

    #[test]
    fn time_budget_stopper_not_yet_expired() {
        let stopper = TimeBudgetStopper::new(10_000);
        stopper.reset();
        assert!(!stopper.is_stopped());
    }
}
