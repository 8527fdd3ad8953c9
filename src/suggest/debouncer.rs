//! Cancellable one-shot debounce timer
//!
//! Each debounced behavior owns one `Debouncer`. Scheduling replaces any
//! pending deadline, so at most one action can ever be pending; a replaced
//! deadline never fires. The caller supplies the current `Instant`, which
//! keeps timing deterministic under test.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    /// Schedule the action `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Consume the deadline if it has passed
    ///
    /// Returns true at most once per schedule; the caller runs the debounced
    /// action when it does.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
