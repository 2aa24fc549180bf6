//! One-shot deadlines polled from the tick loop.
//!
//! A `OneShot` is plain owned data: dropping its owner cancels it, and it can
//! only fire from `poll`, which the owner calls on the UI thread.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// A timer that is already armed to fire `after` from `now`.
    pub fn armed(now: Instant, after: Duration) -> Self {
        Self {
            deadline: Some(now + after),
        }
    }

    /// Arm (or re-arm) the timer, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, on the first poll at or past the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
