//! Timer bookkeeping: the resize debounce, the loading delay and the
//! animation reset.
//!
//! These types only track deadlines against an explicit `now`. The host
//! decides how to wake up (a browser `setTimeout`, a frame loop, a test).

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
pub use web_time::{Duration, Instant};

/// Default quiet period before a resize is applied.
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 200;
/// Default simulated loading delay before the first render.
pub const DEFAULT_LOADING_DELAY_MS: u64 = 500;
/// Default slide animation length.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Fires once after a quiet period with no new triggers.
///
/// Every trigger replaces the pending deadline (clear, then reschedule).
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Record an event at `now`, pushing the deadline back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Fire immediately if pending. For hosts whose own timer already waited.
    pub fn flush(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

/// A single deadline that fires once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    due: Instant,
}

impl OneShot {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn due(&self) -> Instant {
        self.due
    }
}
