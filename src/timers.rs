//! Cooperative timers driven by the host's frame clock.
//!
//! Nothing here sleeps or spawns. The host passes a monotonic `now` (time
//! since startup) and polls once per frame; a timer fires on the first poll
//! at or after its deadline.
//!
//! - [`Debouncer`]: trailing-edge coalescer. Every trigger pushes the
//!   deadline out by the quiet period, so a burst produces one firing.
//! - [`OneShot`]: a deferred action armed at construction. It cannot be
//!   cancelled and fires exactly once.

use std::time::Duration;

/// Coalesces a burst of triggers into one trailing firing.
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Duration>,
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// Records an event, cancelling any pending firing and re-arming.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now + self.quiet);
    }

    /// Returns true once when the quiet period has elapsed since the last trigger.
    pub fn poll(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    pub fn quiet_period(&self) -> Duration {
        self.quiet
    }
}

/// A deferred action that fires exactly once.
#[derive(Debug, Clone)]
pub struct OneShot {
    at: Duration,
    fired: bool,
}

impl OneShot {
    /// Arms the timer to fire `delay` after `now`.
    pub fn new(now: Duration, delay: Duration) -> Self {
        Self {
            at: now + delay,
            fired: false,
        }
    }

    /// Returns true on the first poll at or after the deadline, false forever after.
    pub fn poll(&mut self, now: Duration) -> bool {
        if self.fired || now < self.at {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// The pending deadline, or `None` once fired.
    pub fn deadline(&self) -> Option<Duration> {
        (!self.fired).then_some(self.at)
    }
}
