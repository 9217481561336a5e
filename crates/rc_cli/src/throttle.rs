//! Minimum interval between sent commands

use std::time::{Duration, Instant};

/// Default inter-send interval
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(75);

/// Send-rate limiter.
///
/// Time is passed in by the caller, so a virtual clock drives it the same
/// way a wall clock does.
#[derive(Debug, Clone)]
pub struct Throttle {
    min_interval: Duration,
    last_send: Option<Instant>,
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl Throttle {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval, last_send: None }
    }

    /// Whether a command may be sent at `now`
    pub fn ready(&self, now: Instant) -> bool {
        match self.last_send {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.min_interval,
        }
    }

    /// Record a command actually sent at `now`
    pub fn record_send(&mut self, now: Instant) {
        self.last_send = Some(now);
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
