use std::time::{Duration, Instant};

/// Cancellable periodic tick scheduler owned by the driver loop.
///
/// The ticker never sleeps or spawns anything; the driver polls it with
/// the current instant and advances the game when a tick is due. Tests
/// drive it with synthetic instants instead of wall-clock waits.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_fire: Option<Instant>,
}

impl Ticker {
    /// Creates a cancelled ticker with the given interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fire: None,
        }
    }

    /// Arms the ticker; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.last_fire = Some(now);
    }

    /// Disarms the ticker until the next `start`.
    pub fn cancel(&mut self) {
        self.last_fire = None;
    }

    /// Returns true while the ticker is armed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.last_fire.is_some()
    }

    /// Returns true when a tick is due, consuming the elapsed interval.
    ///
    /// Missed intervals collapse into a single fire; the game does not
    /// run catch-up ticks after a stall.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.last_fire {
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_fire = Some(now);
                true
            }
            _ => false,
        }
    }

    /// Returns the configured tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
