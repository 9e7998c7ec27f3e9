//! Sampling cadence tracking

use log::debug;
use std::time::{Duration, Instant};

/// Decides when a sampling cycle is due.
///
/// The reference point advances by exactly one cadence per cycle rather than
/// jumping to the current time, so a late tick does not push every later
/// cycle back.
#[derive(Debug, Clone)]
pub struct Scheduler {
    cadence: Duration,
    last_sample: Instant,
}

impl Scheduler {
    /// The first cycle is due one cadence after `start`
    pub fn new(cadence: Duration, start: Instant) -> Self {
        Self {
            cadence,
            last_sample: start,
        }
    }

    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    /// When the next cycle becomes due
    pub fn next_due(&self) -> Instant {
        self.last_sample + self.cadence
    }

    /// Returns true if a cycle should run at `now`, and accounts for it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_sample) < self.cadence {
            return false;
        }

        self.last_sample += self.cadence;

        // Still a whole cadence behind: the process was stalled or suspended.
        // Resync instead of running the missed cycles back to back.
        let lag = now.saturating_duration_since(self.last_sample);
        if lag >= self.cadence {
            debug!("Scheduler {:?} behind, skipping missed cycles", lag);
            self.last_sample = now;
        }

        true
    }
}
