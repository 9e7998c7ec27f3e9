//! Click-to-launch input handling
//!
//! A raw pointer press inside the click region launches a fixed command.
//! Launches are fire-and-forget and there is no debounce: every qualifying
//! press launches one process.

use dwmbar_types::{ClickRegion, Point};
use log::{info, trace, warn};

use crate::error::{DisplayError, SpawnError};

/// Source of raw pointer presses
pub trait PressSource {
    /// Drain pending presses without blocking.
    ///
    /// Each entry is the pointer's root position observed for one press.
    fn pending_presses(&mut self) -> Result<Vec<Point>, DisplayError>;
}

/// Launches a command line without waiting for it
pub trait Spawner {
    fn spawn(&mut self, command: &str) -> Result<(), SpawnError>;
}

/// Watcher state. `Dispatching` only lasts for the duration of a spawn call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatchState {
    #[default]
    Idle,
    Dispatching,
}

/// What a single press led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// Outside the click region
    Ignored,
    Spawned,
    /// Inside the region but the spawn failed (logged)
    SpawnFailed,
}

/// Hit-tests presses against the click region and launches the command
pub struct InputWatcher<S> {
    region: ClickRegion,
    command: String,
    spawner: S,
    state: WatchState,
}

impl<S: Spawner> InputWatcher<S> {
    pub fn new(region: ClickRegion, command: impl Into<String>, spawner: S) -> Self {
        Self {
            region,
            command: command.into(),
            spawner,
            state: WatchState::Idle,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn region(&self) -> ClickRegion {
        self.region
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    pub fn on_press(&mut self, point: Point) -> PressOutcome {
        if !self.region.contains(point) {
            trace!("Press at ({}, {}) outside click region", point.x, point.y);
            return PressOutcome::Ignored;
        }

        self.state = WatchState::Dispatching;
        let outcome = match self.spawner.spawn(&self.command) {
            Ok(()) => {
                info!(
                    "Press at ({}, {}) launched '{}'",
                    point.x, point.y, self.command
                );
                PressOutcome::Spawned
            }
            Err(e) => {
                warn!("{}", e);
                PressOutcome::SpawnFailed
            }
        };
        self.state = WatchState::Idle;

        outcome
    }

    /// Drain `source` and handle every press. Returns the number of launches.
    pub fn poll<P: PressSource + ?Sized>(&mut self, source: &mut P) -> Result<usize, DisplayError> {
        let mut spawned = 0;
        for point in source.pending_presses()? {
            if self.on_press(point) == PressOutcome::Spawned {
                spawned += 1;
            }
        }
        Ok(spawned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSpawner {
        launched: Vec<String>,
        fail: bool,
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&mut self, command: &str) -> Result<(), SpawnError> {
            if self.fail {
                return Err(SpawnError {
                    command: command.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            self.launched.push(command.to_string());
            Ok(())
        }
    }

    struct QueuedPresses(Vec<Point>);

    impl PressSource for QueuedPresses {
        fn pending_presses(&mut self) -> Result<Vec<Point>, DisplayError> {
            Ok(std::mem::take(&mut self.0))
        }
    }

    fn watcher() -> InputWatcher<RecordingSpawner> {
        InputWatcher::new(
            ClickRegion::new(2960, 3630, 0, 20),
            "st -e htop",
            RecordingSpawner::default(),
        )
    }

    #[test]
    fn test_press_inside_region_spawns_once() {
        let mut watcher = watcher();
        assert_eq!(watcher.on_press(Point::new(3000, 10)), PressOutcome::Spawned);
        assert_eq!(watcher.spawner().launched, vec!["st -e htop".to_string()]);
        assert_eq!(watcher.state(), WatchState::Idle);
    }

    #[test]
    fn test_press_outside_region_spawns_nothing() {
        let mut watcher = watcher();
        assert_eq!(watcher.on_press(Point::new(100, 10)), PressOutcome::Ignored);
        assert!(watcher.spawner().launched.is_empty());
    }

    #[test]
    fn test_rapid_presses_are_not_debounced() {
        let mut watcher = watcher();
        let mut source = QueuedPresses(vec![
            Point::new(3000, 10),
            Point::new(3001, 10),
            Point::new(100, 10),
            Point::new(3630, 20),
        ]);

        assert_eq!(watcher.poll(&mut source).unwrap(), 3);
        assert_eq!(watcher.spawner().launched.len(), 3);

        // Queue drained
        assert_eq!(watcher.poll(&mut source).unwrap(), 0);
    }

    #[test]
    fn test_spawn_failure_returns_to_idle() {
        let mut watcher = InputWatcher::new(
            ClickRegion::default(),
            "missing-binary",
            RecordingSpawner {
                fail: true,
                ..Default::default()
            },
        );
        assert_eq!(watcher.on_press(Point::new(3000, 10)), PressOutcome::SpawnFailed);
        assert_eq!(watcher.state(), WatchState::Idle);
    }
}
