//! Run loop tests with in-memory samplers, display and spawner

use dwmbar::StatusBar;
use dwmbar_core::{
    DisplayError, InputWatcher, Point, PressSource, PublishError, Publisher, Sample, SampleError,
    Sampler, SamplerMetadata, SpawnError, Spawner, StatusString,
};
use dwmbar_sources::SamplerSet;
use dwmbar_types::{BarConfig, ClickRegion, OverflowPolicy};
use std::time::Duration;

/// Returns the same reading every time, or fails if `text` is None
struct Fixed {
    metadata: SamplerMetadata,
    text: Option<String>,
    fatal: bool,
}

impl Fixed {
    fn new(id: &'static str, text: Option<&str>, fatal: bool) -> Box<Self> {
        Box::new(Self {
            metadata: SamplerMetadata {
                id,
                name: id,
                description: String::new(),
            },
            text: text.map(str::to_string),
            fatal,
        })
    }

    fn ok(id: &'static str, text: &str) -> Box<Self> {
        Self::new(id, Some(text), false)
    }

    fn missing(id: &'static str) -> Box<Self> {
        Self::new(id, None, false)
    }

    fn broken_clock() -> Box<Self> {
        Self::new("clock", None, true)
    }
}

impl Sampler for Fixed {
    fn metadata(&self) -> &SamplerMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Sample, SampleError> {
        match (&self.text, self.fatal) {
            (Some(text), _) => Ok(Sample::new(self.metadata.id, None, text.clone())),
            (None, true) => Err(SampleError::Clock("clock_gettime failed".to_string())),
            (None, false) => Err(SampleError::unavailable(self.metadata.id, "not present")),
        }
    }
}

#[derive(Default)]
struct FakeDisplay {
    published: Vec<String>,
    presses: Vec<Point>,
    broken: bool,
}

#[derive(Debug)]
struct ConnectionLost;

impl std::fmt::Display for ConnectionLost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("connection lost")
    }
}

impl std::error::Error for ConnectionLost {}

impl Publisher for FakeDisplay {
    fn publish(&mut self, status: &StatusString) -> Result<(), PublishError> {
        if self.broken {
            return Err(DisplayError::new(ConnectionLost).into());
        }
        assert!(status.len() <= StatusString::MAX_LEN);
        self.published.push(status.to_string());
        Ok(())
    }
}

impl PressSource for FakeDisplay {
    fn pending_presses(&mut self) -> Result<Vec<Point>, DisplayError> {
        Ok(std::mem::take(&mut self.presses))
    }
}

#[derive(Default)]
struct RecordingSpawner {
    launched: Vec<String>,
}

impl Spawner for RecordingSpawner {
    fn spawn(&mut self, command: &str) -> Result<(), SpawnError> {
        self.launched.push(command.to_string());
        Ok(())
    }
}

fn samplers() -> SamplerSet {
    SamplerSet::new(
        Fixed::ok("battery", "BAT: -50%|"),
        Fixed::ok("memory", "^c#ffffff^MEM: 42%^c#ffffff^"),
        Fixed::ok("disk", "61%"),
        Fixed::ok("disk", "12%"),
        Fixed::ok("clock", "Fri Oct 16 14:03:59"),
    )
}

const EXPECTED: &str = "^b#000000^^c#ffffff^BAT: -50%| ^c#ffffff^MEM: 42%^c#ffffff^ | HDD R: 61% H: 12% | ^c#ffffff^Fri Oct 16 14:03:59";

fn bar(samplers: SamplerSet, display: FakeDisplay) -> StatusBar<FakeDisplay, RecordingSpawner> {
    StatusBar::new(&BarConfig::default(), samplers, display)
}

#[tokio::test(start_paused = true)]
async fn test_publishes_once_per_cadence() {
    let mut bar = bar(samplers(), FakeDisplay::default());

    bar.run(tokio::time::sleep(Duration::from_millis(5_500)))
        .await
        .unwrap();

    assert_eq!(bar.published(), 5);
    assert_eq!(bar.display().published, vec![EXPECTED.to_string(); 5]);
}

#[tokio::test(start_paused = true)]
async fn test_missing_battery_still_publishes() {
    let samplers = SamplerSet::new(
        Fixed::missing("battery"),
        Fixed::ok("memory", "^c#ffffff^MEM: 42%^c#ffffff^"),
        Fixed::ok("disk", "61%"),
        Fixed::missing("disk"),
        Fixed::ok("clock", "Fri Oct 16 14:03:59"),
    );
    let mut bar = bar(samplers, FakeDisplay::default());

    bar.run(tokio::time::sleep(Duration::from_millis(1_500)))
        .await
        .unwrap();

    assert_eq!(
        bar.display().published,
        vec![
            "^b#000000^^c#ffffff^ ^c#ffffff^MEM: 42%^c#ffffff^ | HDD R: 61% H: N/A | ^c#ffffff^Fri Oct 16 14:03:59"
                .to_string()
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_clicks_dispatch_between_cycles() {
    let display = FakeDisplay {
        presses: vec![Point::new(3000, 10), Point::new(100, 10), Point::new(3001, 19)],
        ..Default::default()
    };
    let watcher = InputWatcher::new(
        ClickRegion::new(2960, 3630, 0, 20),
        "st -e htop",
        RecordingSpawner::default(),
    );
    let mut bar = bar(samplers(), display).with_watcher(watcher);

    // Input is handled on the very first tick, well before the first cycle
    bar.run(tokio::time::sleep(Duration::from_millis(100)))
        .await
        .unwrap();

    assert_eq!(bar.published(), 0);
    let launched = &bar.watcher().unwrap().spawner().launched;
    assert_eq!(launched, &vec!["st -e htop".to_string(); 2]);
}

#[tokio::test(start_paused = true)]
async fn test_display_failure_is_fatal() {
    let display = FakeDisplay {
        broken: true,
        ..Default::default()
    };
    let mut bar = bar(samplers(), display);

    let err = bar
        .run(tokio::time::sleep(Duration::from_secs(60)))
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("connection lost"));
    assert_eq!(bar.published(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_clock_failure_is_fatal() {
    let samplers = SamplerSet::new(
        Fixed::ok("battery", "BAT: -50%|"),
        Fixed::ok("memory", "MEM"),
        Fixed::ok("disk", "61%"),
        Fixed::ok("disk", "12%"),
        Fixed::broken_clock(),
    );
    let mut bar = bar(samplers, FakeDisplay::default());

    let err = bar
        .run(tokio::time::sleep(Duration::from_secs(60)))
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("clock_gettime failed"));
}

#[tokio::test(start_paused = true)]
async fn test_oversized_line_is_skipped_when_rejecting() {
    let samplers = SamplerSet::new(
        Fixed::ok("battery", "BAT: -50%|"),
        Fixed::ok("memory", &"M".repeat(600)),
        Fixed::ok("disk", "61%"),
        Fixed::ok("disk", "12%"),
        Fixed::ok("clock", "Fri Oct 16 14:03:59"),
    );
    let config = BarConfig {
        overflow: OverflowPolicy::Reject,
        ..BarConfig::default()
    };
    let mut bar: StatusBar<FakeDisplay, RecordingSpawner> =
        StatusBar::new(&config, samplers, FakeDisplay::default());

    bar.cycle().unwrap();
    assert_eq!(bar.published(), 0);
    assert_eq!(bar.truncations(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_oversized_line_is_truncated_by_default() {
    let samplers = SamplerSet::new(
        Fixed::ok("battery", "BAT: -50%|"),
        Fixed::ok("memory", &"M".repeat(600)),
        Fixed::ok("disk", "61%"),
        Fixed::ok("disk", "12%"),
        Fixed::ok("clock", "Fri Oct 16 14:03:59"),
    );
    let mut bar = bar(samplers, FakeDisplay::default());

    bar.cycle().unwrap();
    assert_eq!(bar.published(), 1);
    assert_eq!(bar.truncations(), 1);
    assert_eq!(bar.display().published[0].len(), StatusString::MAX_LEN);
}
