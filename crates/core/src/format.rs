//! Status line assembly
//!
//! The layout is fixed: battery, memory, root disk, home disk, clock.
//! Sampler failures stop here; each failed slot is replaced by its sentinel.

use std::sync::atomic::{AtomicU64, Ordering};

use dwmbar_types::{OverflowPolicy, Palette, Sample, StatusString};
use log::{debug, warn};

use crate::constants::{BATTERY_SENTINEL, DISK_PLACEHOLDER, MEMORY_SENTINEL};
use crate::error::{FormatError, SampleError};

/// One cycle's worth of sampler output, in display order
#[derive(Debug)]
pub struct StatusSamples {
    pub battery: Result<Sample, SampleError>,
    pub memory: Result<Sample, SampleError>,
    pub disk_root: Result<Sample, SampleError>,
    pub disk_home: Result<Sample, SampleError>,
    /// The clock has no sentinel; a failed clock never reaches the formatter
    pub clock: Sample,
}

/// Builds the status line from samples
pub struct StatusFormatter {
    palette: Palette,
    policy: OverflowPolicy,
    truncations: AtomicU64,
}

impl StatusFormatter {
    pub fn new(palette: Palette, policy: OverflowPolicy) -> Self {
        Self {
            palette,
            policy,
            truncations: AtomicU64::new(0),
        }
    }

    /// Number of status lines cut down to capacity so far
    pub fn truncation_count(&self) -> u64 {
        self.truncations.load(Ordering::Relaxed)
    }

    pub fn format(&self, samples: &StatusSamples) -> Result<StatusString, FormatError> {
        let line = self.render(samples);

        match StatusString::from_string(line) {
            Ok(status) => Ok(status),
            Err(line) => match self.policy {
                OverflowPolicy::Truncate => {
                    let count = self.truncations.fetch_add(1, Ordering::Relaxed) + 1;
                    warn!(
                        "Status line is {} bytes, truncating to {} (truncation #{})",
                        line.len(),
                        StatusString::MAX_LEN,
                        count
                    );
                    Ok(StatusString::truncate_from(line))
                }
                OverflowPolicy::Reject => Err(FormatError::CapacityExceeded {
                    len: line.len(),
                    capacity: StatusString::MAX_LEN,
                }),
            },
        }
    }

    fn render(&self, samples: &StatusSamples) -> String {
        let fg = self.palette.foreground.fg();

        format!(
            "{bg}{fg}{battery} {memory} | HDD R: {root} H: {home} | {fg}{clock}",
            bg = self.palette.background.bg(),
            fg = fg,
            battery = fragment("battery", &samples.battery, BATTERY_SENTINEL),
            memory = fragment("memory", &samples.memory, MEMORY_SENTINEL),
            root = fragment("disk root", &samples.disk_root, DISK_PLACEHOLDER),
            home = fragment("disk home", &samples.disk_home, DISK_PLACEHOLDER),
            clock = samples.clock.text,
        )
    }
}

fn fragment<'a>(slot: &str, sample: &'a Result<Sample, SampleError>, sentinel: &'a str) -> &'a str {
    match sample {
        Ok(sample) => &sample.text,
        Err(e) => {
            debug!("{} sample failed, using '{}': {}", slot, sentinel, e);
            sentinel
        }
    }
}
