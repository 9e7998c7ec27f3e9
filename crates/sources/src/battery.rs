//! Battery sampler implementation using sysfs
//!
//! Reads `energy_now`, `energy_full` and `status` from a power supply
//! directory such as /sys/class/power_supply/BAT0.

use anyhow::{Context, Result};
use dwmbar_core::{Sample, SampleError, Sampler, SamplerMetadata};
use std::fs;
use std::path::{Path, PathBuf};

/// Charging state reported by the `status` file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeStatus {
    Charging,
    Discharging,
    Full,
    Unknown,
}

impl ChargeStatus {
    pub fn from_sysfs(text: &str) -> Self {
        match text.trim() {
            "Charging" => ChargeStatus::Charging,
            "Discharging" => ChargeStatus::Discharging,
            "Full" => ChargeStatus::Full,
            _ => ChargeStatus::Unknown,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            ChargeStatus::Charging => '+',
            ChargeStatus::Discharging => '-',
            ChargeStatus::Full => '=',
            ChargeStatus::Unknown => '?',
        }
    }
}

/// One read of the battery files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryReading {
    pub energy_now: u64,
    pub energy_full: u64,
    pub status: ChargeStatus,
}

impl BatteryReading {
    pub fn read(dir: &Path) -> Result<Self> {
        Ok(Self {
            energy_now: read_int_file(&dir.join("energy_now"))?,
            energy_full: read_int_file(&dir.join("energy_full"))?,
            status: ChargeStatus::from_sysfs(&read_text_file(&dir.join("status"))?),
        })
    }

    /// Charge level rounded to the nearest percent; `None` if `energy_full` is zero.
    ///
    /// Not clamped: worn batteries can report `energy_now` above `energy_full`.
    pub fn percent(&self) -> Option<u64> {
        if self.energy_full == 0 {
            return None;
        }
        Some((self.energy_now as f64 * 100.0 / self.energy_full as f64).round() as u64)
    }
}

/// Read an integer value from a sysfs file
fn read_int_file(path: &Path) -> Result<u64> {
    let content = read_text_file(path)?;
    content
        .trim()
        .parse::<u64>()
        .with_context(|| format!("Failed to parse integer from {}", path.display()))
}

fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Battery sampler, rendering `BAT: <symbol><pct>%|`
pub struct BatterySampler {
    metadata: SamplerMetadata,
    dir: PathBuf,
}

impl BatterySampler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let metadata = SamplerMetadata {
            id: "battery",
            name: "Battery",
            description: format!("Battery charge from {}", dir.display()),
        };

        Self { metadata, dir }
    }
}

impl Sampler for BatterySampler {
    fn metadata(&self) -> &SamplerMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Sample, SampleError> {
        let reading = BatteryReading::read(&self.dir)
            .map_err(|e| SampleError::unavailable("battery", format!("{:#}", e)))?;
        let pct = reading
            .percent()
            .ok_or_else(|| SampleError::unavailable("battery", "energy_full is zero"))?;

        let text = format!("BAT: {}{}%|", reading.status.symbol(), pct);
        Ok(Sample::new("BAT", Some(pct as f64), text))
    }

    fn is_available(&self) -> bool {
        self.dir.join("energy_now").exists()
    }
}
