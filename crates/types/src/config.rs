//! Deployment configuration.
//!
//! Every value has a default matching the reference deployment; the binary
//! overrides individual fields from the command line.

use std::path::PathBuf;
use std::time::Duration;

use crate::color::Color;
use crate::region::ClickRegion;

/// What to do when the assembled status line exceeds its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Cut the line to fit, count and log the truncation, publish anyway
    #[default]
    Truncate,
    /// Skip publishing for this cycle
    Reject,
}

/// Colors used by the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    /// Memory reading at or below the alert threshold
    pub normal: Color,
    /// Memory reading above the alert threshold
    pub alert: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            normal: Color::WHITE,
            alert: Color::RED,
        }
    }
}

fn default_cadence() -> Duration {
    Duration::from_secs(1)
}

fn default_nap() -> Duration {
    Duration::from_millis(200)
}

fn default_click_command() -> String {
    "st -e htop".to_string()
}

/// Click-to-launch settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickConfig {
    pub enabled: bool,
    pub region: ClickRegion,
    /// Shell command line run on a qualifying click
    pub command: String,
}

impl Default for ClickConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            region: ClickRegion::default(),
            command: default_click_command(),
        }
    }
}

/// Full status bar configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarConfig {
    /// Interval between sampling cycles
    pub cadence: Duration,
    /// Sleep between loop iterations (input polling granularity)
    pub nap: Duration,
    pub palette: Palette,
    /// Memory usage percentage above which the alert color is used
    pub memory_alert_pct: u64,
    pub meminfo_path: PathBuf,
    pub disk_root: PathBuf,
    pub disk_home: PathBuf,
    /// Power supply directory containing energy_now, energy_full and status
    pub battery_dir: PathBuf,
    pub overflow: OverflowPolicy,
    pub click: ClickConfig,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            cadence: default_cadence(),
            nap: default_nap(),
            palette: Palette::default(),
            memory_alert_pct: 75,
            meminfo_path: PathBuf::from("/proc/meminfo"),
            disk_root: PathBuf::from("/"),
            disk_home: PathBuf::from("/home"),
            battery_dir: PathBuf::from("/sys/class/power_supply/BAT0"),
            overflow: OverflowPolicy::default(),
            click: ClickConfig::default(),
        }
    }
}
