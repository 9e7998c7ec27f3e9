//! Memory (RAM) sampler implementation

use anyhow::{anyhow, Context, Result};
use dwmbar_core::{Sample, SampleError, Sampler, SamplerMetadata};
use dwmbar_types::Color;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters from /proc/meminfo, in kB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemInfo {
    pub total: u64,
    pub free: u64,
    pub available: Option<u64>,
    pub buffers: u64,
    pub cached: u64,
}

impl MemInfo {
    /// Parse the contents of /proc/meminfo
    pub fn parse(content: &str) -> Result<Self> {
        let mut total = None;
        let mut free = None;
        let mut available = None;
        let mut buffers = None;
        let mut cached = None;

        for line in content.lines() {
            let Some((key, rest)) = line.split_once(':') else {
                continue;
            };
            let slot = match key.trim() {
                "MemTotal" => &mut total,
                "MemFree" => &mut free,
                "MemAvailable" => &mut available,
                "Buffers" => &mut buffers,
                "Cached" => &mut cached,
                _ => continue,
            };
            let value = rest
                .split_whitespace()
                .next()
                .ok_or_else(|| anyhow!("Missing value for {}", key))?;
            *slot = Some(
                value
                    .parse::<u64>()
                    .with_context(|| format!("Failed to parse {} value '{}'", key, value))?,
            );
        }

        Ok(Self {
            total: total.ok_or_else(|| anyhow!("MemTotal not found"))?,
            free: free.ok_or_else(|| anyhow!("MemFree not found"))?,
            available,
            buffers: buffers.ok_or_else(|| anyhow!("Buffers not found"))?,
            cached: cached.ok_or_else(|| anyhow!("Cached not found"))?,
        })
    }

    /// Read and parse a meminfo file
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content)
    }

    /// Percentage of memory neither free nor reclaimable from buffers/cache.
    ///
    /// Integer division, always within 0..=100. `None` when MemTotal is zero.
    pub fn used_pct(&self) -> Option<u64> {
        if self.total == 0 {
            return None;
        }
        let used = self
            .total
            .saturating_sub(self.free)
            .saturating_sub(self.cached)
            .saturating_sub(self.buffers);
        Some((u128::from(used) * 100 / u128::from(self.total)) as u64)
    }
}

/// Memory sampler
///
/// Renders `^c<color>^MEM: <pct>%^c<reset>^`, switching to the alert color
/// above the threshold.
pub struct MemorySampler {
    metadata: SamplerMetadata,
    path: PathBuf,
    normal: Color,
    alert: Color,
    reset: Color,
    alert_pct: u64,
}

impl MemorySampler {
    pub fn new(path: impl Into<PathBuf>, normal: Color, alert: Color, reset: Color) -> Self {
        let path = path.into();
        let metadata = SamplerMetadata {
            id: "memory",
            name: "Memory (RAM)",
            description: format!("Memory usage from {}", path.display()),
        };

        Self {
            metadata,
            path,
            normal,
            alert,
            reset,
            alert_pct: 75,
        }
    }

    /// Set the percentage above which the alert color is used
    pub fn with_alert_threshold(mut self, alert_pct: u64) -> Self {
        self.alert_pct = alert_pct;
        self
    }

    fn color_for(&self, pct: u64) -> Color {
        if pct > self.alert_pct {
            self.alert
        } else {
            self.normal
        }
    }
}

impl Sampler for MemorySampler {
    fn metadata(&self) -> &SamplerMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Sample, SampleError> {
        let info = MemInfo::read(&self.path)
            .map_err(|e| SampleError::unavailable("memory", format!("{:#}", e)))?;
        let pct = info
            .used_pct()
            .ok_or_else(|| SampleError::unavailable("memory", "MemTotal is zero"))?;

        let color = self.color_for(pct);
        let text = format!("{}MEM: {}%{}", color.fg(), pct, self.reset.fg());

        Ok(Sample::new("MEM", Some(pct as f64), text).with_color(color))
    }

    fn is_available(&self) -> bool {
        self.path.exists()
    }
}
