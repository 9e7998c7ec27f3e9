//! dwmbar-sources: Metric sampler implementations for dwmbar.

mod battery;
mod clock;
mod disk;
mod memory;

pub use battery::{BatteryReading, BatterySampler, ChargeStatus};
pub use clock::ClockSampler;
pub use disk::{DiskSampler, DiskUsage};
pub use memory::{MemInfo, MemorySampler};

use dwmbar_core::{BoxedSampler, SampleError, StatusSamples};
use dwmbar_types::BarConfig;
use log::{debug, info};

/// The fixed set of samplers behind one status line, one per slot
pub struct SamplerSet {
    battery: BoxedSampler,
    memory: BoxedSampler,
    disk_root: BoxedSampler,
    disk_home: BoxedSampler,
    clock: BoxedSampler,
}

impl SamplerSet {
    pub fn new(
        battery: BoxedSampler,
        memory: BoxedSampler,
        disk_root: BoxedSampler,
        disk_home: BoxedSampler,
        clock: BoxedSampler,
    ) -> Self {
        Self {
            battery,
            memory,
            disk_root,
            disk_home,
            clock,
        }
    }

    /// Build the standard samplers for a deployment
    pub fn from_config(config: &BarConfig) -> Self {
        let palette = &config.palette;
        let set = Self::new(
            Box::new(BatterySampler::new(&config.battery_dir)),
            Box::new(
                MemorySampler::new(
                    &config.meminfo_path,
                    palette.normal,
                    palette.alert,
                    palette.foreground,
                )
                .with_alert_threshold(config.memory_alert_pct),
            ),
            Box::new(DiskSampler::new("R", &config.disk_root)),
            Box::new(DiskSampler::new("H", &config.disk_home)),
            Box::new(ClockSampler::new()),
        );
        set.log_availability();
        set
    }

    fn log_availability(&self) {
        for sampler in [
            &self.battery,
            &self.memory,
            &self.disk_root,
            &self.disk_home,
            &self.clock,
        ] {
            let metadata = sampler.metadata();
            if sampler.is_available() {
                info!("{}: {}", metadata.name, metadata.description);
            } else {
                info!("{} not available on this system ({})", metadata.name, metadata.description);
            }
        }
    }

    /// Run every sampler once.
    ///
    /// Only a clock failure is returned as an error; every other failure is
    /// left in its slot for the formatter to replace.
    pub fn sample_all(&mut self) -> Result<StatusSamples, SampleError> {
        let clock = self.clock.sample()?;
        let samples = StatusSamples {
            battery: self.battery.sample(),
            memory: self.memory.sample(),
            disk_root: self.disk_root.sample(),
            disk_home: self.disk_home.sample(),
            clock,
        };
        debug!("Sampled: {:?}", samples);
        Ok(samples)
    }
}
