//! The status bar run loop
//!
//! Each loop iteration drains pointer input, runs a sample/format/publish
//! cycle when the cadence says one is due, then naps. Everything happens on
//! one task, so the display connection is never shared.

use anyhow::{Context, Result};
use dwmbar_core::{
    FormatError, InputWatcher, PressSource, Publisher, Scheduler, Spawner, StatusFormatter,
};
use dwmbar_sources::SamplerSet;
use dwmbar_types::BarConfig;
use log::{error, info, trace};
use std::future::Future;
use std::time::{Duration, Instant};

/// Everything the bar needs for its lifetime. Dropping it releases the
/// display connection.
pub struct StatusBar<D, S> {
    samplers: SamplerSet,
    formatter: StatusFormatter,
    scheduler: Scheduler,
    display: D,
    watcher: Option<InputWatcher<S>>,
    nap: Duration,
    published: u64,
}

impl<D, S> StatusBar<D, S>
where
    D: Publisher + PressSource,
    S: Spawner,
{
    pub fn new(config: &BarConfig, samplers: SamplerSet, display: D) -> Self {
        Self {
            samplers,
            formatter: StatusFormatter::new(config.palette, config.overflow),
            scheduler: Scheduler::new(config.cadence, now()),
            display,
            watcher: None,
            nap: config.nap,
            published: 0,
        }
    }

    /// Enable click-to-launch
    pub fn with_watcher(mut self, watcher: InputWatcher<S>) -> Self {
        self.watcher = Some(watcher);
        self
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn watcher(&self) -> Option<&InputWatcher<S>> {
        self.watcher.as_ref()
    }

    /// Number of status lines published so far
    pub fn published(&self) -> u64 {
        self.published
    }

    pub fn truncations(&self) -> u64 {
        self.formatter.truncation_count()
    }

    /// Sample, format and publish once.
    ///
    /// A rejected (oversized) line skips publishing for this cycle; clock and
    /// display failures are returned as fatal.
    pub fn cycle(&mut self) -> Result<()> {
        let started = Instant::now();

        let samples = self.samplers.sample_all().context("Clock sampler failed")?;
        let status = match self.formatter.format(&samples) {
            Ok(status) => status,
            Err(e @ FormatError::CapacityExceeded { .. }) => {
                error!("Skipping publish: {}", e);
                return Ok(());
            }
        };

        self.display
            .publish(&status)
            .context("Failed to publish status")?;
        self.published += 1;

        trace!("Cycle took {:?}: {}", started.elapsed(), status);
        Ok(())
    }

    /// One loop iteration at `now`. Returns whether a cycle ran.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        if let Some(watcher) = self.watcher.as_mut() {
            watcher
                .poll(&mut self.display)
                .context("Failed to read pointer input")?;
        }

        if !self.scheduler.poll(now) {
            return Ok(false);
        }
        self.cycle()?;
        Ok(true)
    }

    /// Loop until `shutdown` resolves or a fatal error occurs
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        info!(
            "Publishing every {:?}, polling input every {:?}",
            self.scheduler.cadence(),
            self.nap
        );

        loop {
            self.tick(now())?;

            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping after {} updates", self.published);
                    return Ok(());
                }
                _ = tokio::time::sleep(self.nap) => {}
            }
        }
    }
}

/// Current time from tokio's clock, so paused-time tests drive the loop
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}
