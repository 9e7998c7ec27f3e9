//! dwmbar-core: Core traits and status line logic for dwmbar.
//!
//! This crate contains the fundamental traits (Sampler, Publisher, Spawner,
//! PressSource), the error taxonomy, the status formatter, the cadence
//! scheduler and the click watcher. None of it talks to the OS directly.

pub mod constants;
mod error;
mod format;
mod input;
mod publisher;
mod sampler;
mod schedule;

pub use constants::{BATTERY_SENTINEL, CLOCK_FORMAT, DISK_PLACEHOLDER, MEMORY_SENTINEL};
pub use error::{DisplayError, FormatError, PublishError, SampleError, SpawnError};
pub use format::{StatusFormatter, StatusSamples};
pub use input::{InputWatcher, PressOutcome, PressSource, Spawner, WatchState};
pub use publisher::Publisher;
pub use sampler::{BoxedSampler, Sampler, SamplerMetadata};
pub use schedule::Scheduler;

// Re-export types used in trait signatures for convenience
pub use dwmbar_types::{Point, Sample, StatusString};
