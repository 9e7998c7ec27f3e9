//! Error taxonomy shared by samplers, formatter, publishers and spawners

use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single sampler invocation.
///
/// `SourceUnavailable` and `PathUnavailable` are recovered by the formatter
/// with a sentinel fragment. `Clock` is fatal.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("{source_name} source unavailable: {reason}")]
    SourceUnavailable {
        source_name: &'static str,
        reason: String,
    },

    #[error("cannot stat {}: {reason}", path.display())]
    PathUnavailable { path: PathBuf, reason: String },

    #[error("clock unavailable: {0}")]
    Clock(String),
}

impl SampleError {
    pub fn unavailable(source_name: &'static str, reason: impl ToString) -> Self {
        SampleError::SourceUnavailable {
            source_name,
            reason: reason.to_string(),
        }
    }

    /// Whether the run loop must stop on this error
    pub fn is_fatal(&self) -> bool {
        matches!(self, SampleError::Clock(_))
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("status line is {len} bytes, capacity is {capacity}")]
    CapacityExceeded { len: usize, capacity: usize },
}

/// The display server connection failed. There is no reconnect, so this is
/// fatal for the process.
#[derive(Debug, Error)]
#[error("display connection error: {0}")]
pub struct DisplayError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl DisplayError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DisplayError(Box::new(err))
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error("failed to write status: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[error("failed to spawn '{command}': {source}")]
pub struct SpawnError {
    pub command: String,
    #[source]
    pub source: std::io::Error,
}
