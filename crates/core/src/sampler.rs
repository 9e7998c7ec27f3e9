//! Sampler trait and related types

use crate::error::SampleError;
use dwmbar_types::Sample;

/// Metadata about a sampler
#[derive(Debug, Clone)]
pub struct SamplerMetadata {
    /// Unique identifier for this sampler type
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Description of what this sampler reads
    pub description: String,
}

/// Trait for all metric samplers
///
/// A sampler reads one OS-exposed resource and renders it as a status line
/// fragment. Apart from that read it has no side effects, and it keeps no
/// state between calls that would change its output.
pub trait Sampler: Send {
    /// Get metadata about this sampler
    fn metadata(&self) -> &SamplerMetadata;

    /// Take a fresh reading
    fn sample(&mut self) -> Result<Sample, SampleError>;

    /// Check if the underlying source exists on this system
    fn is_available(&self) -> bool {
        true
    }
}

/// Type-erased sampler for dynamic dispatch
pub type BoxedSampler = Box<dyn Sampler>;
