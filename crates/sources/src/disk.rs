//! Disk usage sampler implementation

use dwmbar_core::{Sample, SampleError, Sampler, SamplerMetadata};
use nix::sys::statvfs::statvfs;
use std::path::{Path, PathBuf};

/// Block counts for one filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub blocks: u64,
    pub blocks_free: u64,
    pub fragment_size: u64,
}

impl DiskUsage {
    /// Query the filesystem containing `path`
    pub fn stat(path: &Path) -> Result<Self, SampleError> {
        let stats = statvfs(path).map_err(|e| SampleError::PathUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            blocks: stats.blocks() as u64,
            blocks_free: stats.blocks_free() as u64,
            fragment_size: stats.fragment_size() as u64,
        })
    }

    pub fn total_bytes(&self) -> u64 {
        self.blocks.saturating_mul(self.fragment_size)
    }

    /// Used space as a whole percentage, rounded to nearest.
    ///
    /// `None` for filesystems reporting no blocks (proc, sysfs, ...).
    pub fn used_pct(&self) -> Option<u64> {
        if self.blocks == 0 || self.fragment_size == 0 {
            return None;
        }
        // Block size cancels out of the ratio
        let used = self.blocks - self.blocks_free.min(self.blocks);
        Some((used as f64 / self.blocks as f64 * 100.0).round() as u64)
    }
}

/// Disk usage sampler for one mount path, rendering `<pct>%`
pub struct DiskSampler {
    metadata: SamplerMetadata,
    label: &'static str,
    path: PathBuf,
}

impl DiskSampler {
    pub fn new(label: &'static str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let metadata = SamplerMetadata {
            id: "disk",
            name: "Disk Usage",
            description: format!("Disk space used on the filesystem holding {}", path.display()),
        };

        Self {
            metadata,
            label,
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sampler for DiskSampler {
    fn metadata(&self) -> &SamplerMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Sample, SampleError> {
        let usage = DiskUsage::stat(&self.path)?;
        let pct = usage.used_pct().ok_or_else(|| SampleError::PathUnavailable {
            path: self.path.clone(),
            reason: "filesystem reports zero blocks".to_string(),
        })?;

        Ok(Sample::new(self.label, Some(pct as f64), format!("{}%", pct)))
    }

    fn is_available(&self) -> bool {
        self.path.exists()
    }
}
