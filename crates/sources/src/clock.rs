//! Clock sampler implementation

use chrono::{DateTime, Local, TimeZone};
use dwmbar_core::{Sample, SampleError, Sampler, SamplerMetadata, CLOCK_FORMAT};
use std::fmt::{self, Write};

/// Local wall-clock time, e.g. "Fri Oct 16 14:03:59"
pub struct ClockSampler {
    metadata: SamplerMetadata,
    format: String,
}

impl ClockSampler {
    pub fn new() -> Self {
        Self::with_format(CLOCK_FORMAT)
    }

    pub fn with_format(format: impl Into<String>) -> Self {
        let format = format.into();
        let metadata = SamplerMetadata {
            id: "clock",
            name: "Clock",
            description: format!("Local time formatted as '{}'", format),
        };

        Self { metadata, format }
    }

    /// Format `time` with the configured pattern.
    ///
    /// An invalid pattern surfaces here as `SampleError::Clock` rather than
    /// a panic.
    pub fn render<Tz: TimeZone>(&self, time: &DateTime<Tz>) -> Result<String, SampleError>
    where
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(32);
        write!(out, "{}", time.format(&self.format)).map_err(|_| {
            SampleError::Clock(format!("cannot format time with '{}'", self.format))
        })?;
        Ok(out)
    }
}

impl Default for ClockSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler for ClockSampler {
    fn metadata(&self) -> &SamplerMetadata {
        &self.metadata
    }

    fn sample(&mut self) -> Result<Sample, SampleError> {
        let text = self.render(&Local::now())?;
        Ok(Sample::new("CLK", None, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_render_pattern() {
        let clock = ClockSampler::new();
        let time = Utc.with_ymd_and_hms(2026, 10, 16, 14, 3, 59).unwrap();
        assert_eq!(clock.render(&time).unwrap(), "Fri Oct 16 14:03:59");

        let time = Utc.with_ymd_and_hms(2026, 1, 5, 7, 0, 0).unwrap();
        assert_eq!(clock.render(&time).unwrap(), "Mon Jan 05 07:00:00");
    }

    #[test]
    fn test_same_second_renders_identically() {
        let clock = ClockSampler::new();
        let second = Utc.with_ymd_and_hms(2026, 10, 16, 23, 59, 59).unwrap();
        let early = second + Duration::milliseconds(100);
        let late = second + Duration::milliseconds(900);
        assert_eq!(clock.render(&early).unwrap(), clock.render(&late).unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_clock_error() {
        let clock = ClockSampler::with_format("%Q");
        let err = clock.render(&Utc::now()).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_sample_local_time() {
        let mut clock = ClockSampler::new();
        let sample = clock.sample().unwrap();
        // "Www Mmm DD HH:MM:SS"
        assert_eq!(sample.text.len(), 19);
        assert_eq!(sample.text.matches(':').count(), 2);
    }
}
