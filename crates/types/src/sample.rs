//! One sampler reading, ready to be placed into the status line

use crate::color::Color;

/// Result of a single sampler invocation.
///
/// Created fresh every cycle and dropped once the status line is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Short label identifying the metric (e.g. "MEM")
    pub label: &'static str,
    /// Raw numeric value, if the metric has one (percentages for most samplers)
    pub raw_value: Option<f64>,
    /// Fragment as it appears in the status line, markup included
    pub text: String,
    /// Color chosen for this reading, if the sampler colors its output
    pub color: Option<Color>,
}

impl Sample {
    /// Create a sample without a color tag
    pub fn new(label: &'static str, raw_value: Option<f64>, text: impl Into<String>) -> Self {
        Self {
            label,
            raw_value,
            text: text.into(),
            color: None,
        }
    }

    /// Attach a color tag
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
