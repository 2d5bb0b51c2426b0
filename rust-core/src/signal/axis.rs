//! Uniformly sampled time axis

use super::synth::SynthesisError;
use ndarray::{Array1, ArrayView1};

/// Sample times uniformly spaced over `[0, span]`, both endpoints included
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    samples: Array1<f64>,
    span: f64,
}

impl TimeAxis {
    /// Create a time axis
    ///
    /// # Arguments
    /// * `sample_count` - Number of samples (at least 2)
    /// * `span` - Length of the interval, must be finite and positive
    pub fn new(sample_count: usize, span: f64) -> Result<Self, SynthesisError> {
        if sample_count < 2 {
            return Err(SynthesisError::TooFewSamples(sample_count));
        }
        if !span.is_finite() || span <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "span",
                value: span,
            });
        }

        Ok(Self {
            samples: Array1::linspace(0.0, span, sample_count),
            span,
        })
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false, an axis holds at least two samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Interval length
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Spacing between consecutive samples: span / (N - 1)
    pub fn spacing(&self) -> f64 {
        self.span / (self.samples.len() - 1) as f64
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }
}
