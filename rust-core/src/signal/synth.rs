//! Closed-form test signals
//!
//! Builds the two-tone superposition, its trended and detrended variants and
//! the single-tone references used to check magnitude/phase extraction.

use super::axis::TimeAxis;
use super::detrend::{detrend, DetrendKind};
use ndarray::{Array1, ArrayView1};
use std::f64::consts::PI;
use thiserror::Error;

/// Sample count used by both worked runs
pub const DEFAULT_SAMPLE_COUNT: usize = 100_000;

/// Time span of both worked runs: ten periods of the fundamental
pub const DEFAULT_SPAN: f64 = 20.0 * PI;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthesisError {
    #[error("At least 2 samples are required (got {0})")]
    TooFewSamples(usize),

    #[error("Invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Synthesis parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisConfig {
    /// Number of samples on the time axis
    pub sample_count: usize,

    /// Length of the sampled interval
    pub span: f64,

    /// Slope `c` of the linear trend added to the superposition
    pub trend_slope: f64,

    /// Amplitude `A` of the cosine reference tone
    pub reference_amplitude: f64,
}

impl SynthesisConfig {
    /// First run: trend 3/(20π), cosine reference amplitude 0.5
    pub fn first_run() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            span: DEFAULT_SPAN,
            trend_slope: 3.0 / DEFAULT_SPAN,
            reference_amplitude: 0.5,
        }
    }

    /// Second run: trend 2/(20π), cosine reference amplitude 1.0
    pub fn second_run() -> Self {
        Self {
            trend_slope: 2.0 / DEFAULT_SPAN,
            reference_amplitude: 1.0,
            ..Self::first_run()
        }
    }

    /// Check the parameters without building anything
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if self.sample_count < 2 {
            return Err(SynthesisError::TooFewSamples(self.sample_count));
        }
        if !self.span.is_finite() || self.span <= 0.0 {
            return Err(SynthesisError::InvalidParameter {
                name: "span",
                value: self.span,
            });
        }
        if !self.trend_slope.is_finite() {
            return Err(SynthesisError::InvalidParameter {
                name: "trend slope",
                value: self.trend_slope,
            });
        }
        if !self.reference_amplitude.is_finite() {
            return Err(SynthesisError::InvalidParameter {
                name: "reference amplitude",
                value: self.reference_amplitude,
            });
        }
        Ok(())
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self::first_run()
    }
}

/// All series of one worked run, sampled on a shared axis
#[derive(Debug, Clone)]
pub struct SignalSet {
    pub t: TimeAxis,

    /// y1 = sin(t) + sin(4t)
    pub superposition: Array1<f64>,

    /// y2 = y1 + c*t
    pub trended: Array1<f64>,

    /// y2d = detrend(y2)
    pub detrended: Array1<f64>,

    /// y3 = sin(t)
    pub reference_sine: Array1<f64>,

    /// y4 = A*cos(t)
    pub reference_cosine: Array1<f64>,
}

/// sin(t) + sin(4t)
pub fn superposition(t: ArrayView1<'_, f64>) -> Array1<f64> {
    t.mapv(|t| t.sin() + (4.0 * t).sin())
}

/// y + c*t
pub fn with_trend(y: ArrayView1<'_, f64>, t: ArrayView1<'_, f64>, slope: f64) -> Array1<f64> {
    &y + &t.mapv(|t| slope * t)
}

/// sin(t)
pub fn reference_sine(t: ArrayView1<'_, f64>) -> Array1<f64> {
    t.mapv(f64::sin)
}

/// A*cos(t)
pub fn reference_cosine(t: ArrayView1<'_, f64>, amplitude: f64) -> Array1<f64> {
    t.mapv(|t| amplitude * t.cos())
}

/// Build every series of a worked run
pub fn synthesize(config: &SynthesisConfig) -> Result<SignalSet, SynthesisError> {
    config.validate()?;

    let t = TimeAxis::new(config.sample_count, config.span)?;
    let superposition = superposition(t.view());
    let trended = with_trend(superposition.view(), t.view(), config.trend_slope);
    let detrended = detrend(trended.view(), DetrendKind::Linear);
    let reference_sine = reference_sine(t.view());
    let reference_cosine = reference_cosine(t.view(), config.reference_amplitude);

    log::debug!(
        "Synthesized {} samples over [0, {:.4}] (trend slope {:.6}, reference amplitude {})",
        t.len(),
        t.span(),
        config.trend_slope,
        config.reference_amplitude
    );

    Ok(SignalSet {
        t,
        superposition,
        trended,
        detrended,
        reference_sine,
        reference_cosine,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SynthesisConfig {
        SynthesisConfig {
            sample_count: 20_000,
            ..SynthesisConfig::first_run()
        }
    }

    #[test]
    fn test_presets_differ_only_in_trend_and_amplitude() {
        let first = SynthesisConfig::first_run();
        let second = SynthesisConfig::second_run();

        assert_eq!(first, SynthesisConfig::default());
        assert_eq!(first.sample_count, second.sample_count);
        assert_eq!(first.span, second.span);
        assert!((first.trend_slope - 3.0 / (20.0 * PI)).abs() < 1e-15);
        assert!((second.trend_slope - 2.0 / (20.0 * PI)).abs() < 1e-15);
        assert_eq!(first.reference_amplitude, 0.5);
        assert_eq!(second.reference_amplitude, 1.0);
    }

    #[test]
    fn test_series_lengths_match_axis() {
        let signals = synthesize(&small_config()).unwrap();
        let n = signals.t.len();

        assert_eq!(n, 20_000);
        assert_eq!(signals.superposition.len(), n);
        assert_eq!(signals.trended.len(), n);
        assert_eq!(signals.detrended.len(), n);
        assert_eq!(signals.reference_sine.len(), n);
        assert_eq!(signals.reference_cosine.len(), n);
    }

    #[test]
    fn test_trend_is_exactly_linear_in_time() {
        let config = small_config();
        let signals = synthesize(&config).unwrap();

        for ((y2, y1), t) in signals
            .trended
            .iter()
            .zip(signals.superposition.iter())
            .zip(signals.t.view().iter())
        {
            assert!((y2 - y1 - config.trend_slope * t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_detrended_close_to_superposition() {
        let signals = synthesize(&small_config()).unwrap();
        let detrended_y1 = detrend(signals.superposition.view(), DetrendKind::Linear);

        // Detrending is linear, so the added trend vanishes exactly
        for (a, b) in signals.detrended.iter().zip(detrended_y1.iter()) {
            assert!((a - b).abs() < 1e-9);
        }

        // y1 itself carries a small least-squares slope over the span
        for (a, b) in signals.detrended.iter().zip(signals.superposition.iter()) {
            assert!((a - b).abs() < 0.15);
        }
    }

    #[test]
    fn test_reference_tones() {
        let config = SynthesisConfig {
            sample_count: 1000,
            ..SynthesisConfig::second_run()
        };
        let signals = synthesize(&config).unwrap();
        let t = signals.t.view();

        assert!((signals.reference_cosine[0] - 1.0).abs() < 1e-15);
        assert!((signals.reference_sine[250] - t[250].sin()).abs() < 1e-15);

        let half = SynthesisConfig {
            sample_count: 1000,
            ..SynthesisConfig::first_run()
        };
        let signals = synthesize(&half).unwrap();
        assert!((signals.reference_cosine[0] - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SynthesisConfig::first_run();
        config.sample_count = 1;
        assert_eq!(synthesize(&config).unwrap_err(), SynthesisError::TooFewSamples(1));

        let mut config = SynthesisConfig::first_run();
        config.trend_slope = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(SynthesisError::InvalidParameter { name: "trend slope", .. })
        ));
    }
}
