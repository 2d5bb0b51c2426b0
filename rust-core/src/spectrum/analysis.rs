//! High-level spectrum analyzer
//!
//! Turns a real sample sequence into a normalized one-sided spectrum whose
//! bin magnitudes match the amplitudes of the tones in the input.

use super::bin::NormalizedSpectrum;
use super::fft::{FftEngine, SpectrumError};
use crate::signal::TimeAxis;
use ndarray::ArrayView1;
use num_complex::Complex64;

/// FFT length planned by [`AnalyzerConfig::default`]
pub const DEFAULT_FFT_SIZE: usize = 1024;

/// Spectrum analyzer configuration
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Length the FFT is planned for up front
    pub fft_size: usize,

    /// Time between samples, used to label bins with frequencies
    pub sample_spacing: f64,
}

impl AnalyzerConfig {
    /// Configuration matching a synthesized time axis
    pub fn for_axis(axis: &TimeAxis) -> Self {
        Self {
            fft_size: axis.len(),
            sample_spacing: axis.spacing(),
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: DEFAULT_FFT_SIZE,
            sample_spacing: 1.0,
        }
    }
}

/// Scale a raw one-sided transform of `sample_count` samples
///
/// Divides by N, then doubles every bin except the first and the last one.
/// For odd N the last bin is left undoubled as well.
pub fn normalize(raw: &[Complex64], sample_count: usize) -> Vec<Complex64> {
    let scale = 1.0 / sample_count as f64;
    let last = raw.len().saturating_sub(1);

    raw.iter()
        .enumerate()
        .map(|(k, &c)| {
            if k == 0 || k == last {
                c * scale
            } else {
                c * (2.0 * scale)
            }
        })
        .collect()
}

/// Frequencies k / (N * dt) of the N/2 + 1 one-sided bins
pub fn frequency_axis(sample_count: usize, sample_spacing: f64) -> Vec<f64> {
    let resolution = 1.0 / (sample_count as f64 * sample_spacing);
    (0..sample_count / 2 + 1)
        .map(|k| k as f64 * resolution)
        .collect()
}

/// Normalized spectrum analyzer
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft_engine: FftEngine,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Self {
        let fft_engine = FftEngine::new(config.fft_size.max(1));

        Self { config, fft_engine }
    }

    /// Compute the normalized one-sided spectrum of `y`
    ///
    /// # Arguments
    /// * `y` - Real samples, any length of at least 1
    ///
    /// # Returns
    /// N/2 + 1 bins, or an error for empty or non-finite input
    pub fn compute_normalized_spectrum(
        &mut self,
        y: ArrayView1<'_, f64>,
    ) -> Result<NormalizedSpectrum, SpectrumError> {
        if y.is_empty() {
            return Err(SpectrumError::EmptyInput);
        }
        if let Some(index) = y.iter().position(|v| !v.is_finite()) {
            return Err(SpectrumError::NonFinite { index });
        }

        let sample_count = y.len();
        if sample_count != self.fft_engine.fft_size() {
            log::debug!(
                "Re-planning FFT: {} -> {} samples",
                self.fft_engine.fft_size(),
                sample_count
            );
            self.fft_engine = FftEngine::new(sample_count);
            self.config.fft_size = sample_count;
        }

        let raw = self.fft_engine.process(y)?;
        let bins = normalize(raw, sample_count);

        Ok(NormalizedSpectrum::new(
            bins,
            sample_count,
            self.config.sample_spacing,
        ))
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.fft_engine.num_bins()
    }
}
