//! FFT engine using realfft for real-valued signals
//!
//! Plans once per length and reuses its buffers across calls.

use ndarray::ArrayView1;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::FftPlanner;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    #[error("Cannot transform an empty sequence")]
    EmptyInput,

    #[error("Sample {index} is not finite")]
    NonFinite { index: usize },

    #[error("Expected {expected} samples, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Bin index {index} out of range for spectrum of {len} bins")]
    BinOutOfRange { index: usize, len: usize },

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(f64),

    #[error("FFT processing failed: {0}")]
    Transform(String),
}

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer, also used as scratch by the transform
    input_buffer: Vec<f64>,

    /// Reusable output buffer (one-sided spectrum)
    output_buffer: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, at least 1)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Compute the unnormalized one-sided transform
    ///
    /// # Arguments
    /// * `signal` - Input signal, exactly `fft_size` samples
    ///
    /// # Returns
    /// X[k] for k = 0..=fft_size/2
    pub fn process(&mut self, signal: ArrayView1<'_, f64>) -> Result<&[Complex64], SpectrumError> {
        if signal.len() != self.fft_size {
            return Err(SpectrumError::LengthMismatch {
                expected: self.fft_size,
                found: signal.len(),
            });
        }

        for (dst, &src) in self.input_buffer.iter_mut().zip(signal.iter()) {
            *dst = src;
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| SpectrumError::Transform(e.to_string()))?;

        Ok(&self.output_buffer)
    }

    /// Full two-sided complex transform, unnormalized
    ///
    /// Reference for checking the one-sided path; plans a new complex FFT on
    /// every call.
    pub fn two_sided(signal: ArrayView1<'_, f64>) -> Result<Vec<Complex64>, SpectrumError> {
        if signal.is_empty() {
            return Err(SpectrumError::EmptyInput);
        }

        let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(buffer.len());
        fft.process(&mut buffer);

        Ok(buffer)
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}
