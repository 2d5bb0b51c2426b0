//! Normalized spectral analysis with FFT

pub mod analysis;
pub mod bin;
pub mod fft;

pub use analysis::{frequency_axis, normalize, AnalyzerConfig, SpectrumAnalyzer, DEFAULT_FFT_SIZE};
pub use bin::{extract_bin_magnitude_phase, BinReading, NormalizedSpectrum};
pub use fft::{FftEngine, SpectrumError};
