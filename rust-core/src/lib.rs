//! Fourier Workbench - normalized spectrum of synthetic signals
//!
//! Builds a two-tone test signal with trended and detrended variants,
//! computes normalized one-sided spectra and reads magnitude/phase of a
//! single frequency bin.

pub mod archive;
pub mod display;
pub mod signal;
pub mod spectrum;
pub mod workbench;

pub use archive::ArchiveRequest;
pub use display::{Presenter, PngPresenter, TextPresenter};
pub use signal::{SignalSet, SynthesisConfig};
pub use spectrum::{BinReading, NormalizedSpectrum, SpectrumAnalyzer};
pub use workbench::{run, WorkbenchConfig, WorkedExample};
