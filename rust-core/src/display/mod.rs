//! Presentation of series, spectra and bin readings
//!
//! The pipeline only talks to a [`Presenter`] handle passed in by the caller.

pub mod png;
pub mod text;

pub use png::PngPresenter;
pub use text::TextPresenter;

use crate::spectrum::{BinReading, NormalizedSpectrum};
use ndarray::ArrayView1;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresentError {
    #[error("Time axis has {t} samples but series has {y}")]
    LengthMismatch { t: usize, y: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to draw figure: {0}")]
    Plot(String),
}

/// Display collaborator for the worked example
pub trait Presenter {
    /// Add a series and its spectrum to figure `figure`
    fn plot_spectrum(
        &mut self,
        figure: usize,
        t: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        spectrum: &NormalizedSpectrum,
    ) -> Result<(), PresentError>;

    /// Report one bin reading
    fn report(&mut self, reading: &BinReading) -> Result<(), PresentError>;

    /// Flush anything buffered
    fn finish(&mut self) -> Result<(), PresentError> {
        Ok(())
    }
}

pub(crate) fn check_lengths(
    t: ArrayView1<'_, f64>,
    y: ArrayView1<'_, f64>,
) -> Result<(), PresentError> {
    if t.len() != y.len() {
        return Err(PresentError::LengthMismatch {
            t: t.len(),
            y: y.len(),
        });
    }
    Ok(())
}
