//! Line-oriented text output

use super::{check_lengths, PresentError, Presenter};
use crate::spectrum::{BinReading, NormalizedSpectrum};
use ndarray::ArrayView1;
use std::io::Write;

/// Writes one line per bin reading; plots are only logged
pub struct TextPresenter<W: Write> {
    writer: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn plot_spectrum(
        &mut self,
        figure: usize,
        t: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        spectrum: &NormalizedSpectrum,
    ) -> Result<(), PresentError> {
        check_lengths(t, y)?;
        log::debug!(
            "Figure {}: {} samples, {} bins (plot output disabled)",
            figure,
            y.len(),
            spectrum.len()
        );
        Ok(())
    }

    fn report(&mut self, reading: &BinReading) -> Result<(), PresentError> {
        writeln!(self.writer, "{}", reading)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), PresentError> {
        self.writer.flush()?;
        Ok(())
    }
}
