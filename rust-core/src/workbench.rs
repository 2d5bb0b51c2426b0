//! Worked example pipeline
//!
//! Synthesizes the series of one run, plots each with its normalized
//! spectrum and reports the magnitude/phase of one bin for both reference
//! tones.

use crate::display::{PresentError, Presenter};
use crate::signal::{synthesize, SynthesisConfig, SynthesisError};
use crate::spectrum::{AnalyzerConfig, BinReading, SpectrumAnalyzer, SpectrumError};
use thiserror::Error;

/// Bin the readings are taken from: one cycle per unit time on the 20π axis
pub const DEFAULT_BIN: usize = 10;

/// Figure holding the superposition and its trended/detrended variants
pub const SUPERPOSITION_FIGURE: usize = 1;

/// Figure holding the two reference tones
pub const REFERENCE_FIGURE: usize = 2;

#[derive(Error, Debug)]
pub enum WorkbenchError {
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Spectrum(#[from] SpectrumError),

    #[error(transparent)]
    Present(#[from] PresentError),
}

/// Worked example configuration
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchConfig {
    pub synthesis: SynthesisConfig,

    /// Bin read from the reference tone spectra
    pub bin_index: usize,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            synthesis: SynthesisConfig::default(),
            bin_index: DEFAULT_BIN,
        }
    }
}

/// Readings produced by one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedExample {
    /// Bin reading of y3 = sin(t)
    pub sine: BinReading,

    /// Bin reading of y4 = A*cos(t)
    pub cosine: BinReading,
}

/// Run the worked example end to end
///
/// # Arguments
/// * `config` - Synthesis parameters and the bin to read
/// * `presenter` - Receives every plotted series and both readings
pub fn run(
    config: &WorkbenchConfig,
    presenter: &mut dyn Presenter,
) -> Result<WorkedExample, WorkbenchError> {
    let signals = synthesize(&config.synthesis)?;
    let mut analyzer = SpectrumAnalyzer::new(AnalyzerConfig::for_axis(&signals.t));
    let t = signals.t.view();

    log::info!(
        "Analyzing {} samples, spacing {:.3e}",
        signals.t.len(),
        signals.t.spacing()
    );

    for y in [&signals.superposition, &signals.trended, &signals.detrended] {
        let spectrum = analyzer.compute_normalized_spectrum(y.view())?;
        presenter.plot_spectrum(SUPERPOSITION_FIGURE, t, y.view(), &spectrum)?;
    }

    let sine_spectrum = analyzer.compute_normalized_spectrum(signals.reference_sine.view())?;
    presenter.plot_spectrum(REFERENCE_FIGURE, t, signals.reference_sine.view(), &sine_spectrum)?;

    let cosine_spectrum = analyzer.compute_normalized_spectrum(signals.reference_cosine.view())?;
    presenter.plot_spectrum(
        REFERENCE_FIGURE,
        t,
        signals.reference_cosine.view(),
        &cosine_spectrum,
    )?;

    let sine = sine_spectrum.extract_bin_magnitude_phase(config.bin_index)?;
    presenter.report(&sine)?;

    let cosine = cosine_spectrum.extract_bin_magnitude_phase(config.bin_index)?;
    presenter.report(&cosine)?;

    presenter.finish()?;

    Ok(WorkedExample { sine, cosine })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::TextPresenter;
    use crate::spectrum::NormalizedSpectrum;
    use ndarray::ArrayView1;
    use std::f64::consts::FRAC_PI_2;

    /// Records what the pipeline hands to the display collaborator
    #[derive(Default)]
    struct Recorder {
        plots: Vec<(usize, usize, usize)>,
        reference_spectra: Vec<NormalizedSpectrum>,
        readings: Vec<BinReading>,
        finished: bool,
    }

    impl Presenter for Recorder {
        fn plot_spectrum(
            &mut self,
            figure: usize,
            t: ArrayView1<'_, f64>,
            y: ArrayView1<'_, f64>,
            spectrum: &NormalizedSpectrum,
        ) -> Result<(), PresentError> {
            assert_eq!(t.len(), y.len());
            self.plots.push((figure, y.len(), spectrum.len()));
            if figure == REFERENCE_FIGURE {
                self.reference_spectra.push(spectrum.clone());
            }
            Ok(())
        }

        fn report(&mut self, reading: &BinReading) -> Result<(), PresentError> {
            self.readings.push(*reading);
            Ok(())
        }

        fn finish(&mut self) -> Result<(), PresentError> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_first_run_readings() {
        let mut recorder = Recorder::default();
        let result = run(&WorkbenchConfig::default(), &mut recorder).unwrap();

        assert!((result.sine.magnitude - 1.0).abs() < 1e-3);
        assert!((result.sine.phase + FRAC_PI_2).abs() < 1e-3);
        assert!((result.cosine.magnitude - 0.5).abs() < 1e-3);
        assert!(result.cosine.phase.abs() < 1e-3);

        assert_eq!(recorder.readings, vec![result.sine, result.cosine]);
        assert!(recorder.finished);
    }

    #[test]
    fn test_plots_go_to_two_figures() {
        let mut recorder = Recorder::default();
        let config = WorkbenchConfig {
            synthesis: SynthesisConfig {
                sample_count: 4000,
                ..SynthesisConfig::second_run()
            },
            bin_index: DEFAULT_BIN,
        };
        run(&config, &mut recorder).unwrap();

        let figures: Vec<usize> = recorder.plots.iter().map(|p| p.0).collect();
        assert_eq!(figures, vec![1, 1, 1, 2, 2]);
        assert!(recorder.plots.iter().all(|p| p.1 == 4000 && p.2 == 2001));
    }

    #[test]
    fn test_readings_come_from_plotted_spectra() {
        let mut recorder = Recorder::default();
        let config = WorkbenchConfig {
            synthesis: SynthesisConfig {
                sample_count: 2000,
                ..SynthesisConfig::first_run()
            },
            bin_index: DEFAULT_BIN,
        };
        let result = run(&config, &mut recorder).unwrap();

        assert_eq!(recorder.plots.len(), 5);
        assert_eq!(recorder.reference_spectra.len(), 2);
        assert_eq!(
            recorder.reference_spectra[0]
                .extract_bin_magnitude_phase(DEFAULT_BIN)
                .unwrap(),
            result.sine
        );
        assert_eq!(
            recorder.reference_spectra[1]
                .extract_bin_magnitude_phase(DEFAULT_BIN)
                .unwrap(),
            result.cosine
        );
    }

    #[test]
    fn test_second_run_unit_cosine() {
        let config = WorkbenchConfig {
            synthesis: SynthesisConfig::second_run(),
            bin_index: DEFAULT_BIN,
        };
        let result = run(&config, &mut TextPresenter::new(Vec::new())).unwrap();

        assert!((result.cosine.magnitude - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_range_bin_propagates() {
        let config = WorkbenchConfig {
            synthesis: SynthesisConfig {
                sample_count: 100,
                ..SynthesisConfig::first_run()
            },
            bin_index: 51,
        };
        let err = run(&config, &mut Recorder::default()).unwrap_err();

        assert!(matches!(
            err,
            WorkbenchError::Spectrum(SpectrumError::BinOutOfRange { index: 51, len: 51 })
        ));
    }

    #[test]
    fn test_synthesis_error_propagates() {
        let config = WorkbenchConfig {
            synthesis: SynthesisConfig {
                sample_count: 0,
                ..SynthesisConfig::first_run()
            },
            bin_index: DEFAULT_BIN,
        };

        assert!(matches!(
            run(&config, &mut Recorder::default()),
            Err(WorkbenchError::Synthesis(SynthesisError::TooFewSamples(0)))
        ));
    }
}
