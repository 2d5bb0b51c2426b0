//! PNG figure output
//!
//! Each figure has two panels: the series against time on top and the
//! spectrum magnitude against bin index (log x axis) below. Traces added to
//! the same figure are overlaid, one color each.

use super::text::TextPresenter;
use super::{check_lengths, PresentError, Presenter};
use crate::spectrum::{BinReading, NormalizedSpectrum};
use ndarray::ArrayView1;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;
const MARGIN: u32 = 20;

/// Trace colors, cycled per figure
const PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

struct Trace {
    t: Vec<f64>,
    y: Vec<f64>,
    magnitudes: Vec<f64>,
}

/// Renders figures to `figure_<n>.png` on [`Presenter::finish`]
pub struct PngPresenter<W: Write> {
    output_dir: PathBuf,
    figures: BTreeMap<usize, Vec<Trace>>,
    text: TextPresenter<W>,
}

impl PngPresenter<std::io::Stdout> {
    /// Figures go to `output_dir`, readings to stdout
    pub fn stdout(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(output_dir, std::io::stdout())
    }
}

impl<W: Write> PngPresenter<W> {
    pub fn new(output_dir: impl Into<PathBuf>, writer: W) -> Self {
        Self {
            output_dir: output_dir.into(),
            figures: BTreeMap::new(),
            text: TextPresenter::new(writer),
        }
    }

    /// Path figure `figure` is written to
    pub fn figure_path(&self, figure: usize) -> PathBuf {
        self.output_dir.join(format!("figure_{}.png", figure))
    }
}

impl<W: Write> Presenter for PngPresenter<W> {
    fn plot_spectrum(
        &mut self,
        figure: usize,
        t: ArrayView1<'_, f64>,
        y: ArrayView1<'_, f64>,
        spectrum: &NormalizedSpectrum,
    ) -> Result<(), PresentError> {
        check_lengths(t, y)?;

        self.figures.entry(figure).or_default().push(Trace {
            t: t.to_vec(),
            y: y.to_vec(),
            magnitudes: spectrum.magnitudes(),
        });
        Ok(())
    }

    fn report(&mut self, reading: &BinReading) -> Result<(), PresentError> {
        self.text.report(reading)
    }

    fn finish(&mut self) -> Result<(), PresentError> {
        if !self.figures.is_empty() {
            std::fs::create_dir_all(&self.output_dir)?;
        }

        let figures = std::mem::take(&mut self.figures);
        for (figure, traces) in &figures {
            let path = self.figure_path(*figure);
            let root = BitMapBackend::new(&path, (WIDTH, HEIGHT)).into_drawing_area();
            draw_figure(&root, traces)?;
            root.present().map_err(plot_error)?;
            log::info!("Wrote figure {} ({} traces) to {}", figure, traces.len(), path.display());
        }

        self.text.finish()
    }
}

fn plot_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> PresentError {
    PresentError::Plot(err.to_string())
}

/// Draw the series panel and the spectrum panel of one figure
fn draw_figure(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    traces: &[Trace],
) -> Result<(), PresentError> {
    root.fill(&WHITE).map_err(plot_error)?;
    let panels = root.split_evenly((2, 1));

    let (t_lo, t_hi) = padded_range(traces.iter().flat_map(|tr| tr.t.iter().copied()));
    let (y_lo, y_hi) = padded_range(traces.iter().flat_map(|tr| tr.y.iter().copied()));
    let mut series_chart = ChartBuilder::on(&panels[0])
        .margin(MARGIN)
        .build_cartesian_2d(t_lo..t_hi, y_lo..y_hi)
        .map_err(plot_error)?;

    // Bin 0 has no place on a log axis
    let bins = traces
        .iter()
        .map(|tr| tr.magnitudes.len())
        .max()
        .unwrap_or(0)
        .max(3);
    let peak = traces
        .iter()
        .flat_map(|tr| tr.magnitudes.iter().skip(1).copied())
        .fold(0.0, f64::max);
    let top = if peak > 0.0 { peak * 1.05 } else { 1.0 };
    let mut spectrum_chart = ChartBuilder::on(&panels[1])
        .margin(MARGIN)
        .build_cartesian_2d((1f64..(bins - 1) as f64).log_scale(), 0f64..top)
        .map_err(plot_error)?;

    for (trace, color) in traces.iter().zip(PALETTE.iter().cycle()) {
        series_chart
            .draw_series(LineSeries::new(
                trace.t.iter().copied().zip(trace.y.iter().copied()),
                color,
            ))
            .map_err(plot_error)?;

        spectrum_chart
            .draw_series(LineSeries::new(
                trace
                    .magnitudes
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(k, &m)| (k as f64, m)),
                color,
            ))
            .map_err(plot_error)?;
    }

    for area in [
        series_chart.plotting_area().strip_coord_spec(),
        spectrum_chart.plotting_area().strip_coord_spec(),
    ] {
        let (w, h) = area.dim_in_pixel();
        area.draw(&Rectangle::new(
            [(0, 0), (w as i32 - 1, h as i32 - 1)],
            BLACK.stroke_width(1),
        ))
        .map_err(plot_error)?;
    }

    Ok(())
}

/// Min/max of `values`, widened when flat or empty
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    let pad = (hi - lo) * 0.05;
    (lo - pad, hi + pad)
}
