//! Command-line front end
//!
//! Runs the worked spectrum example (the default) or prints the archive
//! retrieval request.

use clap::{Parser, Subcommand, ValueEnum};
use fourier_workbench::workbench::DEFAULT_BIN;
use fourier_workbench::{
    run, ArchiveRequest, PngPresenter, SynthesisConfig, TextPresenter, WorkbenchConfig,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fourier-workbench")]
#[command(about = "Normalized spectra and single-bin magnitude/phase of synthetic signals", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    analyze: AnalyzeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the worked spectrum example
    Analyze(AnalyzeArgs),

    /// Print the archive retrieval request as JSON
    Request {
        /// Output filename requested from the archive
        #[arg(long, value_name = "FILE")]
        target: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// Trend 3/(20π), cosine reference amplitude 0.5
    First,
    /// Trend 2/(20π), cosine reference amplitude 1.0
    Second,
}

#[derive(clap::Args, Debug)]
struct AnalyzeArgs {
    /// Parameter preset
    #[arg(long, value_enum, default_value_t = Preset::First)]
    preset: Preset,

    /// Number of samples on the time axis
    #[arg(long, value_name = "N")]
    samples: Option<usize>,

    /// Slope of the linear trend added to the superposition
    #[arg(long, value_name = "C", allow_hyphen_values = true)]
    trend_slope: Option<f64>,

    /// Amplitude of the cosine reference tone
    #[arg(long, value_name = "A", allow_hyphen_values = true)]
    reference_amplitude: Option<f64>,

    /// Frequency bin to read
    #[arg(long, value_name = "K", default_value_t = DEFAULT_BIN)]
    bin: usize,

    /// Write figure_<n>.png plots into this directory
    #[arg(long, value_name = "DIR")]
    plot_dir: Option<PathBuf>,
}

impl AnalyzeArgs {
    fn workbench_config(&self) -> WorkbenchConfig {
        let mut synthesis = match self.preset {
            Preset::First => SynthesisConfig::first_run(),
            Preset::Second => SynthesisConfig::second_run(),
        };
        if let Some(samples) = self.samples {
            synthesis.sample_count = samples;
        }
        if let Some(slope) = self.trend_slope {
            synthesis.trend_slope = slope;
        }
        if let Some(amplitude) = self.reference_amplitude {
            synthesis.reference_amplitude = amplitude;
        }

        WorkbenchConfig {
            synthesis,
            bin_index: self.bin,
        }
    }
}

fn analyze(args: &AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.workbench_config();
    log::info!("Running worked example with {:?}", config);

    match &args.plot_dir {
        Some(dir) => {
            run(&config, &mut PngPresenter::stdout(dir))?;
        }
        None => {
            run(&config, &mut TextPresenter::stdout())?;
        }
    }
    Ok(())
}

fn request(target: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = ArchiveRequest::interim_pressure_levels();
    if let Some(target) = target {
        request.target = target;
    }

    request.validate()?;
    println!("{}", request.to_json()?);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see FFT planning and figure output
    env_logger::init();

    let args = Args::parse();
    match args.command.unwrap_or(Command::Analyze(args.analyze)) {
        Command::Analyze(analyze_args) => analyze(&analyze_args),
        Command::Request { target } => request(target),
    }
}
