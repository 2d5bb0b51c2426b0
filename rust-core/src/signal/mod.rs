//! Synthetic signal generation
//!
//! Uniform time axis, closed-form test signals and linear detrending.

pub mod axis;
pub mod detrend;
pub mod synth;

pub use axis::TimeAxis;
pub use detrend::{detrend, DetrendKind};
pub use synth::{synthesize, SignalSet, SynthesisConfig, SynthesisError};
