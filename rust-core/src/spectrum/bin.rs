//! Normalized one-sided spectrum and single-bin readings

use super::analysis::frequency_axis;
use super::fft::SpectrumError;
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// Value, magnitude and phase of one frequency bin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinReading {
    /// Complex coefficient of the bin
    pub value: Complex64,

    /// sqrt(Re² + Im²)
    pub magnitude: f64,

    /// atan2(Im, Re) in (-π, π], the shift relative to a cosine
    pub phase: f64,
}

impl BinReading {
    pub fn from_value(value: Complex64) -> Self {
        let mut phase = value.im.atan2(value.re);
        if phase == -PI {
            phase = PI;
        }

        Self {
            value,
            magnitude: value.norm(),
            phase,
        }
    }
}

impl fmt::Display for BinReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Value = {}, Magnitude = {}, Phase = {}",
            self.value, self.magnitude, self.phase
        )
    }
}

/// Read magnitude and phase of one bin
///
/// # Arguments
/// * `spectrum` - Normalized one-sided spectrum
/// * `bin_index` - Bin to read
///
/// # Returns
/// The bin reading, or `BinOutOfRange` if `bin_index >= spectrum.len()`
pub fn extract_bin_magnitude_phase(
    spectrum: &[Complex64],
    bin_index: usize,
) -> Result<BinReading, SpectrumError> {
    spectrum
        .get(bin_index)
        .map(|&value| BinReading::from_value(value))
        .ok_or(SpectrumError::BinOutOfRange {
            index: bin_index,
            len: spectrum.len(),
        })
}

/// One-sided spectrum scaled to the amplitude of the input tones
///
/// Bins are divided by N; every bin except the first and the last is doubled.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpectrum {
    bins: Vec<Complex64>,
    sample_count: usize,
    sample_spacing: f64,
}

impl NormalizedSpectrum {
    pub(crate) fn new(bins: Vec<Complex64>, sample_count: usize, sample_spacing: f64) -> Self {
        Self {
            bins,
            sample_count,
            sample_spacing,
        }
    }

    /// Number of bins: N/2 + 1
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    /// |X[k]| for every bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Frequency of bin k: k / (N * dt)
    pub fn bin_frequency(&self, bin: usize) -> f64 {
        bin as f64 / (self.sample_count as f64 * self.sample_spacing)
    }

    /// Angular frequency of bin k: 2πk / (N * dt)
    pub fn bin_angular_frequency(&self, bin: usize) -> f64 {
        2.0 * PI * self.bin_frequency(bin)
    }

    /// Frequencies of all bins
    pub fn frequencies(&self) -> Vec<f64> {
        frequency_axis(self.sample_count, self.sample_spacing)
    }

    /// Index of the bin closest to `frequency`
    pub fn nearest_bin(&self, frequency: f64) -> Result<usize, SpectrumError> {
        if !frequency.is_finite() || frequency < 0.0 {
            return Err(SpectrumError::InvalidFrequency(frequency));
        }

        let position = (frequency * self.sample_count as f64 * self.sample_spacing).round();
        if position >= self.len() as f64 {
            return Err(SpectrumError::BinOutOfRange {
                index: position as usize,
                len: self.len(),
            });
        }

        Ok(position as usize)
    }

    /// Magnitude and phase of one bin
    pub fn extract_bin_magnitude_phase(&self, bin_index: usize) -> Result<BinReading, SpectrumError> {
        extract_bin_magnitude_phase(&self.bins, bin_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_reading_magnitude_and_phase() {
        let reading = BinReading::from_value(Complex64::new(3.0, -4.0));

        assert_eq!(reading.magnitude, 5.0);
        assert!((reading.phase - (-4.0f64).atan2(3.0)).abs() < 1e-15);

        let sine_like = BinReading::from_value(Complex64::new(0.0, -1.0));
        assert!((sine_like.phase + FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_phase_never_minus_pi() {
        let reading = BinReading::from_value(Complex64::new(-1.0, -0.0));
        assert_eq!(reading.phase, PI);
    }

    #[test]
    fn test_reading_format() {
        let reading = BinReading::from_value(Complex64::new(1.0, 0.0));
        assert_eq!(
            reading.to_string(),
            "Value = 1+0i, Magnitude = 1, Phase = 0"
        );
    }

    #[test]
    fn test_out_of_range_bin() {
        let bins = vec![Complex64::new(1.0, 0.0); 6];

        assert!(extract_bin_magnitude_phase(&bins, 5).is_ok());
        assert_eq!(
            extract_bin_magnitude_phase(&bins, 6).unwrap_err(),
            SpectrumError::BinOutOfRange { index: 6, len: 6 }
        );
    }

    #[test]
    fn test_bin_frequencies() {
        let spectrum = NormalizedSpectrum::new(vec![Complex64::new(0.0, 0.0); 51], 100, 0.5);

        assert_eq!(spectrum.bin_frequency(0), 0.0);
        assert!((spectrum.bin_frequency(10) - 0.2).abs() < 1e-15);
        assert!((spectrum.bin_angular_frequency(10) - 0.4 * PI).abs() < 1e-15);
        let frequencies = spectrum.frequencies();
        assert_eq!(frequencies.len(), 51);
        assert!((frequencies[10] - spectrum.bin_frequency(10)).abs() < 1e-15);
        assert_eq!(spectrum.nearest_bin(0.21).unwrap(), 11);
        assert!(spectrum.nearest_bin(1.5).is_err());
        assert!(spectrum.nearest_bin(-1.0).is_err());
    }
}
