use serde::{Deserialize, Serialize};

/// Narrow-band SPL against frequency at a single angle of attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticSpectrum {
    /// Angle of attack the spectrum was recorded at (degrees).
    pub angle: f64,
    /// Frequencies in Hz.
    pub frequencies: Vec<f64>,
    /// SPL per frequency (dB).
    pub spl: Vec<f64>,
}

impl AcousticSpectrum {
    pub fn owl_wing_study() -> Self {
        Self {
            angle: 9.0,
            frequencies: vec![100.0, 192.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0, 15000.0],
            spl: vec![15.0, 22.6, 12.0, -5.0, -20.0, -30.0, -35.0, -30.0],
        }
    }

    /// (frequency, spl) of the loudest sample.
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(self.spl.iter().copied())
            .reduce(|best, sample| if sample.1 > best.1 { sample } else { best })
    }
}

impl Default for AcousticSpectrum {
    fn default() -> Self {
        Self::owl_wing_study()
    }
}
