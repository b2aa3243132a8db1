use serde::{Deserialize, Serialize};

/// Sound pressure level against azimuth around the airfoil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectivityPattern {
    /// Receiver azimuths in degrees.
    pub azimuths: Vec<f64>,
    /// SPL at each azimuth (dB).
    pub spl: Vec<f64>,
}

impl DirectivityPattern {
    pub fn owl_wing_study() -> Self {
        Self {
            azimuths: (0..12).map(|i| i as f64 * 30.0).collect(),
            spl: vec![
                22.0, 24.0, 26.0, 28.0, 25.0, 20.0, 5.0, 8.0, 12.0, 28.0, 25.0, 18.0,
            ],
        }
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.azimuths.iter().copied().zip(self.spl.iter().copied())
    }
}

impl Default for DirectivityPattern {
    fn default() -> Self {
        Self::owl_wing_study()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_turn_in_thirty_degree_steps() {
        let pattern = DirectivityPattern::owl_wing_study();
        assert_eq!(pattern.azimuths.len(), 12);
        assert_eq!(pattern.spl.len(), 12);
        for (i, azimuth) in pattern.azimuths.iter().enumerate() {
            assert_eq!(*azimuth, i as f64 * 30.0);
        }
        assert_eq!(pattern.azimuths.last(), Some(&330.0));
    }
}
