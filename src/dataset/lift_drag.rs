use serde::{Deserialize, Serialize};

/// Angles of attack (degrees) sampled by every per-angle dataset of the study.
pub const STUDY_ANGLES: [f64; 7] = [0.0, 1.5, 3.0, 4.5, 6.0, 7.5, 9.0];

/// Lift-to-drag ratio of one airfoil against angle of attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioSeries {
    /// Legend entry.
    pub name: String,
    /// Short form used in the findings text.
    pub label: String,
    /// L/D value per entry of the shared angle series.
    pub ratios: Vec<f64>,
}

/// Bionic and NACA 0006 lift-to-drag ratios sampled at the same angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftDragComparison {
    /// Angles of attack in degrees.
    pub angles: Vec<f64>,
    pub bionic: RatioSeries,
    pub naca: RatioSeries,
}

/// An (angle, ratio) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioPeak {
    pub angle: f64,
    pub ratio: f64,
}

impl LiftDragComparison {
    pub fn owl_wing_study() -> Self {
        Self {
            angles: STUDY_ANGLES.to_vec(),
            bionic: RatioSeries {
                name: "Bionic Airfoil".into(),
                label: "Bionic".into(),
                ratios: vec![8.0, 10.0, 14.0, 15.3, 15.5, 14.8, 13.5],
            },
            naca: RatioSeries {
                name: "NACA 0006".into(),
                label: "NACA0006".into(),
                ratios: vec![0.0, 4.2, 7.5, 9.3, 10.2, 8.5, 7.8],
            },
        }
    }

    /// Highest ratio of `series` and the angle it occurs at. First sample wins ties.
    pub fn peak(&self, series: &RatioSeries) -> Option<RatioPeak> {
        self.angles
            .iter()
            .zip(&series.ratios)
            .fold(None, |best: Option<RatioPeak>, (&angle, &ratio)| match best {
                Some(peak) if peak.ratio >= ratio => Some(peak),
                _ => Some(RatioPeak { angle, ratio }),
            })
    }

    /// Relative gain of the bionic peak over the NACA peak, in percent.
    pub fn improvement_percent(&self) -> Option<f64> {
        let bionic = self.peak(&self.bionic)?;
        let naca = self.peak(&self.naca)?;
        if naca.ratio == 0.0 {
            return None;
        }
        Some((bionic.ratio - naca.ratio) / naca.ratio * 100.0)
    }

    /// True when the bionic ratio beats the reference at every sampled angle.
    pub fn bionic_dominates(&self) -> bool {
        self.bionic
            .ratios
            .iter()
            .zip(&self.naca.ratios)
            .all(|(b, n)| b > n)
    }
}

impl Default for LiftDragComparison {
    fn default() -> Self {
        Self::owl_wing_study()
    }
}
