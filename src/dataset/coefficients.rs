use serde::{Deserialize, Serialize};

use super::STUDY_ANGLES;

/// Lift and drag coefficients of one airfoil from the CFD runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoefficientSeries {
    pub name: String,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
}

impl CoefficientSeries {
    /// CL / CD per sample. A zero drag sample yields zero.
    pub fn lift_to_drag(&self) -> Vec<f64> {
        self.cl
            .iter()
            .zip(&self.cd)
            .map(|(&cl, &cd)| if cd == 0.0 { 0.0 } else { cl / cd })
            .collect()
    }
}

/// Aerodynamic coefficients for both airfoils at the study angles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub angles: Vec<f64>,
    pub bionic: CoefficientSeries,
    pub naca: CoefficientSeries,
}

impl AeroCoefficients {
    pub fn owl_wing_study() -> Self {
        Self {
            angles: STUDY_ANGLES.to_vec(),
            bionic: CoefficientSeries {
                name: "Bionic Airfoil".into(),
                cl: vec![0.32, 0.4, 0.62, 0.78, 0.92, 1.02, 1.12],
                cd: vec![0.041, 0.037, 0.05, 0.052, 0.06, 0.07, 0.083],
            },
            naca: CoefficientSeries {
                name: "NACA 0006".into(),
                cl: vec![0.0, 0.25, 0.45, 0.65, 0.82, 0.85, 0.78],
                cd: vec![0.04, 0.05, 0.06, 0.07, 0.08, 0.10, 0.10],
            },
        }
    }

    fn index_of(&self, angle: f64) -> Option<usize> {
        self.angles.iter().position(|&a| a == angle)
    }

    /// Coefficients (cl, cd) of `series` at an exact study angle.
    pub fn at(&self, series: &CoefficientSeries, angle: f64) -> Option<(f64, f64)> {
        let i = self.index_of(angle)?;
        Some((*series.cl.get(i)?, *series.cd.get(i)?))
    }

    /// CL / CD of `series` at an exact study angle.
    pub fn ratio_at(&self, series: &CoefficientSeries, angle: f64) -> Option<f64> {
        let i = self.index_of(angle)?;
        series.lift_to_drag().get(i).copied()
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::owl_wing_study()
    }
}
