use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::AIRFOIL_SAMPLES;

// Upper surface: sine lobe up to the thickest point, then exponential decay
pub const UPPER_AMPLITUDE: f64 = 0.043;
pub const UPPER_CREST_X: f64 = 0.11;
pub const UPPER_DECAY: f64 = 2.5;

// Lower surface: leading-edge lobe, concave mid-section, trailing decay
pub const LOWER_AMPLITUDE: f64 = 0.04;
pub const LOWER_LOBE_END_X: f64 = 0.15;
pub const LOWER_CONCAVE_END_X: f64 = 0.5;
pub const LOWER_CONCAVE_SPAN: f64 = 0.7;
pub const LOWER_DECAY: f64 = 3.0;

/// Upper surface offset (fraction of chord) at chord position `x`.
pub fn upper_offset(x: f64) -> f64 {
    if x < UPPER_CREST_X {
        UPPER_AMPLITUDE * (PI * x / (2.0 * UPPER_CREST_X)).sin()
    } else {
        UPPER_AMPLITUDE * (-UPPER_DECAY * (x - UPPER_CREST_X)).exp()
    }
}

fn lower_concave(x: f64) -> f64 {
    -LOWER_AMPLITUDE * (PI / 2.0 + PI * (x - LOWER_LOBE_END_X) / LOWER_CONCAVE_SPAN).sin()
}

/// Lower surface offset (fraction of chord, negative below the chord) at chord position `x`.
///
/// The trailing decay starts from the concave section's end value so the
/// surface has no step at `LOWER_CONCAVE_END_X`. That end value is zero, so
/// aft of mid-chord the lower surface lies on the chord line.
pub fn lower_offset(x: f64) -> f64 {
    if x < LOWER_LOBE_END_X {
        -LOWER_AMPLITUDE * (PI * x / (2.0 * LOWER_LOBE_END_X)).sin()
    } else if x < LOWER_CONCAVE_END_X {
        lower_concave(x)
    } else {
        lower_concave(LOWER_CONCAVE_END_X) * (-LOWER_DECAY * (x - LOWER_CONCAVE_END_X)).exp()
    }
}

/// Sampled airfoil cross-section, offsets as fractions of chord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirfoilProfile {
    /// Chordwise positions in [0, 1].
    pub x: Vec<f64>,
    /// Upper (suction side) offsets.
    pub upper: Vec<f64>,
    /// Lower (pressure side) offsets.
    pub lower: Vec<f64>,
}

impl AirfoilProfile {
    /// Samples the profile at `samples` evenly spaced chord positions.
    pub fn generate(samples: usize) -> Self {
        let last = samples.saturating_sub(1).max(1) as f64;
        let x: Vec<f64> = (0..samples).map(|i| i as f64 / last).collect();
        let upper = x.iter().map(|&p| upper_offset(p)).collect();
        let lower = x.iter().map(|&p| lower_offset(p)).collect();
        Self { x, upper, lower }
    }

    /// The bionic owl-wing profile used by every view.
    pub fn owl_wing() -> Self {
        Self::generate(AIRFOIL_SAMPLES)
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl Default for AirfoilProfile {
    fn default() -> Self {
        Self::owl_wing()
    }
}
