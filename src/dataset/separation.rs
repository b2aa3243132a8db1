use serde::{Deserialize, Serialize};

/// Chordwise extent of a separated region, as fractions of chord.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordInterval {
    pub start: f64,
    pub end: f64,
}

impl ChordInterval {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Separated regions observed at one angle of attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeparationEntry {
    /// Angle of attack in degrees.
    pub angle: f64,
    /// Lower surface region, if any.
    pub pressure_side: Option<ChordInterval>,
    /// Upper surface region, if any.
    pub suction_side: Option<ChordInterval>,
}

/// Separation regions for every studied angle of attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeparationTable {
    pub entries: Vec<SeparationEntry>,
}

impl SeparationTable {
    pub fn owl_wing_study() -> Self {
        let entry = |angle, pressure_side, suction_side| SeparationEntry {
            angle,
            pressure_side,
            suction_side,
        };
        let span = |start, end| Some(ChordInterval::new(start, end));

        Self {
            entries: vec![
                entry(0.0, span(0.15, 0.71), span(0.92, 1.0)),
                entry(1.5, span(0.21, 0.58), span(0.95, 1.0)),
                entry(3.0, None, span(0.70, 1.0)),
                entry(4.5, None, span(0.60, 1.0)),
                entry(6.0, None, span(0.42, 1.0)),
                entry(7.5, None, span(0.08, 1.0)),
                entry(9.0, None, span(0.0, 1.0)),
            ],
        }
    }

    /// Angles offered by the selection control, in dataset order.
    pub fn angles(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.angle).collect()
    }

    /// Exact-match lookup. Angles between samples are not interpolated.
    pub fn find(&self, angle: f64) -> Option<&SeparationEntry> {
        self.entries.iter().find(|e| e.angle == angle)
    }

    pub fn contains(&self, angle: f64) -> bool {
        self.find(angle).is_some()
    }
}

impl Default for SeparationTable {
    fn default() -> Self {
        Self::owl_wing_study()
    }
}
