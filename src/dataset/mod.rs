//! Literal datasets of the owl-wing airfoil study.

mod airfoil;
mod coefficients;
mod directivity;
mod lift_drag;
mod separation;
mod spectrum;

pub use airfoil::*;
pub use coefficients::{AeroCoefficients, CoefficientSeries};
pub use directivity::DirectivityPattern;
pub use lift_drag::{LiftDragComparison, RatioPeak, RatioSeries, STUDY_ANGLES};
pub use separation::{ChordInterval, SeparationEntry, SeparationTable};
pub use spectrum::AcousticSpectrum;
