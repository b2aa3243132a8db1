pub mod config;
mod frame;

pub use config::{ExportConfig, ExportFormat, RenderConfig, VizConfig};
pub use frame::{CurrentFrame, SeparationAngle};
