pub mod export;
pub mod render;
pub mod viz;

pub use export::{ExportConfig, ExportFormat};
pub use render::RenderConfig;
pub use viz::VizConfig;
