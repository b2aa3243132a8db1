pub mod dataset;
pub mod export;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod server;
pub mod systems;
pub mod utils;
pub mod views;

pub use plugins::VisualizationPlugin;
pub use resources::VizConfig;
pub use utils::{Result, VizError};
pub use views::{render_panel, Panel, Study, Tab};
