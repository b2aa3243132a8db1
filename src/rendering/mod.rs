mod canvas;
mod geometry;
mod renderer;
mod svg;
mod types;

pub use canvas::Canvas;
pub use geometry::{arc_points, flatten_arcs};
pub use renderer::RasterRenderer;
pub use svg::SvgRenderer;
pub use types::*;
