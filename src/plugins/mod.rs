mod viewer;

pub use viewer::{ViewerSystemSet, VisualizationPlugin};
