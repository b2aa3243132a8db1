#![allow(dead_code)]

mod assertions;
mod test_app;

// Re-export
pub use assertions::{assert_interval_eq, assert_png_dimensions};
pub use test_app::{TestApp, TestAppBuilder};
