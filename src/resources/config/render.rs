use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Device pixels per logical canvas unit.
    pub pixel_density: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { pixel_density: 1.0 }
    }
}
