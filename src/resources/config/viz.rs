use super::{export::ExportConfig, render::RenderConfig};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    utils::{Result, VizError, DEFAULT_SEPARATION_ANGLE, MAX_PIXEL_DENSITY},
    views::Tab,
};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub render: RenderConfig,
    pub export: ExportConfig,
    pub initial_tab: Tab,
    /// Separation angle in degrees shown before any selection.
    pub initial_angle: f64,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            export: ExportConfig::default(),
            initial_tab: Tab::Airfoil,
            initial_angle: DEFAULT_SEPARATION_ANGLE,
        }
    }
}

impl VizConfig {
    /// `<config dir>/owlwing/config.yaml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("owlwing").join("config.yaml"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path first, then the default location, then built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let density = self.render.pixel_density;
        if !density.is_finite() || density <= 0.0 || density > MAX_PIXEL_DENSITY {
            return Err(VizError::InvalidConfig(format!(
                "pixel_density must be in (0, {}], got {}",
                MAX_PIXEL_DENSITY, density
            )));
        }
        if self.export.formats.is_empty() {
            return Err(VizError::InvalidConfig(
                "at least one export format is required".into(),
            ));
        }
        if !self.initial_angle.is_finite() {
            return Err(VizError::InvalidConfig(format!(
                "initial_angle must be finite, got {}",
                self.initial_angle
            )));
        }
        Ok(())
    }
}
