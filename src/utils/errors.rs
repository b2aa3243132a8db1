use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Command error: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, VizError>;
