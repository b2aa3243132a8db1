use serde::{Deserialize, Serialize};

use crate::views::Tab;

/// Commands read by the serve loop, one JSON value per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Switch to another tab.
    SelectTab { tab: Tab },
    /// Pick the separation angle of attack in degrees.
    SelectAngle { degrees: f64 },
    /// Return the current frame without changing anything.
    Render,
    /// End the session.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
    Closed,
}

/// Reply to every command, describing the frame after it was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    pub tab: Tab,
    pub angle: f64,
    /// Angles offered by the separation selector.
    pub angles: Vec<f64>,
    pub title: String,
    pub notes: Vec<String>,
    pub width: u32,
    pub height: u32,
    /// Base64 PNG of the canvas.
    pub frame: String,
}
