use base64::Engine;
use bevy::prelude::*;
use std::io::{BufRead, Write};

use super::commands::{Command, Response, Status};
use crate::{
    plugins::VisualizationPlugin,
    resources::{CurrentFrame, SeparationAngle, VizConfig},
    systems::{SelectAngle, SelectTab},
    utils::{Result, VizError},
    views::{Study, Tab},
};

/// Drives a headless viewer app, one update per command.
pub struct Session {
    app: App,
}

impl Session {
    pub fn new(config: VizConfig) -> Self {
        Self::with_app(App::new(), config)
    }

    /// Builds on a caller-provided app, e.g. one that already carries `LogPlugin`.
    pub fn with_app(mut app: App, config: VizConfig) -> Self {
        app.add_plugins(VisualizationPlugin::new(config));
        app.update();
        Self { app }
    }

    pub fn handle(&mut self, command: &Command) -> Result<Response> {
        match command {
            Command::SelectTab { tab } => {
                self.app.world_mut().send_event(SelectTab { tab: *tab });
                self.app.update();
            }
            Command::SelectAngle { degrees } => {
                if !degrees.is_finite() {
                    return Err(VizError::InvalidCommand(format!(
                        "angle must be finite, got {}",
                        degrees
                    )));
                }
                self.app
                    .world_mut()
                    .send_event(SelectAngle { degrees: *degrees });
                self.app.update();
            }
            Command::Render => {}
            Command::Close => return self.response(Status::Closed, None),
        }
        self.response(Status::Ok, None)
    }

    /// Parses and applies one line; parse or command failures become error responses.
    pub fn handle_line(&mut self, line: &str) -> Result<Response> {
        let outcome = serde_json::from_str::<Command>(line)
            .map_err(VizError::from)
            .and_then(|command| self.handle(&command));
        match outcome {
            Ok(response) => Ok(response),
            Err(e) => {
                warn!("Rejected command {:?}: {}", line, e);
                self.response(Status::Error, Some(e.to_string()))
            }
        }
    }

    /// Serves newline-delimited commands until `Close` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let response = self.handle_line(line.trim())?;
            serde_json::to_writer(&mut output, &response)?;
            writeln!(output)?;
            output.flush()?;
            if response.status == Status::Closed {
                info!("Session closed by client");
                break;
            }
        }
        Ok(())
    }

    fn response(&self, status: Status, message: Option<String>) -> Result<Response> {
        let world = self.app.world();
        let frame = world.resource::<CurrentFrame>();
        let panel = frame
            .panel
            .as_ref()
            .ok_or_else(|| VizError::RenderError("no frame has been painted yet".into()))?;

        Ok(Response {
            status,
            message,
            tab: *world.resource::<State<Tab>>().get(),
            angle: world.resource::<SeparationAngle>().0,
            angles: world.resource::<Study>().separation.angles(),
            title: panel.title.clone(),
            notes: panel.notes.clone(),
            width: panel.scene.width,
            height: panel.scene.height,
            frame: base64::engine::general_purpose::STANDARD.encode(&frame.png),
        })
    }
}
