use bevy::{log::LogPlugin, prelude::*};
use std::{io, path::PathBuf};

use owlwing::{server::Session, utils::Result, VizConfig};

/// Serves newline-delimited JSON commands on stdin, one JSON response per line on stdout.
///
/// Usage: `owlwing_serve [config.yaml]`
fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = VizConfig::load_or_default(config_path.as_deref())?;

    let mut app = App::new();
    app.add_plugins(LogPlugin::default());
    let mut session = Session::with_app(app, config);
    info!("Waiting for commands on stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())
}
