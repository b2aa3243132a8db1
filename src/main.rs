use bevy::{log::LogPlugin, prelude::*};
use std::path::PathBuf;

use owlwing::{
    export::{export_panel, file_stem},
    resources::{CurrentFrame, VizConfig},
    systems::{SelectAngle, SelectTab},
    utils::{Result, PAGE_TITLE},
    views::{summary_findings, Study, Tab},
    VisualizationPlugin,
};

/// Paints every tab, and every offered angle of the separation tab, into the
/// configured output directory.
///
/// Usage: `owlwing [config.yaml] [output_dir]`
fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let mut config = VizConfig::load_or_default(config_path.as_deref())?;
    if let Some(dir) = args.next() {
        config.export.output_dir = PathBuf::from(dir);
    }
    let output_dir = config.export.output_dir.clone();

    let mut app = App::new();
    app.add_plugins(LogPlugin::default())
        .add_plugins(VisualizationPlugin::new(config.clone()));
    app.update();

    info!("{}", PAGE_TITLE);
    let angles = app.world().resource::<Study>().separation.angles();
    let mut written = 0;
    for tab in Tab::ALL {
        app.world_mut().send_event(SelectTab { tab });
        let tab_angles = match tab {
            Tab::Separation => angles.clone(),
            _ => vec![config.initial_angle],
        };
        for angle in tab_angles {
            app.world_mut().send_event(SelectAngle { degrees: angle });
            app.update();

            let frame = app.world().resource::<CurrentFrame>();
            if let Some(panel) = &frame.panel {
                let paths = export_panel(panel, &file_stem(tab, angle), &output_dir, &config)?;
                written += paths.len();
            }
        }
    }

    info!("Wrote {} files to {}", written, output_dir.display());
    for (i, finding) in summary_findings().iter().enumerate() {
        info!("{}. {}", i + 1, finding);
    }
    Ok(())
}
