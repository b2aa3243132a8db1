use bevy::prelude::*;

use crate::{
    rendering::RasterRenderer,
    resources::{CurrentFrame, SeparationAngle, VizConfig},
    views::{render_panel, Study, Tab},
};

/// Clear and redraw the active tab whenever the tab or the angle changed.
pub fn repaint_system(
    tab: Res<State<Tab>>,
    angle: Res<SeparationAngle>,
    study: Res<Study>,
    config: Res<VizConfig>,
    mut frame: ResMut<CurrentFrame>,
) {
    if !tab.is_changed() && !angle.is_changed() && !frame.is_empty() {
        return;
    }

    let panel = render_panel(&study, *tab.get(), angle.0);
    let raster = RasterRenderer::new(config.render.pixel_density);
    match raster.render_png(&panel.scene) {
        Ok(png) => {
            debug!(
                "Repainted {:?} ({} commands, {} PNG bytes)",
                panel.tab,
                panel.scene.commands.len(),
                png.len()
            );
            frame.update(panel, png);
        }
        Err(e) => {
            // Keep the frame in step with the tab; only the raster is missing
            error!("Failed to rasterize {:?}: {}", panel.tab, e);
            frame.update(panel, Vec::new());
        }
    }
}
