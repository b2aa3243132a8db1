//! Writing painted panels to disk.

use bevy::log::info;
use std::path::{Path, PathBuf};

use crate::{
    rendering::{RasterRenderer, SvgRenderer},
    resources::{ExportFormat, VizConfig},
    utils::{format_number, Result},
    views::{Panel, Tab},
};

/// File stem for a panel; only the separation view depends on the angle.
pub fn file_stem(tab: Tab, angle: f64) -> String {
    match tab {
        Tab::Separation => format!("{}_{}deg", tab.slug(), format_number(angle)),
        _ => tab.slug().to_string(),
    }
}

/// Writes `panel` once per configured format into `dir`, returning the paths written.
pub fn export_panel(panel: &Panel, stem: &str, dir: &Path, config: &VizConfig) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(config.export.formats.len());
    for format in &config.export.formats {
        let path = dir.join(format!("{}.{}", stem, format.extension()));
        match format {
            ExportFormat::Png => {
                let png = RasterRenderer::new(config.render.pixel_density).render_png(&panel.scene)?;
                std::fs::write(&path, png)?;
            }
            ExportFormat::Svg => {
                std::fs::write(&path, SvgRenderer.render(&panel.scene)?)?;
            }
            ExportFormat::Json => {
                let file = std::fs::File::create(&path)?;
                serde_json::to_writer_pretty(file, panel)?;
            }
        }
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stems() {
        assert_eq!(file_stem(Tab::Airfoil, 9.0), "airfoil");
        assert_eq!(file_stem(Tab::Separation, 1.5), "separation_1.5deg");
        assert_eq!(file_stem(Tab::Separation, 6.0), "separation_6deg");
    }
}
