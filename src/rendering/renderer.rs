use bevy::log::debug;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use super::geometry::flatten_arcs;
use super::types::{Color, DrawCommand, Path, PathSegment, Scene};
use crate::utils::errors::VizError;

/// Replays scenes onto a tiny-skia pixmap.
///
/// Text commands are not rasterized: there is no font engine behind this
/// backend. Use [`super::SvgRenderer`] for output that carries captions.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    pixel_density: f32,
}

impl RasterRenderer {
    pub fn new(pixel_density: f32) -> Self {
        Self { pixel_density }
    }

    pub fn render(&self, scene: &Scene) -> Result<Pixmap, VizError> {
        let mut canvas = self.create_canvas(scene)?;
        let transform = Transform::from_scale(self.pixel_density, self.pixel_density);
        let mut skipped_text = 0;

        for command in &scene.commands {
            match command {
                DrawCommand::Clear => canvas.fill(tiny_skia::Color::TRANSPARENT),
                DrawCommand::Fill { path, color } => {
                    if let Some(path) = build_path(path) {
                        canvas.fill_path(
                            &path,
                            &paint_for(*color),
                            FillRule::Winding,
                            transform,
                            None,
                        );
                    }
                }
                DrawCommand::Stroke { path, color, width } => {
                    if let Some(path) = build_path(path) {
                        let mut stroke = Stroke::default();
                        stroke.width = *width;
                        canvas.stroke_path(&path, &paint_for(*color), &stroke, transform, None);
                    }
                }
                DrawCommand::Text { .. } => skipped_text += 1,
            }
        }

        if skipped_text > 0 {
            debug!("Raster pass skipped {} text runs", skipped_text);
        }
        Ok(canvas)
    }

    /// Renders and encodes as PNG.
    pub fn render_png(&self, scene: &Scene) -> Result<Vec<u8>, VizError> {
        self.render(scene)?
            .encode_png()
            .map_err(|e| VizError::RenderError(format!("Failed to encode PNG: {}", e)))
    }

    fn create_canvas(&self, scene: &Scene) -> Result<Pixmap, VizError> {
        let width = (scene.width as f32 * self.pixel_density).round() as u32;
        let height = (scene.height as f32 * self.pixel_density).round() as u32;
        Pixmap::new(width, height).ok_or_else(|| {
            VizError::RenderError(format!("Failed to create {}x{} canvas", width, height))
        })
    }
}

impl Default for RasterRenderer {
    fn default() -> Self {
        Self::new(1.0)
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn build_path(path: &Path) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for segment in flatten_arcs(path) {
        match segment {
            PathSegment::MoveTo(p) => pb.move_to(p.x, p.y),
            PathSegment::LineTo(p) => pb.line_to(p.x, p.y),
            PathSegment::CubicTo { c1, c2, to } => pb.cubic_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y),
            PathSegment::Close => pb.close(),
            PathSegment::Arc { .. } => {}
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Canvas;

    fn red_square() -> Scene {
        let mut canvas = Canvas::new(20, 20);
        canvas.set_fill(Color::RED);
        canvas.fill_rect(5.0, 5.0, 10.0, 10.0);
        canvas.finish()
    }

    #[test]
    fn test_fill_lands_on_pixels() {
        let pixmap = RasterRenderer::default().render(&red_square()).unwrap();
        let inside = pixmap.pixel(10, 10).unwrap();
        let outside = pixmap.pixel(1, 1).unwrap();
        assert_eq!((inside.red(), inside.alpha()), (255, 255));
        assert_eq!(outside.alpha(), 0);
    }

    #[test]
    fn test_pixel_density_scales_canvas() {
        let pixmap = RasterRenderer::new(2.0).render(&red_square()).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (40, 40));
        assert_eq!(pixmap.pixel(20, 20).unwrap().alpha(), 255);
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let scene = Scene {
            width: 0,
            height: 10,
            commands: vec![],
        };
        assert!(matches!(
            RasterRenderer::default().render(&scene),
            Err(VizError::RenderError(_))
        ));
    }

    #[test]
    fn test_png_signature() {
        let png = RasterRenderer::default().render_png(&red_square()).unwrap();
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }
}
