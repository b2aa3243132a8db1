//! SVG output for recorded scenes.

use std::fmt::Write;

use super::geometry::flatten_arcs;
use super::types::{Color, DrawCommand, Path, PathSegment, Scene, TextAlign, TextBaseline};
use crate::utils::{errors::VizError, FONT_FAMILY};

/// Writes scenes as standalone SVG documents, text included.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn render(&self, scene: &Scene) -> Result<String, VizError> {
        let mut svg = String::new();
        self.write_scene(&mut svg, scene)
            .map_err(|e| VizError::RenderError(format!("Failed to write SVG: {}", e)))?;
        Ok(svg)
    }

    fn write_scene(&self, svg: &mut String, scene: &Scene) -> std::fmt::Result {
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="{}">"#,
            scene.width, scene.height, scene.width, scene.height, FONT_FAMILY
        )?;

        for command in &scene.commands {
            match command {
                // Commands after a clear are the only visible ones
                DrawCommand::Clear => {}
                DrawCommand::Fill { path, color } => {
                    writeln!(
                        svg,
                        r#"  <path d="{}" {} stroke="none"/>"#,
                        path_data(path),
                        paint_attr("fill", *color)
                    )?;
                }
                DrawCommand::Stroke { path, color, width } => {
                    writeln!(
                        svg,
                        r#"  <path d="{}" fill="none" {} stroke-width="{:.2}"/>"#,
                        path_data(path),
                        paint_attr("stroke", *color),
                        width
                    )?;
                }
                DrawCommand::Text {
                    text,
                    position,
                    size,
                    color,
                    align,
                    baseline,
                    rotation,
                } => {
                    let rotate = if *rotation != 0.0 {
                        format!(
                            r#" transform="rotate({:.2} {:.2} {:.2})""#,
                            rotation.to_degrees(),
                            position.x,
                            position.y
                        )
                    } else {
                        String::new()
                    };
                    writeln!(
                        svg,
                        r#"  <text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}" dominant-baseline="{}" {}{}>{}</text>"#,
                        position.x,
                        position.y,
                        size,
                        anchor(*align),
                        baseline_attr(*baseline),
                        paint_attr("fill", *color),
                        rotate,
                        escape_xml(text)
                    )?;
                }
            }
        }

        writeln!(svg, "</svg>")
    }
}

fn path_data(path: &Path) -> String {
    let mut parts = Vec::with_capacity(path.segments.len());
    for segment in flatten_arcs(path) {
        match segment {
            PathSegment::MoveTo(p) => parts.push(format!("M {:.2},{:.2}", p.x, p.y)),
            PathSegment::LineTo(p) => parts.push(format!("L {:.2},{:.2}", p.x, p.y)),
            PathSegment::CubicTo { c1, c2, to } => parts.push(format!(
                "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                c1.x, c1.y, c2.x, c2.y, to.x, to.y
            )),
            PathSegment::Close => parts.push("Z".to_string()),
            PathSegment::Arc { .. } => {}
        }
    }
    parts.join(" ")
}

fn paint_attr(kind: &str, color: Color) -> String {
    if color.a == 255 {
        format!(r#"{}="{}""#, kind, color.hex())
    } else {
        format!(
            r#"{}="{}" {}-opacity="{:.3}""#,
            kind,
            color.hex(),
            kind,
            color.alpha()
        )
    }
}

fn anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Start => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn baseline_attr(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Middle => "middle",
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
