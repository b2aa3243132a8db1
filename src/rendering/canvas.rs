use glam::{Affine2, Vec2};

use super::types::{Color, DrawCommand, Path, PathSegment, Scene, TextAlign, TextBaseline};
use crate::utils::LABEL_FONT_SIZE;

#[derive(Debug, Clone)]
struct DrawState {
    transform: Affine2,
    rotation: f32,
    fill: Color,
    stroke: Color,
    line_width: f32,
    font_size: f32,
    align: TextAlign,
    baseline: TextBaseline,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            transform: Affine2::IDENTITY,
            rotation: 0.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            font_size: LABEL_FONT_SIZE,
            align: TextAlign::Start,
            baseline: TextBaseline::Alphabetic,
        }
    }
}

/// Immediate-mode drawing surface that records what it is asked to draw.
///
/// Coordinates passed to path and text calls go through the current
/// translate/rotate transform and are stored in device space, so a finished
/// [`Scene`] is independent of any backend.
pub struct Canvas {
    width: u32,
    height: u32,
    state: DrawState,
    saved: Vec<DrawState>,
    path: Path,
    commands: Vec<DrawCommand>,
}

impl Canvas {
    /// A new canvas. The recorded scene starts with a full clear.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            state: DrawState::default(),
            saved: Vec::new(),
            path: Path::default(),
            commands: vec![DrawCommand::Clear],
        }
    }

    pub fn width(&self) -> f32 {
        self.width as f32
    }

    pub fn height(&self) -> f32 {
        self.height as f32
    }

    pub fn save(&mut self) {
        self.saved.push(self.state.clone());
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.state.transform = self.state.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    /// Rotate subsequent drawing by `angle` radians (clockwise on screen).
    pub fn rotate(&mut self, angle: f32) {
        self.state.transform = self.state.transform * Affine2::from_angle(angle);
        self.state.rotation += angle;
    }

    pub fn set_fill(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.state.font_size = size;
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.align = align;
    }

    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.baseline = baseline;
    }

    fn to_device(&self, x: f32, y: f32) -> Vec2 {
        self.state.transform.transform_point2(Vec2::new(x, y))
    }

    pub fn begin_path(&mut self) {
        self.path = Path::default();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let p = self.to_device(x, y);
        self.path.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        let p = self.to_device(x, y);
        self.path.segments.push(PathSegment::LineTo(p));
    }

    pub fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let segment = PathSegment::CubicTo {
            c1: self.to_device(c1x, c1y),
            c2: self.to_device(c2x, c2y),
            to: self.to_device(x, y),
        };
        self.path.segments.push(segment);
    }

    /// Clockwise arc from `start` to `end` radians. Joined to the current point by a line.
    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) {
        let rotation = self.state.rotation;
        let segment = PathSegment::Arc {
            center: self.to_device(cx, cy),
            radius,
            start: start + rotation,
            end: end + rotation,
        };
        self.path.segments.push(segment);
    }

    pub fn close_path(&mut self) {
        self.path.segments.push(PathSegment::Close);
    }

    pub fn fill(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Fill {
            path: self.path.clone(),
            color: self.state.fill,
        });
    }

    pub fn stroke(&mut self) {
        if self.path.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Stroke {
            path: self.path.clone(),
            color: self.state.stroke,
            width: self.state.line_width,
        });
    }

    /// Fills a rectangle without touching the current path.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
        let mut segments: Vec<PathSegment> = corners
            .iter()
            .enumerate()
            .map(|(i, &(cx, cy))| {
                let p = self.to_device(cx, cy);
                if i == 0 {
                    PathSegment::MoveTo(p)
                } else {
                    PathSegment::LineTo(p)
                }
            })
            .collect();
        segments.push(PathSegment::Close);

        self.commands.push(DrawCommand::Fill {
            path: Path { segments },
            color: self.state.fill,
        });
    }

    pub fn fill_text(&mut self, text: impl Into<String>, x: f32, y: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            position: self.to_device(x, y),
            size: self.state.font_size,
            color: self.state.fill,
            align: self.state.align,
            baseline: self.state.baseline,
            rotation: self.state.rotation,
        });
    }

    pub fn finish(self) -> Scene {
        Scene {
            width: self.width,
            height: self.height,
            commands: self.commands,
        }
    }
}
