use crate::dataset::AirfoilProfile;
use crate::rendering::{Canvas, Color, Scene};
use crate::utils::{AIRFOIL_CANVAS, CAPTION_FONT_SIZE};

pub const PROFILE_SCALE: f32 = 500.0; // px per chord
pub const PROFILE_OFFSET_X: f32 = 50.0;

pub fn surface_fill() -> Color {
    Color::rgba(173, 216, 230, 0.5)
}

/// Traces the closed contour: upper surface forward, lower surface back.
pub(crate) fn trace_contour(canvas: &mut Canvas, profile: &AirfoilProfile, scale: f32) {
    canvas.begin_path();
    for (i, (&x, &y)) in profile.x.iter().zip(&profile.upper).enumerate() {
        if i == 0 {
            canvas.move_to(x as f32 * scale, -y as f32 * scale);
        } else {
            canvas.line_to(x as f32 * scale, -y as f32 * scale);
        }
    }
    for (&x, &y) in profile.x.iter().zip(&profile.lower).rev() {
        canvas.line_to(x as f32 * scale, -y as f32 * scale);
    }
    canvas.close_path();
}

pub(crate) fn trace_surface(canvas: &mut Canvas, x: &[f64], offsets: &[f64], scale: f32) {
    canvas.begin_path();
    for (i, (&x, &y)) in x.iter().zip(offsets).enumerate() {
        if i == 0 {
            canvas.move_to(x as f32 * scale, -y as f32 * scale);
        } else {
            canvas.line_to(x as f32 * scale, -y as f32 * scale);
        }
    }
}

/// Filled profile with blue suction and red pressure outlines, in the
/// current canvas frame (leading edge at the origin, y up is negative).
pub(crate) fn draw_profile(canvas: &mut Canvas, profile: &AirfoilProfile, scale: f32) {
    trace_contour(canvas, profile, scale);
    canvas.set_fill(surface_fill());
    canvas.fill();

    trace_surface(canvas, &profile.x, &profile.upper, scale);
    canvas.set_stroke(Color::BLUE);
    canvas.set_line_width(2.0);
    canvas.stroke();

    trace_surface(canvas, &profile.x, &profile.lower, scale);
    canvas.set_stroke(Color::RED);
    canvas.set_line_width(2.0);
    canvas.stroke();
}

/// Cross-section of the bionic airfoil with its chord line and captions.
pub fn render_airfoil(profile: &AirfoilProfile) -> Scene {
    let (width, height) = AIRFOIL_CANVAS;
    let mut canvas = Canvas::new(width, height);

    let scale = PROFILE_SCALE;
    let offset_x = PROFILE_OFFSET_X;
    let offset_y = canvas.height() / 2.0;

    canvas.save();
    canvas.translate(offset_x, offset_y);
    draw_profile(&mut canvas, profile, scale);
    canvas.restore();

    // Chord reference line
    canvas.begin_path();
    canvas.move_to(offset_x, offset_y);
    canvas.line_to(offset_x + scale, offset_y);
    canvas.set_stroke(Color::rgba(0, 0, 0, 0.3));
    canvas.set_line_width(1.0);
    canvas.stroke();

    canvas.set_font_size(CAPTION_FONT_SIZE);
    canvas.set_fill(Color::BLACK);
    canvas.fill_text("Leading Edge", offset_x - 40.0, offset_y - 50.0);
    canvas.fill_text("Trailing Edge", offset_x + scale - 40.0, offset_y - 50.0);
    canvas.fill_text("Upper Surface (Suction Side)", offset_x + 200.0, offset_y - 30.0);
    canvas.fill_text("Lower Surface (Pressure Side)", offset_x + 200.0, offset_y + 40.0);
    canvas.fill_text("Concave Region", offset_x + 150.0, offset_y + 70.0);

    canvas.finish()
}

pub fn airfoil_notes() -> Vec<String> {
    vec![
        "Chord length: 24.0 mm".into(),
        "Maximum thickness: 5.5% of chord at x/c = 0.11".into(),
        "Deep concave lower surface improves aerodynamic performance".into(),
        "Thin trailing edge section (thickness < 3% for x/c > 0.3)".into(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCommand, PathSegment};

    #[test]
    fn test_contour_runs_upper_then_lower_reversed() {
        let profile = AirfoilProfile::owl_wing();
        let scene = render_airfoil(&profile);

        let DrawCommand::Fill { path, color } = &scene.commands[1] else {
            panic!("expected the contour fill first");
        };
        assert_eq!(*color, surface_fill());
        // 100 upper points, 100 lower points, one close
        assert_eq!(path.segments.len(), 201);
        assert_eq!(path.segments[200], PathSegment::Close);
    }

    #[test]
    fn test_leading_edge_sits_on_canvas_origin() {
        let scene = render_airfoil(&AirfoilProfile::owl_wing());
        let DrawCommand::Fill { path, .. } = &scene.commands[1] else {
            panic!("expected the contour fill first");
        };
        let PathSegment::MoveTo(p) = path.segments[0] else {
            panic!("contour must start with a move");
        };
        assert_eq!((p.x, p.y), (50.0, 150.0));
    }

    #[test]
    fn test_captions() {
        let scene = render_airfoil(&AirfoilProfile::owl_wing());
        assert_eq!((scene.width, scene.height), (600, 300));
        for caption in ["Leading Edge", "Trailing Edge", "Concave Region"] {
            assert!(scene.contains_text(caption), "missing {}", caption);
        }
    }
}
