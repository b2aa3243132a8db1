use crate::dataset::{AirfoilProfile, ChordInterval, SeparationEntry, SeparationTable};
use crate::rendering::{Canvas, Color, Scene};
use crate::utils::{deg_to_rad, format_number, grid_index, CAPTION_FONT_SIZE, SEPARATION_CANVAS};

use super::airfoil::draw_profile;

pub const SEPARATION_SCALE: f32 = 450.0; // px per chord
pub const SEPARATION_OFFSET_X: f32 = 70.0;

// Caption thresholds (degrees), independent of the table
pub const PRESSURE_SIDE_REGIME_MAX: f64 = 1.5;
pub const TRANSITION_REGIME_MAX: f64 = 3.0;

// Eddy glyph proportions, relative to the bubble height
const EDDY_LIFT: f32 = 0.4;
const EDDY_RING: f32 = 0.15;
const SWIRL_RING: f32 = 0.7;
const SWIRL_TURNS: f32 = 2.5; // in units of pi

// Bubble control point placement
const CONTROL_REACH: f32 = 0.3;
const START_BULGE: f32 = 0.7;
const END_BULGE: f32 = 0.3;

/// Look of one separation bubble. Calibrated by eye against the study figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleStyle {
    /// Bubble height as a fraction of the drawing scale.
    pub height_fraction: f32,
    /// Eddies per unit chord of separated length.
    pub eddy_density: f64,
    /// -1 bulges away from the upper surface, +1 away from the lower one.
    pub direction: f32,
    pub fill: Color,
    pub eddy: Color,
}

impl BubbleStyle {
    pub fn suction() -> Self {
        Self {
            height_fraction: 0.1,
            eddy_density: 5.0,
            direction: -1.0,
            fill: Color::rgba(255, 100, 100, 0.5),
            eddy: Color::rgba(200, 0, 0, 0.7),
        }
    }

    pub fn pressure() -> Self {
        Self {
            height_fraction: 0.05,
            eddy_density: 3.0,
            direction: 1.0,
            fill: Color::rgba(100, 100, 255, 0.5),
            eddy: Color::rgba(0, 0, 200, 0.7),
        }
    }

    /// Number of eddy glyphs drawn inside `span`.
    pub fn eddy_count(&self, span: &ChordInterval) -> usize {
        (span.width() * self.eddy_density).floor().max(0.0) as usize
    }
}

/// Draws a bubble over `surface` between the interval bounds, in the airfoil frame.
fn draw_bubble(
    canvas: &mut Canvas,
    x: &[f64],
    surface: &[f64],
    span: &ChordInterval,
    style: &BubbleStyle,
    scale: f32,
) {
    let n = x.len();
    if n == 0 {
        return;
    }
    let height = style.height_fraction * scale;
    let dir = style.direction;

    let start_x = span.start as f32 * scale;
    let start_idx = grid_index(span.start, n);
    let start_y = -surface[start_idx] as f32 * scale;

    let end_x = span.end as f32 * scale;
    let end_idx = grid_index(span.end, n);
    let end_y = -surface[end_idx] as f32 * scale;

    let mid_x = (start_x + end_x) / 2.0;

    canvas.begin_path();
    canvas.move_to(start_x, start_y);
    canvas.bezier_curve_to(
        start_x + (mid_x - start_x) * CONTROL_REACH,
        start_y + dir * height * START_BULGE,
        mid_x + (end_x - mid_x) * CONTROL_REACH,
        end_y + dir * height * END_BULGE,
        end_x,
        end_y,
    );
    for i in (start_idx..=end_idx).rev() {
        canvas.line_to(x[i] as f32 * scale, -surface[i] as f32 * scale);
    }
    canvas.close_path();
    canvas.set_fill(style.fill);
    canvas.fill();

    let count = style.eddy_count(span);
    for i in 0..count {
        let t = (i as f64 + 0.5) / count as f64;
        let eddy_x = start_x + (end_x - start_x) * t as f32;
        let base_idx = ((t * (end_idx - start_idx) as f64).floor() as usize + start_idx).min(n - 1);
        let eddy_y = -surface[base_idx] as f32 * scale + dir * height * EDDY_LIFT;
        let radius = height * EDDY_RING;

        canvas.begin_path();
        canvas.arc(eddy_x, eddy_y, radius, 0.0, 2.0 * std::f32::consts::PI);
        canvas.set_stroke(style.eddy);
        canvas.set_line_width(1.0);
        canvas.stroke();

        canvas.begin_path();
        canvas.move_to(eddy_x, eddy_y);
        canvas.arc(
            eddy_x,
            eddy_y,
            radius * SWIRL_RING,
            0.0,
            SWIRL_TURNS * std::f32::consts::PI,
        );
        canvas.stroke();
    }
}

fn draw_overlays(canvas: &mut Canvas, profile: &AirfoilProfile, entry: &SeparationEntry, scale: f32) {
    if let Some(span) = &entry.suction_side {
        draw_bubble(canvas, &profile.x, &profile.upper, span, &BubbleStyle::suction(), scale);
    }
    if let Some(span) = &entry.pressure_side {
        draw_bubble(canvas, &profile.x, &profile.lower, span, &BubbleStyle::pressure(), scale);
    }
}

/// Airfoil pitched to `angle` degrees with the separated regions recorded for that angle.
///
/// An angle that is not in `table` draws the pitched airfoil only.
pub fn render_separation(profile: &AirfoilProfile, table: &SeparationTable, angle: f64) -> Scene {
    let (width, height) = SEPARATION_CANVAS;
    let mut canvas = Canvas::new(width, height);

    let scale = SEPARATION_SCALE;
    let offset_x = SEPARATION_OFFSET_X;
    let offset_y = canvas.height() / 2.0;
    let entry = table.find(angle);

    // Free-stream reference axis
    canvas.begin_path();
    canvas.move_to(offset_x - 20.0, offset_y);
    canvas.line_to(offset_x + scale + 50.0, offset_y);
    canvas.set_stroke(Color::rgba(0, 0, 0, 0.2));
    canvas.set_line_width(1.0);
    canvas.stroke();

    // Nose-up pitch is a counter-clockwise turn on screen
    canvas.save();
    canvas.translate(offset_x, offset_y);
    canvas.rotate(-deg_to_rad(angle) as f32);
    draw_profile(&mut canvas, profile, scale);
    if let Some(entry) = entry {
        draw_overlays(&mut canvas, profile, entry, scale);
    }
    canvas.restore();

    // Flow direction arrow
    canvas.begin_path();
    canvas.move_to(40.0, offset_y);
    canvas.line_to(60.0, offset_y);
    canvas.line_to(55.0, offset_y - 5.0);
    canvas.move_to(60.0, offset_y);
    canvas.line_to(55.0, offset_y + 5.0);
    canvas.set_stroke(Color::BLACK);
    canvas.set_line_width(2.0);
    canvas.stroke();

    canvas.set_font_size(CAPTION_FONT_SIZE);
    canvas.set_fill(Color::BLACK);
    canvas.fill_text("Flow Direction", 30.0, offset_y - 15.0);
    canvas.fill_text(
        format!("Angle of Attack: {}°", format_number(angle)),
        canvas.width() - 150.0,
        30.0,
    );

    if let Some(entry) = entry {
        if entry.suction_side.is_some() {
            canvas.set_fill(Color::rgba(255, 0, 0, 0.7));
            canvas.fill_text("Separation Region", offset_x + scale / 2.0, offset_y - 80.0);
        }
        if entry.pressure_side.is_some() {
            canvas.set_fill(Color::rgba(0, 0, 255, 0.7));
            canvas.fill_text("Separation Bubble", offset_x + scale / 3.0, offset_y + 80.0);
        }
    }

    canvas.finish()
}

/// Qualitative description of the separation regime at `angle`.
pub fn separation_notes(angle: f64) -> Vec<String> {
    let notes: &[&str] = if angle <= PRESSURE_SIDE_REGIME_MAX {
        &[
            "Separation occurs on the pressure side (lower surface) due to the deep concave profile",
            "Small separation at the trailing edge of the suction side",
        ]
    } else if angle <= TRANSITION_REGIME_MAX {
        &[
            "Transition point: Separation shifts from pressure side to suction side",
            "Separation begins at ~70% chord on the suction side",
        ]
    } else {
        &[
            "Separation on the suction side increases with angle of attack",
            "At 9°, complete separation from the leading edge on the suction side",
            "Multiple eddies form in the separation region",
        ]
    };
    notes.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCommand, PathSegment};
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn bubble_fills(scene: &Scene, style: &BubbleStyle) -> usize {
        scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Fill { color, .. } if *color == style.fill))
            .count()
    }

    fn eddy_strokes(scene: &Scene, style: &BubbleStyle) -> usize {
        scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke { color, .. } if *color == style.eddy))
            .count()
    }

    /// Start point and bezier control points of the bubble filled in `style`.
    fn bubble_curve(scene: &Scene, style: &BubbleStyle) -> (Vec2, Vec2, Vec2, Vec2) {
        let path = scene
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::Fill { path, color } if *color == style.fill => Some(path),
                _ => None,
            })
            .expect("bubble not drawn");
        match &path.segments[..2] {
            [PathSegment::MoveTo(start), PathSegment::CubicTo { c1, c2, to }] => {
                (*start, *c1, *c2, *to)
            }
            _ => panic!("bubble must open with a move and a cubic"),
        }
    }

    fn eddy_centers(scene: &Scene, style: &BubbleStyle) -> Vec<Vec2> {
        scene
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Stroke { path, color, .. } if *color == style.eddy => {
                    match path.segments.first() {
                        Some(PathSegment::Arc { center, .. }) => Some(*center),
                        _ => None,
                    }
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_bubbles_bulge_away_from_their_surface() {
        let profile = AirfoilProfile::owl_wing();
        let scene = render_separation(&profile, &SeparationTable::owl_wing_study(), 0.0);
        let scale = SEPARATION_SCALE;

        for style in [BubbleStyle::suction(), BubbleStyle::pressure()] {
            let height = style.height_fraction * scale;
            let (start, c1, c2, end) = bubble_curve(&scene, &style);
            let mid_x = (start.x + end.x) / 2.0;

            assert_relative_eq!(c1.x, start.x + (mid_x - start.x) * CONTROL_REACH, epsilon = 1e-3);
            assert_relative_eq!(c2.x, mid_x + (end.x - mid_x) * CONTROL_REACH, epsilon = 1e-3);
            assert_relative_eq!(c1.y - start.y, style.direction * height * START_BULGE, epsilon = 1e-3);
            assert_relative_eq!(c2.y - end.y, style.direction * height * END_BULGE, epsilon = 1e-3);
        }

        // Screen y grows downwards: suction bulges up, pressure bulges down
        let (start, c1, c2, _) = bubble_curve(&scene, &BubbleStyle::suction());
        assert!(c1.y < start.y && c2.y < start.y);
        assert_relative_eq!(start.y - c1.y, 0.1 * scale * START_BULGE, epsilon = 1e-3);
        let (start, c1, _, end) = bubble_curve(&scene, &BubbleStyle::pressure());
        assert!(c1.y > start.y);
        assert_relative_eq!(c1.y - start.y, 0.05 * scale * START_BULGE, epsilon = 1e-3);
        assert!(end.x > start.x);
    }

    #[test]
    fn test_eddies_sit_off_the_surface() {
        let profile = AirfoilProfile::owl_wing();
        let table = SeparationTable::owl_wing_study();
        let scene = render_separation(&profile, &table, 0.0);
        let style = BubbleStyle::pressure();
        let span = table.find(0.0).and_then(|e| e.pressure_side).unwrap();

        let centers = eddy_centers(&scene, &style);
        assert_eq!(centers.len(), 1);

        let n = profile.len();
        let (start_idx, end_idx) = (grid_index(span.start, n), grid_index(span.end, n));
        let base_idx = (end_idx - start_idx) / 2 + start_idx;
        let surface_y = 160.0 - profile.lower[base_idx] as f32 * SEPARATION_SCALE;
        let height = style.height_fraction * SEPARATION_SCALE;
        assert_relative_eq!(centers[0].y - surface_y, height * EDDY_LIFT, epsilon = 1e-3);
    }

    #[test]
    fn test_eddy_count_floors_width() {
        let suction = BubbleStyle::suction();
        let pressure = BubbleStyle::pressure();
        assert_eq!(suction.eddy_count(&ChordInterval::new(0.0, 1.0)), 5);
        assert_eq!(suction.eddy_count(&ChordInterval::new(0.42, 1.0)), 2);
        assert_eq!(suction.eddy_count(&ChordInterval::new(0.92, 1.0)), 0);
        assert_eq!(pressure.eddy_count(&ChordInterval::new(0.15, 0.71)), 1);
    }

    #[test]
    fn test_zero_degrees_draws_both_bubbles() {
        let scene = render_separation(
            &AirfoilProfile::owl_wing(),
            &SeparationTable::owl_wing_study(),
            0.0,
        );
        assert_eq!(bubble_fills(&scene, &BubbleStyle::suction()), 1);
        assert_eq!(bubble_fills(&scene, &BubbleStyle::pressure()), 1);
        // ring + swirl per eddy; the short suction span holds none
        assert_eq!(eddy_strokes(&scene, &BubbleStyle::suction()), 0);
        assert_eq!(eddy_strokes(&scene, &BubbleStyle::pressure()), 2);
        assert!(scene.contains_text("Separation Region"));
        assert!(scene.contains_text("Separation Bubble"));
        assert!(scene.contains_text("Angle of Attack: 0°"));
    }

    #[test]
    fn test_nine_degrees_is_suction_only() {
        let scene = render_separation(
            &AirfoilProfile::owl_wing(),
            &SeparationTable::owl_wing_study(),
            9.0,
        );
        assert_eq!(bubble_fills(&scene, &BubbleStyle::suction()), 1);
        assert_eq!(bubble_fills(&scene, &BubbleStyle::pressure()), 0);
        assert_eq!(eddy_strokes(&scene, &BubbleStyle::suction()), 10);
        assert!(!scene.contains_text("Separation Bubble"));
    }

    #[test]
    fn test_unknown_angle_draws_no_overlay() {
        let profile = AirfoilProfile::owl_wing();
        let table = SeparationTable::owl_wing_study();
        let scene = render_separation(&profile, &table, 2.0);

        assert_eq!(bubble_fills(&scene, &BubbleStyle::suction()), 0);
        assert_eq!(bubble_fills(&scene, &BubbleStyle::pressure()), 0);
        assert!(!scene.contains_text("Separation Region"));
        assert!(scene.contains_text("Angle of Attack: 2°"));
    }

    #[test]
    fn test_airfoil_pitches_nose_up_about_leading_edge() {
        let profile = AirfoilProfile::owl_wing();
        let scene = render_separation(&profile, &SeparationTable::owl_wing_study(), 9.0);
        let DrawCommand::Fill { path, .. } = &scene.commands[2] else {
            panic!("expected the contour fill after the reference axis");
        };
        let PathSegment::MoveTo(nose) = path.segments[0] else {
            panic!("contour must start with a move");
        };
        assert!((nose.x - 70.0).abs() < 1e-4 && (nose.y - 160.0).abs() < 1e-4);

        // Trailing edge sits above the axis once pitched
        let PathSegment::LineTo(tail) = path.segments[profile.len() - 1] else {
            panic!("upper surface is drawn with lines");
        };
        assert!(tail.y < 160.0 - 60.0);
    }

    #[test]
    fn test_caption_thresholds() {
        assert!(separation_notes(0.0)[0].contains("pressure side"));
        assert!(separation_notes(1.5)[0].contains("pressure side"));
        assert!(separation_notes(3.0)[0].starts_with("Transition point"));
        assert!(separation_notes(4.5)[0].contains("increases with angle"));
        // thresholds apply to angles outside the table too
        assert_eq!(separation_notes(2.0), separation_notes(3.0));
    }
}
