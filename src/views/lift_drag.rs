use std::f32::consts::FRAC_PI_2;

use crate::dataset::{AeroCoefficients, LiftDragComparison, RatioSeries};
use crate::rendering::{Canvas, Color, Scene, TextAlign};
use crate::utils::{format_number, CAPTION_FONT_SIZE, LABEL_FONT_SIZE, LIFT_DRAG_CANVAS};

pub const MARGIN_LEFT: f32 = 60.0;
pub const MARGIN_RIGHT: f32 = 30.0;
pub const MARGIN_TOP: f32 = 40.0;
pub const MARGIN_BOTTOM: f32 = 40.0;
pub const ANGLE_RANGE: f32 = 9.0; // degrees across the x axis
pub const RATIO_RANGE: f32 = 20.0; // L/D units up the y axis
pub const RATIO_TICK: usize = 5;
pub const MARKER_RADIUS: f32 = 5.0;

/// Data-to-pixel mapping for the comparison plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
    pub x_scale: f32,
    pub y_scale: f32,
}

impl PlotArea {
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_height = height - MARGIN_BOTTOM - MARGIN_TOP;
        Self {
            left: MARGIN_LEFT,
            bottom: height - MARGIN_BOTTOM,
            width: plot_width,
            height: plot_height,
            x_scale: plot_width / ANGLE_RANGE,
            y_scale: plot_height / RATIO_RANGE,
        }
    }

    pub fn to_pixel(&self, angle: f64, ratio: f64) -> (f32, f32) {
        (
            self.left + angle as f32 * self.x_scale,
            self.bottom - ratio as f32 * self.y_scale,
        )
    }
}

fn draw_series(canvas: &mut Canvas, area: &PlotArea, angles: &[f64], series: &RatioSeries, color: Color) {
    let points: Vec<(f32, f32)> = angles
        .iter()
        .zip(&series.ratios)
        .map(|(&a, &r)| area.to_pixel(a, r))
        .collect();

    canvas.begin_path();
    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            canvas.move_to(x, y);
        } else {
            canvas.line_to(x, y);
        }
    }
    canvas.set_stroke(color);
    canvas.set_line_width(2.0);
    canvas.stroke();

    for &(x, y) in &points {
        canvas.begin_path();
        canvas.arc(x, y, MARKER_RADIUS, 0.0, 2.0 * std::f32::consts::PI);
        canvas.set_fill(color);
        canvas.fill();
    }
}

/// Bionic vs NACA 0006 lift-to-drag ratio against angle of attack.
pub fn render_lift_drag(data: &LiftDragComparison) -> Scene {
    let (width, height) = LIFT_DRAG_CANVAS;
    let mut canvas = Canvas::new(width, height);
    let area = PlotArea::for_canvas(canvas.width(), canvas.height());

    // Axes
    canvas.begin_path();
    canvas.move_to(area.left, area.bottom);
    canvas.line_to(area.left + area.width, area.bottom);
    canvas.move_to(area.left, area.bottom);
    canvas.line_to(area.left, MARGIN_TOP);
    canvas.set_stroke(Color::BLACK);
    canvas.set_line_width(1.0);
    canvas.stroke();

    canvas.set_font_size(LABEL_FONT_SIZE);
    canvas.set_fill(Color::BLACK);
    canvas.set_text_align(TextAlign::Center);
    for &angle in &data.angles {
        let (x, _) = area.to_pixel(angle, 0.0);
        canvas.fill_text(format_number(angle), x, area.bottom + 20.0);
    }
    canvas.fill_text(
        "Angle of Attack (degrees)",
        area.left + area.width / 2.0,
        canvas.height() - 10.0,
    );

    canvas.set_text_align(TextAlign::Right);
    for tick in (0..=RATIO_RANGE as usize).step_by(RATIO_TICK) {
        let (_, y) = area.to_pixel(0.0, tick as f64);
        canvas.fill_text(tick.to_string(), area.left - 10.0, y + 5.0);
    }
    canvas.save();
    canvas.translate(20.0, canvas.height() / 2.0);
    canvas.rotate(-FRAC_PI_2);
    canvas.set_text_align(TextAlign::Center);
    canvas.fill_text("Lift-to-Drag Ratio", 0.0, 0.0);
    canvas.restore();

    draw_series(&mut canvas, &area, &data.angles, &data.bionic, Color::BLUE);
    draw_series(&mut canvas, &area, &data.angles, &data.naca, Color::RED);

    // Legend
    let legend_x = area.left + area.width - 120.0;
    for (row, (series, color)) in [(&data.bionic, Color::BLUE), (&data.naca, Color::RED)]
        .into_iter()
        .enumerate()
    {
        let top = MARGIN_TOP + 10.0 + 25.0 * row as f32;
        canvas.set_fill(color);
        canvas.fill_rect(legend_x, top, 15.0, 15.0);
        canvas.set_fill(Color::BLACK);
        canvas.set_text_align(TextAlign::Start);
        canvas.fill_text(series.name.clone(), legend_x + 20.0, top + 12.0);
    }

    canvas.set_text_align(TextAlign::Center);
    canvas.set_font_size(CAPTION_FONT_SIZE);
    canvas.fill_text(
        "Lift-to-Drag Ratio Comparison",
        area.left + area.width / 2.0,
        MARGIN_TOP - 10.0,
    );

    canvas.finish()
}

pub fn lift_drag_notes(data: &LiftDragComparison, coefficients: &AeroCoefficients) -> Vec<String> {
    let mut notes = Vec::new();
    for series in [&data.bionic, &data.naca] {
        if let Some(peak) = data.peak(series) {
            notes.push(format!(
                "Maximum L/D ratio ({}): {:.1} at {:.1}°",
                series.label, peak.ratio, peak.angle
            ));
        }
    }
    if let Some(improvement) = data.improvement_percent() {
        notes.push(format!("Performance improvement: {:.1}%", improvement.round()));
    }
    if data.bionic_dominates() {
        notes.push("The bionic airfoil maintains higher L/D across all angles of attack".into());
    }
    if let Some(peak) = data.peak(&data.bionic) {
        let bionic = &coefficients.bionic;
        if let (Some((cl, cd)), Some(ratio)) = (
            coefficients.at(bionic, peak.angle),
            coefficients.ratio_at(bionic, peak.angle),
        ) {
            notes.push(format!(
                "CFD coefficients at {}°: CL = {:.2}, CD = {:.3} (CL/CD = {:.1})",
                format_number(peak.angle),
                cl,
                cd,
                ratio
            ));
        }
    }
    notes.push("The concave lower surface contributes to improved aerodynamic performance".into());
    notes
}
