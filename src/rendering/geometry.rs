use glam::Vec2;
use std::f32::consts::PI;

use super::types::{Path, PathSegment};

// Max angular step when flattening arcs
const ARC_STEP: f32 = PI / 32.0;

/// Points along a clockwise arc, both ends included.
pub fn arc_points(center: Vec2, radius: f32, start: f32, end: f32) -> Vec<Vec2> {
    let sweep = end - start;
    let steps = ((sweep.abs() / ARC_STEP).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let angle = start + sweep * i as f32 / steps as f32;
            center + radius * Vec2::new(angle.cos(), angle.sin())
        })
        .collect()
}

/// A path reduced to move/line/cubic/close steps, with arcs flattened.
///
/// An arc that follows an existing point is joined to it with a line; an arc
/// that opens a path starts a new sub-path at its first point.
pub fn flatten_arcs(path: &Path) -> Vec<PathSegment> {
    let mut out = Vec::with_capacity(path.segments.len());
    let mut has_point = false;

    for segment in &path.segments {
        match *segment {
            PathSegment::Arc {
                center,
                radius,
                start,
                end,
            } => {
                for (i, p) in arc_points(center, radius, start, end).into_iter().enumerate() {
                    if i == 0 && !has_point {
                        out.push(PathSegment::MoveTo(p));
                    } else {
                        out.push(PathSegment::LineTo(p));
                    }
                }
                has_point = true;
            }
            PathSegment::Close => out.push(PathSegment::Close),
            other => {
                has_point = true;
                out.push(other);
            }
        }
    }
    out
}
