use egui::{Pos2, Rect};

// Minimum sizes enforced when a transform gesture is committed.
pub const MIN_RECT_SIZE: f32 = 5.0;
pub const MIN_RADIUS: f32 = 3.0;
pub const MIN_STAR_OUTER_RADIUS: f32 = 3.0;
pub const MIN_STAR_INNER_RADIUS: f32 = 2.0;

/// Extra hit-test padding around thin line and arrow strokes.
pub const LINE_HIT_PADDING: f32 = 4.0;

/// Calculate distance from a point to a line segment (used for line/arrow hit testing)
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Bounding box of a flat `[x0, y0, x1, y1, ..]` coordinate list.
pub(crate) fn flat_points_bounds(points: &[f32], padding: f32) -> Rect {
    if points.len() < 2 {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for pair in points.chunks_exact(2) {
        min_x = min_x.min(pair[0]);
        min_y = min_y.min(pair[1]);
        max_x = max_x.max(pair[0]);
        max_y = max_y.max(pair[1]);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_distance_handles_degenerate_segment() {
        let p = Pos2::new(3.0, 4.0);
        let d = distance_to_line_segment(p, Pos2::ZERO, Pos2::ZERO);
        assert!((d - 5.0).abs() < 1e-6);
    }

    #[test]
    fn flat_points_bounds_covers_all_pairs() {
        let bounds = flat_points_bounds(&[10.0, 20.0, 50.0, 5.0], 0.0);
        assert_eq!(bounds.min, Pos2::new(10.0, 5.0));
        assert_eq!(bounds.max, Pos2::new(50.0, 20.0));
    }
}
