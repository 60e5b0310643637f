//! Point-in-shape queries in document space.
//!
//! This is the engine's default answer to the renderer's "topmost hit" query.
//! A rendering backend with pixel-accurate picking may substitute its own
//! result and hand the id to the editor model instead.

use egui::{Pos2, Rect, Vec2};

use crate::document::Document;
use crate::element::{
    distance_to_line_segment, flat_points_bounds, Element, ElementId, Shape, TextShape,
    LINE_HIT_PADDING,
};

/// Topmost visible, unlocked element containing `point`, walking the element
/// list from the top of the z-order down.
pub fn topmost_hit(document: &Document, point: Pos2) -> Option<ElementId> {
    document
        .elements()
        .iter()
        .rev()
        .find(|el| el.visible && !el.locked && hit_test(el, point))
        .map(|el| el.id)
}

/// Whether `point` (document space) falls inside the element.
pub fn hit_test(element: &Element, point: Pos2) -> bool {
    // Undo the element's rotation so each shape test runs axis-aligned.
    let local = to_local(element, point);

    match &element.shape {
        Shape::Text(text) => {
            let size = text_box_size(text);
            Rect::from_min_size(Pos2::new(element.x, element.y), size).contains(local)
        }
        Shape::Rect(rect) => Rect::from_min_size(
            Pos2::new(element.x, element.y),
            Vec2::new(rect.width, rect.height),
        )
        .contains(local),
        Shape::Image(image) => Rect::from_min_size(
            Pos2::new(element.x, element.y),
            Vec2::new(image.width, image.height),
        )
        .contains(local),
        Shape::Circle(circle) => center_distance(element, local) <= circle.radius,
        // Triangle and star approximate to their circumscribed circle; good
        // enough for pointer picking at canvas scale.
        Shape::Triangle(triangle) => center_distance(element, local) <= triangle.radius,
        Shape::Star(star) => center_distance(element, local) <= star.outer_radius,
        Shape::Line(line) => {
            polyline_hit(&line.points, element, local, line.stroke_width)
        }
        Shape::Arrow(arrow) => {
            polyline_hit(&arrow.points, element, local, arrow.stroke_width)
        }
    }
}

/// Axis-aligned bounds of an element, ignoring rotation. Used by layer
/// panels and by the text-editing overlay to place itself.
pub fn element_bounds(element: &Element) -> Rect {
    match &element.shape {
        Shape::Text(text) => {
            Rect::from_min_size(Pos2::new(element.x, element.y), text_box_size(text))
        }
        Shape::Rect(rect) => Rect::from_min_size(
            Pos2::new(element.x, element.y),
            Vec2::new(rect.width, rect.height),
        ),
        Shape::Image(image) => Rect::from_min_size(
            Pos2::new(element.x, element.y),
            Vec2::new(image.width, image.height),
        ),
        Shape::Circle(circle) => Rect::from_center_size(
            Pos2::new(element.x, element.y),
            Vec2::splat(circle.radius * 2.0),
        ),
        Shape::Triangle(triangle) => Rect::from_center_size(
            Pos2::new(element.x, element.y),
            Vec2::splat(triangle.radius * 2.0),
        ),
        Shape::Star(star) => Rect::from_center_size(
            Pos2::new(element.x, element.y),
            Vec2::splat(star.outer_radius * 2.0),
        ),
        Shape::Line(line) => {
            flat_points_bounds(&line.points, 0.0).translate(Vec2::new(element.x, element.y))
        }
        Shape::Arrow(arrow) => {
            flat_points_bounds(&arrow.points, 0.0).translate(Vec2::new(element.x, element.y))
        }
    }
}

/// Rotate `point` by the inverse of the element's rotation about its anchor.
fn to_local(element: &Element, point: Pos2) -> Pos2 {
    if element.rotation == 0.0 {
        return point;
    }
    let anchor = Pos2::new(element.x, element.y);
    let angle = -element.rotation.to_radians();
    let (sin, cos) = angle.sin_cos();
    let v = point - anchor;
    anchor + Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

fn center_distance(element: &Element, local: Pos2) -> f32 {
    (local - Pos2::new(element.x, element.y)).length()
}

fn polyline_hit(points: &[f32], element: &Element, local: Pos2, stroke_width: f32) -> bool {
    let offset = Vec2::new(element.x, element.y);
    let threshold = stroke_width / 2.0 + LINE_HIT_PADDING;
    points
        .chunks_exact(2)
        .map(|pair| Pos2::new(pair[0], pair[1]) + offset)
        .collect::<Vec<_>>()
        .windows(2)
        .any(|seg| distance_to_line_segment(local, seg[0], seg[1]) <= threshold)
}

/// Rough text extent from font metrics alone; the renderer owns the real
/// layout, this only needs to be close enough for picking.
fn text_box_size(text: &TextShape) -> Vec2 {
    let mut widest = 0usize;
    let mut lines = 0usize;
    for line in text.text.lines() {
        widest = widest.max(line.chars().count());
        lines += 1;
    }
    lines = lines.max(1);
    let char_width = text.font_size * 0.6 + text.letter_spacing;
    Vec2::new(
        (widest as f32 * char_width).max(text.font_size * 0.6),
        lines as f32 * text.font_size * text.line_height,
    )
}
