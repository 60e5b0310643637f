//! Creation helpers for new elements.
//!
//! Every factory assigns a fresh [`ElementId`] and fills each kind-specific
//! field with its documented default. Out-of-range values are never rejected
//! here; callers clamp at transform-commit time instead.

use egui::{Color32, Pos2};

use super::{
    ArrowShape, CircleShape, Element, ElementId, ImageShape, LineShape, RectShape, Shape,
    StarShape, TextAlign, TextShape, TriangleShape,
};

// Default fills for new shapes (the editor's neutral gray ramp).
const RECT_FILL: Color32 = Color32::from_rgb(0x4b, 0x56, 0x63);
const CIRCLE_FILL: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
const TRIANGLE_FILL: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
const STAR_FILL: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8);

fn base(at: Pos2, shape: Shape) -> Element {
    Element {
        id: ElementId::next(),
        x: at.x,
        y: at.y,
        rotation: 0.0,
        opacity: 1.0,
        visible: true,
        locked: false,
        shape,
    }
}

/// New 24px Arial "New Text", black, left aligned.
pub fn create_text(at: Pos2) -> Element {
    base(
        at,
        Shape::Text(TextShape {
            text: "New Text".to_owned(),
            font_size: 24.0,
            font_family: "Arial".to_owned(),
            fill: Color32::BLACK,
            is_bold: false,
            is_italic: false,
            text_align: TextAlign::Left,
            letter_spacing: 0.0,
            line_height: 1.2,
            stroke: None,
            stroke_width: 0.0,
        }),
    )
}

/// New 120x80 gray rectangle with a slight corner radius.
pub fn create_rect(at: Pos2) -> Element {
    base(
        at,
        Shape::Rect(RectShape {
            width: 120.0,
            height: 80.0,
            corner_radius: 4.0,
            fill: RECT_FILL,
            stroke: Some(Color32::BLACK),
            stroke_width: 1.0,
        }),
    )
}

pub fn create_circle(at: Pos2) -> Element {
    base(
        at,
        Shape::Circle(CircleShape {
            radius: 50.0,
            fill: CIRCLE_FILL,
            stroke: Some(Color32::BLACK),
            stroke_width: 1.0,
        }),
    )
}

/// Diagonal line starting at `at`.
pub fn create_line(at: Pos2) -> Element {
    base(
        Pos2::ZERO,
        Shape::Line(LineShape {
            points: vec![at.x, at.y, at.x + 100.0, at.y + 100.0],
            stroke: Color32::BLACK,
            stroke_width: 3.0,
        }),
    )
}

/// Horizontal arrow starting at `at`.
pub fn create_arrow(at: Pos2) -> Element {
    base(
        Pos2::ZERO,
        Shape::Arrow(ArrowShape {
            points: vec![at.x, at.y, at.x + 150.0, at.y],
            stroke: Color32::BLACK,
            stroke_width: 3.0,
            pointer_length: 12.0,
            pointer_width: 12.0,
        }),
    )
}

pub fn create_triangle(at: Pos2) -> Element {
    base(
        at,
        Shape::Triangle(TriangleShape {
            radius: 60.0,
            sides: 3,
            fill: TRIANGLE_FILL,
            stroke: Some(Color32::BLACK),
            stroke_width: 1.0,
        }),
    )
}

pub fn create_star(at: Pos2) -> Element {
    base(
        at,
        Shape::Star(StarShape {
            num_points: 5,
            inner_radius: 20.0,
            outer_radius: 40.0,
            fill: STAR_FILL,
            stroke: Some(Color32::BLACK),
            stroke_width: 1.0,
        }),
    )
}

/// New image element at its natural pixel size. `image_src` may be absent
/// while a load is pending; the renderer shows a placeholder box.
pub fn create_image(at: Pos2, width: f32, height: f32, image_src: Option<String>) -> Element {
    base(
        at,
        Shape::Image(ImageShape {
            width,
            height,
            image_src,
        }),
    )
}

/// Stickers are plain text elements carrying an emoji glyph.
pub fn create_sticker(at: Pos2, emoji: &str) -> Element {
    base(
        at,
        Shape::Text(TextShape {
            text: emoji.to_owned(),
            font_size: 48.0,
            font_family: "Arial".to_owned(),
            fill: Color32::BLACK,
            is_bold: false,
            is_italic: false,
            text_align: TextAlign::Center,
            letter_spacing: 0.0,
            line_height: 1.2,
            stroke: None,
            stroke_width: 0.0,
        }),
    )
}
