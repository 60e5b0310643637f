mod common;
pub mod factory;

pub use common::{
    LINE_HIT_PADDING, MIN_RADIUS, MIN_RECT_SIZE, MIN_STAR_INNER_RADIUS, MIN_STAR_OUTER_RADIUS,
};
pub(crate) use common::{distance_to_line_segment, flat_points_bounds};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use egui::Color32;
use serde::{Deserialize, Serialize};

/// Unique identifier for a document element. Ids are never reused within a
/// process; freshly loaded documents keep the ids they were saved with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementId(u64);

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Allocate a fresh id from the process-wide counter.
    pub fn next() -> Self {
        ElementId(NEXT_ELEMENT_ID.fetch_add(1, Ordering::SeqCst))
    }

    pub fn raw(self) -> u64 {
        self.0
    }

    /// Advance the counter past ids seen in a loaded document so fresh ids
    /// never collide with them.
    pub(crate) fn reserve_through(raw: u64) {
        NEXT_ELEMENT_ID.fetch_max(raw + 1, Ordering::SeqCst);
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One graphical primitive placed on the canvas.
///
/// Shared placement and style attributes live on the struct; everything
/// kind-specific lives in [`Shape`]. Position `(x, y)` is the top-left corner
/// for text, rect and image, and the center for circle, triangle and star.
/// Line and arrow carry their own point list and use `(x, y)` as a drag
/// offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    /// Rotation in degrees about the element's anchor point.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Locked elements cannot be selected, dragged or transformed through
    /// pointer interaction. Visibility toggling still applies.
    #[serde(default)]
    pub locked: bool,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Element {
    /// The element kind as a string, e.g. for layer panels and logs.
    pub fn kind(&self) -> &'static str {
        self.shape.kind()
    }

    /// True for kinds whose `(x, y)` is the shape center rather than the
    /// top-left corner.
    pub fn is_center_anchored(&self) -> bool {
        matches!(
            self.shape,
            Shape::Circle(_) | Shape::Triangle(_) | Shape::Star(_)
        )
    }
}

/// Closed set of element kinds. Consumers dispatch on the variant; there is
/// deliberately no open "bag of optional fields".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Text(TextShape),
    Rect(RectShape),
    Circle(CircleShape),
    Line(LineShape),
    Arrow(ArrowShape),
    Triangle(TriangleShape),
    Star(StarShape),
    Image(ImageShape),
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Text(_) => "text",
            Shape::Rect(_) => "rect",
            Shape::Circle(_) => "circle",
            Shape::Line(_) => "line",
            Shape::Arrow(_) => "arrow",
            Shape::Triangle(_) => "triangle",
            Shape::Star(_) => "star",
            Shape::Image(_) => "image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShape {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_black")]
    pub fill: Color32,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub is_italic: bool,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default)]
    pub letter_spacing: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default)]
    pub stroke: Option<Color32>,
    #[serde(default)]
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectShape {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub corner_radius: f32,
    #[serde(default = "default_black")]
    pub fill: Color32,
    #[serde(default)]
    pub stroke: Option<Color32>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleShape {
    pub radius: f32,
    #[serde(default = "default_black")]
    pub fill: Color32,
    #[serde(default)]
    pub stroke: Option<Color32>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

/// Flat `[x0, y0, x1, y1, ..]` point list, at least two pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineShape {
    pub points: Vec<f32>,
    #[serde(default = "default_black")]
    pub stroke: Color32,
    #[serde(default = "default_line_stroke_width")]
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowShape {
    pub points: Vec<f32>,
    #[serde(default = "default_black")]
    pub stroke: Color32,
    #[serde(default = "default_line_stroke_width")]
    pub stroke_width: f32,
    #[serde(default = "default_pointer_size")]
    pub pointer_length: f32,
    #[serde(default = "default_pointer_size")]
    pub pointer_width: f32,
}

/// Regular polygon; the editor only ever creates three-sided ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriangleShape {
    pub radius: f32,
    #[serde(default = "default_triangle_sides")]
    pub sides: u32,
    #[serde(default = "default_black")]
    pub fill: Color32,
    #[serde(default)]
    pub stroke: Option<Color32>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarShape {
    #[serde(default = "default_star_points")]
    pub num_points: u32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    #[serde(default = "default_black")]
    pub fill: Color32,
    #[serde(default)]
    pub stroke: Option<Color32>,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f32,
}

/// Raster image reference. A missing `image_src` renders as a placeholder
/// box; natural aspect is only honored at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageShape {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub image_src: Option<String>,
}

fn default_opacity() -> f32 {
    1.0
}

fn default_visible() -> bool {
    true
}

fn default_font_size() -> f32 {
    24.0
}

fn default_font_family() -> String {
    "Arial".to_owned()
}

fn default_black() -> Color32 {
    Color32::BLACK
}

fn default_line_height() -> f32 {
    1.2
}

fn default_stroke_width() -> f32 {
    1.0
}

fn default_line_stroke_width() -> f32 {
    3.0
}

fn default_pointer_size() -> f32 {
    12.0
}

fn default_triangle_sides() -> u32 {
    3
}

fn default_star_points() -> u32 {
    5
}
