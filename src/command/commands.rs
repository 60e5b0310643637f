use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::element::{
    Element, ElementId, Shape, TextAlign, MIN_RADIUS, MIN_RECT_SIZE, MIN_STAR_INNER_RADIUS,
    MIN_STAR_OUTER_RADIUS,
};
use crate::selection::Selection;

/// Offset applied to a duplicated element so the copy is visibly apart from
/// its source.
pub const DUPLICATE_OFFSET: f32 = 20.0;

/// Z-order moves. `Forward`/`Backward` swap with the immediate neighbor and
/// are no-ops at the extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderAction {
    Front,
    Back,
    Forward,
    Backward,
}

/// Final node state of an interactive move/resize/rotate gesture.
///
/// Scale factors are baked into the element's size fields when the command is
/// applied and never stored on the element itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeTransform {
    pub x: f32,
    pub y: f32,
    /// Degrees.
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl NodeTransform {
    pub fn move_to(x: f32, y: f32, rotation: f32) -> Self {
        Self {
            x,
            y,
            rotation,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Partial element update, shallow-merged into the target. Fields that do not
/// apply to the target's kind are ignored. Values are applied as given; the
/// interactive layer is responsible for clamping before committing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementPatch {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub rotation: Option<f32>,
    pub opacity: Option<f32>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,

    pub text: Option<String>,
    pub font_size: Option<f32>,
    pub font_family: Option<String>,
    pub is_bold: Option<bool>,
    pub is_italic: Option<bool>,
    pub text_align: Option<TextAlign>,
    pub letter_spacing: Option<f32>,
    pub line_height: Option<f32>,

    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
    pub stroke_width: Option<f32>,

    pub width: Option<f32>,
    pub height: Option<f32>,
    pub corner_radius: Option<f32>,
    pub radius: Option<f32>,
    pub num_points: Option<u32>,
    pub inner_radius: Option<f32>,
    pub outer_radius: Option<f32>,

    pub points: Option<Vec<f32>>,
    pub pointer_length: Option<f32>,
    pub pointer_width: Option<f32>,

    pub image_src: Option<String>,
}

impl ElementPatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    fn apply_to(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }

        match &mut element.shape {
            Shape::Text(s) => {
                if let Some(text) = &self.text {
                    s.text = text.clone();
                }
                if let Some(v) = self.font_size {
                    s.font_size = v;
                }
                if let Some(v) = &self.font_family {
                    s.font_family = v.clone();
                }
                if let Some(v) = self.is_bold {
                    s.is_bold = v;
                }
                if let Some(v) = self.is_italic {
                    s.is_italic = v;
                }
                if let Some(v) = self.text_align {
                    s.text_align = v;
                }
                if let Some(v) = self.letter_spacing {
                    s.letter_spacing = v;
                }
                if let Some(v) = self.line_height {
                    s.line_height = v;
                }
                if let Some(v) = self.fill {
                    s.fill = v;
                }
                if let Some(v) = self.stroke {
                    s.stroke = Some(v);
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Rect(s) => {
                if let Some(v) = self.width {
                    s.width = v;
                }
                if let Some(v) = self.height {
                    s.height = v;
                }
                if let Some(v) = self.corner_radius {
                    s.corner_radius = v;
                }
                if let Some(v) = self.fill {
                    s.fill = v;
                }
                if let Some(v) = self.stroke {
                    s.stroke = Some(v);
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Circle(s) => {
                if let Some(v) = self.radius {
                    s.radius = v;
                }
                if let Some(v) = self.fill {
                    s.fill = v;
                }
                if let Some(v) = self.stroke {
                    s.stroke = Some(v);
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Line(s) => {
                if let Some(v) = &self.points {
                    s.points = v.clone();
                }
                if let Some(v) = self.stroke {
                    s.stroke = v;
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Arrow(s) => {
                if let Some(v) = &self.points {
                    s.points = v.clone();
                }
                if let Some(v) = self.stroke {
                    s.stroke = v;
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
                if let Some(v) = self.pointer_length {
                    s.pointer_length = v;
                }
                if let Some(v) = self.pointer_width {
                    s.pointer_width = v;
                }
            }
            Shape::Triangle(s) => {
                if let Some(v) = self.radius {
                    s.radius = v;
                }
                if let Some(v) = self.fill {
                    s.fill = v;
                }
                if let Some(v) = self.stroke {
                    s.stroke = Some(v);
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Star(s) => {
                if let Some(v) = self.num_points {
                    s.num_points = v;
                }
                if let Some(v) = self.inner_radius {
                    s.inner_radius = v;
                }
                if let Some(v) = self.outer_radius {
                    s.outer_radius = v;
                }
                if let Some(v) = self.fill {
                    s.fill = v;
                }
                if let Some(v) = self.stroke {
                    s.stroke = Some(v);
                }
                if let Some(v) = self.stroke_width {
                    s.stroke_width = v;
                }
            }
            Shape::Image(s) => {
                if let Some(v) = self.width {
                    s.width = v;
                }
                if let Some(v) = self.height {
                    s.height = v;
                }
                if let Some(v) = &self.image_src {
                    s.image_src = Some(v.clone());
                }
            }
        }
    }
}

/// Mutations applied to the document through the editor model.
///
/// A command that resolves to a no-op (missing id, boundary reorder, empty
/// delete set) reports so and pushes no history entry. Missing ids are never
/// errors; stale references are harmless in the single-user model.
#[derive(Debug, Clone)]
pub enum Command {
    /// Append an element to the top of the z-order and select it.
    Add(Element),
    /// Shallow-merge a partial update into one element.
    Patch {
        id: ElementId,
        patch: ElementPatch,
    },
    /// Remove all listed elements in one history step.
    Delete {
        ids: Vec<ElementId>,
    },
    /// Clone an element with a fresh id, offset by (+20, +20), on top.
    Duplicate {
        id: ElementId,
    },
    /// Shuffle one element within the z-order.
    Reorder {
        id: ElementId,
        action: ReorderAction,
    },
    /// Bake the final geometry of an interactive gesture into the element.
    CommitTransform {
        id: ElementId,
        transform: NodeTransform,
    },
    /// Recolor the active element: fill for filled shapes, stroke for line
    /// and arrow, no-op for images.
    ApplyFill {
        color: Color32,
    },
}

impl Command {
    /// Apply the mutation. Returns whether anything changed.
    pub(crate) fn execute(self, document: &mut Document, selection: &mut Selection) -> bool {
        match self {
            Command::Add(element) => {
                let id = element.id;
                debug_assert!(!document.contains(id), "duplicate element id {id}");
                document.push(element);
                selection.set(id);
                true
            }
            Command::Patch { id, patch } => match document.find_mut(id) {
                Some(element) => {
                    patch.apply_to(element);
                    true
                }
                None => false,
            },
            Command::Delete { ids } => {
                let before = document.len();
                document.elements_mut().retain(|el| !ids.contains(&el.id));
                if document.len() == before {
                    return false;
                }
                selection.retain_known(&ids);
                true
            }
            Command::Duplicate { id } => {
                let Some(source) = document.find(id) else {
                    return false;
                };
                let mut copy = source.clone();
                copy.id = ElementId::next();
                copy.x += DUPLICATE_OFFSET;
                copy.y += DUPLICATE_OFFSET;
                let copy_id = copy.id;
                document.push(copy);
                selection.set(copy_id);
                true
            }
            Command::Reorder { id, action } => reorder(document, id, action),
            Command::CommitTransform { id, transform } => match document.find_mut(id) {
                Some(element) => {
                    commit_transform(element, transform);
                    true
                }
                None => false,
            },
            Command::ApplyFill { color } => {
                let Some(id) = selection.active() else {
                    return false;
                };
                let Some(element) = document.find_mut(id) else {
                    return false;
                };
                match &mut element.shape {
                    Shape::Text(s) => s.fill = color,
                    Shape::Rect(s) => s.fill = color,
                    Shape::Circle(s) => s.fill = color,
                    Shape::Triangle(s) => s.fill = color,
                    Shape::Star(s) => s.fill = color,
                    Shape::Line(s) => s.stroke = color,
                    Shape::Arrow(s) => s.stroke = color,
                    Shape::Image(_) => return false,
                }
                true
            }
        }
    }
}

fn reorder(document: &mut Document, id: ElementId, action: ReorderAction) -> bool {
    let Some(index) = document.index_of(id) else {
        return false;
    };
    let last = document.len() - 1;
    let elements = document.elements_mut();
    match action {
        ReorderAction::Front => {
            if index == last {
                return false;
            }
            let element = elements.remove(index);
            elements.push(element);
        }
        ReorderAction::Back => {
            if index == 0 {
                return false;
            }
            let element = elements.remove(index);
            elements.insert(0, element);
        }
        ReorderAction::Forward => {
            if index == last {
                return false;
            }
            elements.swap(index, index + 1);
        }
        ReorderAction::Backward => {
            if index == 0 {
                return false;
            }
            elements.swap(index, index - 1);
        }
    }
    true
}

/// Per-kind geometry rules for the end of a resize/rotate gesture. Position
/// and rotation always come from the final node transform; scale factors are
/// folded into the size fields, floored so shapes stay grabbable.
fn commit_transform(element: &mut Element, t: NodeTransform) {
    element.x = t.x;
    element.y = t.y;
    element.rotation = t.rotation;

    match &mut element.shape {
        // Font size is the single size parameter; only vertical scale counts.
        Shape::Text(s) => {
            s.font_size *= t.scale_y;
        }
        Shape::Rect(s) => {
            s.width = (s.width * t.scale_x).max(MIN_RECT_SIZE);
            s.height = (s.height * t.scale_y).max(MIN_RECT_SIZE);
        }
        Shape::Image(s) => {
            s.width = (s.width * t.scale_x).max(MIN_RECT_SIZE);
            s.height = (s.height * t.scale_y).max(MIN_RECT_SIZE);
        }
        // Uniform scale assumed for radial shapes; the x factor wins.
        Shape::Circle(s) => {
            s.radius = (s.radius * t.scale_x).max(MIN_RADIUS);
        }
        Shape::Triangle(s) => {
            s.radius = (s.radius * t.scale_x).max(MIN_RADIUS);
        }
        Shape::Star(s) => {
            s.inner_radius = (s.inner_radius * t.scale_x).max(MIN_STAR_INNER_RADIUS);
            s.outer_radius = (s.outer_radius * t.scale_y).max(MIN_STAR_OUTER_RADIUS);
        }
        // Lines and arrows are resized by editing their points, not by the
        // transform handles; only position and rotation carry over.
        Shape::Line(_) | Shape::Arrow(_) => {}
    }
}
