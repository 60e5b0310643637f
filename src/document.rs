use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementId};

pub const DEFAULT_CANVAS_WIDTH: f32 = 620.0;
pub const DEFAULT_CANVAS_HEIGHT: f32 = 750.0;

fn default_canvas_width() -> f32 {
    DEFAULT_CANVAS_WIDTH
}

fn default_canvas_height() -> f32 {
    DEFAULT_CANVAS_HEIGHT
}

/// One design: an ordered element list plus canvas metadata.
///
/// Element order is the sole z-order authority; later elements render on top.
/// All mutation goes through [`crate::command::Command`] application on the
/// editor model so that history capture is never bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default)]
    background_src: Option<String>,
    #[serde(default = "default_canvas_width")]
    width: f32,
    #[serde(default = "default_canvas_height")]
    height: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Blank canvas at the standard card size.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }

    pub fn with_size(width: f32, height: f32) -> Self {
        Self {
            elements: Vec::new(),
            background_src: None,
            width,
            height,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Swap in a new element sequence wholesale (undo/redo, template load).
    pub fn replace_elements(&mut self, next: Vec<Element>) {
        self.elements = next;
    }

    pub fn find(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub(crate) fn find_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub(crate) fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub(crate) fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.elements
    }

    pub fn background_src(&self) -> Option<&str> {
        self.background_src.as_deref()
    }

    pub(crate) fn set_background_src(&mut self, src: Option<String>) {
        self.background_src = src;
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}
