use egui::Pos2;

use crate::element::{factory, Element};

/// Shape-placement tools: pick one from the toolbar, then click the canvas
/// to drop the shape at that point. Image import goes through
/// [`crate::import::Importer`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacingTool {
    Text,
    Rect,
    Circle,
    Triangle,
    Star,
    Line,
    Arrow,
}

impl PlacingTool {
    /// Build the tool's element at the clicked document-space point, with
    /// the factory defaults for everything else.
    pub fn create_at(self, at: Pos2) -> Element {
        match self {
            PlacingTool::Text => factory::create_text(at),
            PlacingTool::Rect => factory::create_rect(at),
            PlacingTool::Circle => factory::create_circle(at),
            PlacingTool::Triangle => factory::create_triangle(at),
            PlacingTool::Star => factory::create_star(at),
            PlacingTool::Line => factory::create_line(at),
            PlacingTool::Arrow => factory::create_arrow(at),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlacingTool::Text => "text",
            PlacingTool::Rect => "rectangle",
            PlacingTool::Circle => "circle",
            PlacingTool::Triangle => "triangle",
            PlacingTool::Star => "star",
            PlacingTool::Line => "line",
            PlacingTool::Arrow => "arrow",
        }
    }
}
