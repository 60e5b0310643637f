#![warn(clippy::all, rust_2018_idioms)]

//! Headless scene-graph editing engine for invitation card designs: the
//! document model, mutation commands, undo/redo history, selection and
//! hit-testing, viewport math, inline text editing, and the import/export
//! boundaries. Rendering, raster encoding and the surrounding application
//! shell are external collaborators.

pub mod command;
pub mod document;
pub mod element;
pub mod export;
pub mod geometry;
pub mod import;
pub mod selection;
pub mod state;
pub mod text_edit;
pub mod tools;
pub mod viewport;
mod util;

pub use command::{Command, ElementPatch, History, NodeTransform, ReorderAction};
pub use document::Document;
pub use element::{Element, ElementId, Shape, TextAlign};
pub use export::{ExportFormat, ExportOptions, Rasterizer};
pub use import::Importer;
pub use selection::Selection;
pub use state::{DesignStore, EditorModel};
pub use text_edit::InlineTextEditor;
pub use tools::PlacingTool;
pub use viewport::{PinchTracker, Viewport};
