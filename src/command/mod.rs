mod commands;
mod history;

pub use commands::{Command, ElementPatch, NodeTransform, ReorderAction};
pub use history::History;
