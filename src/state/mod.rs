mod editor_model;
pub mod persistence;

pub use editor_model::{EditorModel, SaveHook};
pub use persistence::{DesignStore, SavedDesign, StorageError};
