use egui::Pos2;

use crate::command::{Command, History, ReorderAction};
use crate::document::Document;
use crate::element::ElementId;
use crate::geometry;
use crate::selection::Selection;
use crate::state::persistence::StorageError;
use crate::text_edit::InlineTextEditor;
use crate::tools::PlacingTool;

/// Fire-and-forget persistence hook, invoked with the full document after
/// every successful mutation. Failures are logged and never block editing.
pub type SaveHook = Box<dyn FnMut(&Document) -> Result<(), StorageError>>;

/// The owning editor state: document, selection, history, inline text
/// editing and the shape-placement flow.
///
/// All mutation funnels through [`EditorModel::apply`] so that history
/// capture and the persistence hook are never bypassed. Interactive gestures
/// keep their per-frame geometry in transient UI state and commit here
/// exactly once, at gesture end, which keeps undo granularity at one
/// user-visible action.
pub struct EditorModel {
    document: Document,
    selection: Selection,
    history: History,
    text_editor: InlineTextEditor,
    placing: Option<PlacingTool>,
    save_hook: Option<SaveHook>,
}

impl Default for EditorModel {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorModel {
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Start from a template or stored design.
    pub fn with_document(document: Document) -> Self {
        for element in document.elements() {
            ElementId::reserve_through(element.id.raw());
        }
        Self {
            document,
            selection: Selection::new(),
            history: History::new(),
            text_editor: InlineTextEditor::new(),
            placing: None,
            save_hook: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn text_editor(&self) -> &InlineTextEditor {
        &self.text_editor
    }

    /// Attach the external persistence collaborator.
    pub fn set_save_hook(&mut self, hook: SaveHook) {
        self.save_hook = Some(hook);
    }

    /// Apply a mutating command. The pre-mutation element sequence is
    /// captured for undo only when the command actually changes something;
    /// no-ops (missing ids, boundary reorders) leave history untouched.
    pub fn apply(&mut self, command: Command) -> bool {
        let snapshot = self.document.elements().to_vec();
        let changed = command.execute(&mut self.document, &mut self.selection);
        if changed {
            self.history.record(snapshot);
            self.run_save_hook();
        }
        changed
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.document.elements()) {
            Some(previous) => {
                self.document.replace_elements(previous);
                self.selection.clear();
                self.run_save_hook();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.document.elements()) {
            Some(next) => {
                self.document.replace_elements(next);
                self.selection.clear();
                self.run_save_hook();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Pointer-down in document space: place a pending shape, or resolve the
    /// hit and update the selection. Empty-canvas clicks clear it.
    pub fn pointer_down(&mut self, point: Pos2) {
        if let Some(tool) = self.placing.take() {
            self.apply(Command::Add(tool.create_at(point)));
            return;
        }
        self.select_hit(geometry::topmost_hit(&self.document, point));
    }

    /// Feed a hit-test result (from the default tester or an external
    /// renderer's picking). Locked and unknown elements never become
    /// selected this way.
    pub fn select_hit(&mut self, hit: Option<ElementId>) {
        match hit {
            Some(id) => {
                let selectable = self
                    .document
                    .find(id)
                    .is_some_and(|el| el.visible && !el.locked);
                if selectable {
                    self.selection.set(id);
                }
            }
            None => self.selection.clear(),
        }
    }

    /// Programmatic selection; not subject to the locked-element rule.
    pub fn select(&mut self, id: ElementId) {
        if self.document.contains(id) {
            self.selection.set(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Multi-select extension point; unknown ids are dropped. Only bulk
    /// delete currently honors the set.
    pub fn set_multi_selection(&mut self, ids: Vec<ElementId>) {
        let known: Vec<ElementId> = ids
            .into_iter()
            .filter(|id| self.document.contains(*id))
            .collect();
        self.selection.set_multi(known);
    }

    // --- placement flow ------------------------------------------------

    pub fn begin_placing(&mut self, tool: PlacingTool) {
        self.placing = Some(tool);
    }

    pub fn cancel_placing(&mut self) {
        self.placing = None;
    }

    pub fn placing(&self) -> Option<PlacingTool> {
        self.placing
    }

    // --- selection-targeted conveniences -------------------------------

    /// Delete the multi-select set, or the active element, in one step.
    pub fn delete_selected(&mut self) -> bool {
        let ids = self.selection.targets();
        if ids.is_empty() {
            return false;
        }
        self.apply(Command::Delete { ids })
    }

    pub fn duplicate_selected(&mut self) -> bool {
        match self.selection.active() {
            Some(id) => self.apply(Command::Duplicate { id }),
            None => false,
        }
    }

    pub fn reorder_selected(&mut self, action: ReorderAction) -> bool {
        match self.selection.active() {
            Some(id) => self.apply(Command::Reorder { id, action }),
            None => false,
        }
    }

    // --- inline text editing -------------------------------------------

    /// Double-activate on a text element. Entering edit mode selects the
    /// element; the UI hides its transform handles while editing.
    pub fn begin_text_edit(&mut self, id: ElementId, screen_pos: Pos2) -> bool {
        if self.text_editor.begin(&self.document, id, screen_pos) {
            self.selection.set(id);
            true
        } else {
            false
        }
    }

    pub fn set_text_draft(&mut self, draft: impl Into<String>) {
        self.text_editor.set_draft(draft);
    }

    /// Write the draft into the element as a single history step.
    pub fn commit_text_edit(&mut self) -> bool {
        match self.text_editor.commit() {
            Some(command) => self.apply(command),
            None => false,
        }
    }

    pub fn cancel_text_edit(&mut self) {
        self.text_editor.cancel();
    }

    // --- document-level operations -------------------------------------

    /// Background changes are not versioned in history, matching the
    /// snapshot model that records elements only.
    pub fn set_background(&mut self, src: Option<String>) {
        self.document.set_background_src(src);
        self.run_save_hook();
    }

    /// Replace the whole document (template load, design restore). Clears
    /// selection, history and any in-progress text edit.
    pub fn load_document(&mut self, document: Document) {
        for element in document.elements() {
            ElementId::reserve_through(element.id.raw());
        }
        self.document = document;
        self.selection.clear();
        self.history.clear();
        self.text_editor.cancel();
        self.placing = None;
    }

    fn run_save_hook(&mut self) {
        if let Some(hook) = &mut self.save_hook {
            if let Err(err) = hook(&self.document) {
                // The in-memory document stays authoritative; editing goes on.
                log::error!("autosave failed: {err}");
            }
        }
    }
}
