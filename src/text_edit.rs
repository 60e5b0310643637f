//! Inline text-editing overlay state.
//!
//! A two-state machine, disjoint from the selection's transform handles:
//! `Idle`, or `Editing` one text element. The UI layer triggers `begin` on a
//! double-activate gesture, feeds keystrokes into the draft, and maps
//! Enter-without-Shift / blur to [`InlineTextEditor::commit`] and Escape to
//! [`InlineTextEditor::cancel`]. Only a commit touches the document, as one
//! history step; a cancel discards the draft entirely.

use egui::Pos2;

use crate::command::{Command, ElementPatch};
use crate::document::Document;
use crate::element::{ElementId, Shape};

#[derive(Debug, Clone, PartialEq)]
enum EditState {
    Idle,
    Editing {
        id: ElementId,
        draft: String,
        screen_pos: Pos2,
    },
}

#[derive(Debug)]
pub struct InlineTextEditor {
    state: EditState,
}

impl Default for InlineTextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineTextEditor {
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
        }
    }

    /// Enter editing for an unlocked text element, seeding the draft with
    /// the current text. Returns whether the transition happened.
    pub fn begin(&mut self, document: &Document, id: ElementId, screen_pos: Pos2) -> bool {
        let Some(element) = document.find(id) else {
            return false;
        };
        if element.locked {
            return false;
        }
        let Shape::Text(text) = &element.shape else {
            return false;
        };
        self.state = EditState::Editing {
            id,
            draft: text.text.clone(),
            screen_pos,
        };
        true
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn active_id(&self) -> Option<ElementId> {
        match &self.state {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Where the UI should place its edit overlay (screen space).
    pub fn screen_pos(&self) -> Option<Pos2> {
        match &self.state {
            EditState::Editing { screen_pos, .. } => Some(*screen_pos),
            EditState::Idle => None,
        }
    }

    pub fn set_draft(&mut self, next: impl Into<String>) {
        if let EditState::Editing { draft, .. } = &mut self.state {
            *draft = next.into();
        }
    }

    /// Leave editing, yielding the patch that writes the draft back. `None`
    /// when idle.
    pub fn commit(&mut self) -> Option<Command> {
        match std::mem::replace(&mut self.state, EditState::Idle) {
            EditState::Editing { id, draft, .. } => Some(Command::Patch {
                id,
                patch: ElementPatch::text(draft),
            }),
            EditState::Idle => None,
        }
    }

    /// Discard the draft without touching the document.
    pub fn cancel(&mut self) {
        self.state = EditState::Idle;
    }
}
