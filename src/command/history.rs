use crate::element::Element;

/// Snapshot-based undo/redo stacks.
///
/// Each entry is a full clone of the element sequence taken before a mutation
/// was applied, so stored snapshots are value-independent of the live
/// document. A new recording always clears the redo stack; there is no
/// branching history.
#[derive(Debug, Default)]
pub struct History {
    past: Vec<Vec<Element>>,
    future: Vec<Vec<Element>>,
    max_depth: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the undo depth; the oldest snapshot is evicted once full.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// Push the pre-mutation element sequence. Called before every mutating
    /// command is applied.
    pub fn record(&mut self, previous: Vec<Element>) {
        if let Some(cap) = self.max_depth {
            if self.past.len() >= cap {
                self.past.remove(0);
            }
        }
        self.past.push(previous);
        self.future.clear();
    }

    /// Pop the latest snapshot, stashing `current` for redo. Returns the
    /// element sequence to restore, or `None` when there is nothing to undo.
    pub fn undo(&mut self, current: &[Element]) -> Option<Vec<Element>> {
        let previous = self.past.pop()?;
        self.future.push(current.to_vec());
        Some(previous)
    }

    /// Inverse of [`History::undo`].
    pub fn redo(&mut self, current: &[Element]) -> Option<Vec<Element>> {
        let next = self.future.pop()?;
        self.past.push(current.to_vec());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }
}
