use crate::element::ElementId;

/// Tracks which element is active for the properties/transform UI.
///
/// Single-select is the primary model; the multi-select set is an extension
/// point that only bulk delete currently honors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    active: Option<ElementId>,
    multi: Vec<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ElementId> {
        self.active
    }

    pub fn multi(&self) -> &[ElementId] {
        &self.multi
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.active == Some(id) || self.multi.contains(&id)
    }

    pub fn set(&mut self, id: ElementId) {
        self.active = Some(id);
        self.multi.clear();
    }

    pub fn set_multi(&mut self, ids: Vec<ElementId>) {
        self.active = ids.first().copied();
        self.multi = ids;
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.multi.clear();
    }

    /// Everything a bulk operation (delete) should target: the multi-select
    /// set when present, otherwise the active element alone.
    pub fn targets(&self) -> Vec<ElementId> {
        if !self.multi.is_empty() {
            self.multi.clone()
        } else {
            self.active.into_iter().collect()
        }
    }

    /// Drop references to elements that no longer exist.
    pub(crate) fn retain_known(&mut self, removed: &[ElementId]) {
        if let Some(active) = self.active {
            if removed.contains(&active) {
                self.active = None;
            }
        }
        self.multi.retain(|id| !removed.contains(id));
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_none() && self.multi.is_empty()
    }
}
