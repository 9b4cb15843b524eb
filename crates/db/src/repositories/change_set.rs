//! Staged writes for [`super::CampRepository::save_changes`].

use crate::models::camp::Camp;

/// A single staged write.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// Insert a new camp. Its `id` is ignored; the store assigns one.
    Add(Camp),
    /// Overwrite the stored camp with the same `id`.
    Modify(Camp),
    /// Remove the stored camp with the same `id` (and its talks).
    Delete(Camp),
}

/// An ordered unit of work.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an insert.
    pub fn add(&mut self, camp: Camp) -> &mut Self {
        self.changes.push(Change::Add(camp));
        self
    }

    /// Stage an in-place update.
    pub fn modify(&mut self, camp: Camp) -> &mut Self {
        self.changes.push(Change::Modify(camp));
        self
    }

    /// Stage a deletion.
    pub fn delete(&mut self, camp: Camp) -> &mut Self {
        self.changes.push(Change::Delete(camp));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Consume the set, yielding changes in the order they were staged.
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}
