//! # Undo/Redo History
//!
//! A linear log of tree snapshots with a cursor.
//!
//! ## Design
//!
//! - Each entry is a deep copy of the forest as it was right before the
//!   labelled action ran
//! - A push after an undo discards everything after the cursor
//! - The log is capped; the oldest entry is evicted once the cap is reached
//! - Entries are never aliased with the live tree
//!
//! ## Example
//!
//! ```rust
//! use blockcraft_editor::History;
//! use blockcraft_model::{Block, BlockKind};
//!
//! let mut history = History::new();
//! history.push(&[], "Add text");
//! history.push(&[Block::new("t", BlockKind::Text)], "Delete block");
//!
//! let previous = history.undo().map(|entry| entry.blocks.len());
//! assert_eq!(previous, Some(0));
//! assert!(history.can_redo());
//! ```

use blockcraft_model::Block;
use chrono::{DateTime, Utc};

/// Maximum number of retained snapshots
pub const DEFAULT_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub blocks: Vec<Block>,
    /// Action that was applied on top of this snapshot
    pub label: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the tree as it was before the action named `label`.
    pub fn push(&mut self, prior: &[Block], label: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry {
            blocks: prior.to_vec(),
            label: label.into(),
            timestamp: Utc::now(),
        });

        if self.entries.len() > self.capacity {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Step back; returns the snapshot now at the cursor
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the snapshot now at the cursor
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Drop the redo branch and re-label the entry at the cursor. Used when a
    /// new edit starts from a snapshot that is already recorded.
    pub fn branch(&mut self, label: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        if let Some(entry) = self.entries.get_mut(self.cursor) {
            entry.label = label.into();
        }
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Label of the action an undo from the cursor would revert
    pub fn undo_label(&self) -> Option<&str> {
        if !self.can_undo() {
            return None;
        }
        self.entries
            .get(self.cursor - 1)
            .map(|entry| entry.label.as_str())
    }

    /// Label of the action a redo from the cursor would re-apply
    pub fn redo_label(&self) -> Option<&str> {
        if !self.can_redo() {
            return None;
        }
        self.current().map(|entry| entry.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_model::BlockKind;

    fn tree(ids: &[&str]) -> Vec<Block> {
        ids.iter().map(|id| Block::new(*id, BlockKind::Text)).collect()
    }

    #[test]
    fn test_history_creation() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_push_undo_redo() {
        let mut history = History::new();
        history.push(&tree(&[]), "first");
        history.push(&tree(&["a"]), "second");
        history.push(&tree(&["a", "b"]), "third");

        assert_eq!(history.cursor(), 2);
        assert_eq!(history.undo().map(|e| e.blocks.len()), Some(1));
        assert_eq!(history.undo().map(|e| e.blocks.len()), Some(0));
        assert!(history.undo().is_none());

        assert_eq!(history.redo().map(|e| e.blocks.len()), Some(1));
        assert_eq!(history.redo().map(|e| e.blocks.len()), Some(2));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_push_after_undo_discards_redo() {
        let mut history = History::new();
        history.push(&tree(&[]), "one");
        history.push(&tree(&["a"]), "two");
        history.push(&tree(&["a", "b"]), "three");

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.push(&tree(&["z"]), "four");
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current().map(|e| e.label.as_str()), Some("four"));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = History::with_capacity(3);
        for i in 0..5 {
            history.push(&tree(&[]), format!("edit {}", i));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current().map(|e| e.label.as_str()), Some("edit 4"));

        history.undo();
        history.undo();
        assert!(!history.can_undo());
        assert_eq!(history.current().map(|e| e.label.as_str()), Some("edit 2"));
    }

    #[test]
    fn test_branch_relabels_and_truncates() {
        let mut history = History::new();
        history.push(&tree(&[]), "one");
        history.push(&tree(&["a"]), "two");
        history.undo();

        history.branch("replacement");
        assert_eq!(history.len(), 1);
        assert!(!history.can_redo());
        assert_eq!(history.current().map(|e| e.label.as_str()), Some("replacement"));
    }

    #[test]
    fn test_labels() {
        let mut history = History::new();
        history.push(&tree(&[]), "Add text");
        history.push(&tree(&["a"]), "Move block");
        assert_eq!(history.undo_label(), Some("Add text"));
        assert_eq!(history.redo_label(), None);

        history.undo();
        assert_eq!(history.undo_label(), None);
        assert_eq!(history.redo_label(), Some("Add text"));
    }
}
