//! # Mutations
//!
//! Serializable, intent-preserving edits. Each variant maps onto one pure
//! tree operation in [`crate::tree`] and carries the label its history entry
//! is recorded under.
//!
//! ## Semantics
//!
//! ### Move
//! - Detach, then attach; a block is never referenced twice
//! - Fails if the target parent is missing or is not a container
//! - Fails if the target is the moving block or one of its descendants
//! - Dropping a block on its own slot is not an edit
//!
//! ### UpdateProperties
//! - Shallow merge, last write wins per property
//! - No deep merge of nested records (gradient, filters, ...)
//!
//! ### RemoveBlock
//! - Removes the block and all of its descendants

use crate::errors::MutationError;
use crate::tree::{self, MenuItemPatch};
use blockcraft_model::{Block, MenuItem, Properties};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a block at `index`, among the roots when `parent_id` is `None`
    InsertBlock {
        parent_id: Option<String>,
        index: usize,
        block: Block,
    },

    RemoveBlock {
        block_id: String,
    },

    /// Move a block (and its subtree) to a new parent at index
    MoveBlock {
        block_id: String,
        target_parent_id: Option<String>,
        index: usize,
    },

    UpdateProperties {
        block_id: String,
        properties: Properties,
    },

    AddMenuItem {
        header_id: String,
        item: MenuItem,
    },

    UpdateMenuItem {
        header_id: String,
        item_id: String,
        patch: MenuItemPatch,
    },

    RemoveMenuItem {
        header_id: String,
        item_id: String,
    },
}

impl Mutation {
    /// Produce the edited forest, or the reason nothing would change
    pub fn apply(&self, blocks: &[Block]) -> Result<Vec<Block>, MutationError> {
        match self {
            Mutation::InsertBlock {
                parent_id,
                index,
                block,
            } => tree::insert(blocks, parent_id.as_deref(), *index, block.clone()),

            Mutation::RemoveBlock { block_id } => {
                tree::remove(blocks, block_id).map(|(next, _)| next)
            }

            Mutation::MoveBlock {
                block_id,
                target_parent_id,
                index,
            } => tree::move_block(blocks, block_id, target_parent_id.as_deref(), *index),

            Mutation::UpdateProperties {
                block_id,
                properties,
            } => tree::update(blocks, block_id, properties.clone()),

            Mutation::AddMenuItem { header_id, item } => {
                tree::add_menu_item(blocks, header_id, item.clone())
            }

            Mutation::UpdateMenuItem {
                header_id,
                item_id,
                patch,
            } => tree::update_menu_item(blocks, header_id, item_id, patch.clone()),

            Mutation::RemoveMenuItem { header_id, item_id } => {
                tree::remove_menu_item(blocks, header_id, item_id)
            }
        }
    }

    /// Human-readable history label
    pub fn label(&self) -> String {
        match self {
            Mutation::InsertBlock { block, .. } => format!("Add {}", block.kind),
            Mutation::RemoveBlock { .. } => "Delete block".to_string(),
            Mutation::MoveBlock { .. } => "Move block".to_string(),
            Mutation::UpdateProperties { .. } => "Update properties".to_string(),
            Mutation::AddMenuItem { .. } => "Add menu item".to_string(),
            Mutation::UpdateMenuItem { .. } => "Update menu item".to_string(),
            Mutation::RemoveMenuItem { .. } => "Remove menu item".to_string(),
        }
    }
}

/// Outcome of a committed mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Document version after the edit
    pub version: u64,

    /// Label the history entry was recorded under
    pub label: String,
}
