//! Error types for the editor

use thiserror::Error;

/// Why a structural edit left the tree untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Block cannot have children: {0}")]
    NotAContainer(String),

    #[error("Would create cycle: {block_id} cannot move into {target_id}")]
    CycleDetected { block_id: String, target_id: String },

    #[error("Duplicate block id: {0}")]
    DuplicateId(String),

    #[error("Block is not a header: {0}")]
    NotAHeader(String),

    #[error("Menu item not found: {0}")]
    MenuItemNotFound(String),

    #[error("Edit would not change the tree")]
    Unchanged,
}

/// Import/export failure. Any of these rejects the whole record.
#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project at {path}: {reason}")]
    Invalid { path: String, reason: String },
}

impl ProjectError {
    pub(crate) fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        ProjectError::Invalid {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Persistence failure. Never affects the in-memory tree.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage quota exceeded writing {key} ({needed} bytes needed, {quota} available)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record {key}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: ProjectError,
    },

    #[error("Could not serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    /// Short message suitable for a non-fatal notice
    pub fn user_message(&self) -> String {
        match self {
            StorageError::QuotaExceeded { .. } => {
                "Storage is full; free some space and save again.".to_string()
            }
            StorageError::Io(_) => "Could not write to storage.".to_string(),
            StorageError::Corrupt { key, .. } => format!("Saved project {} is unreadable.", key),
            StorageError::Serialize(_) => "Project could not be serialized.".to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
