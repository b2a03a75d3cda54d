//! # Blockcraft Editor
//!
//! Block-tree editing engine for Blockcraft pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks, properties, responsive values│
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Pure tree operations (insert/move/...)   │
//! │  - Snapshot undo/redo history               │
//! │  - Project records, storage, auto-save      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html / compiler-css: tree → text   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The block tree is the source of truth**: markup, stylesheet and
//!    saved records are derived views
//! 2. **Pure tree operations**: every edit borrows the current forest and
//!    returns a new one, or an error meaning "nothing changed"
//! 3. **One history entry per edit**: no-op edits record nothing
//! 4. **Persistence failures are notices**: they never roll back edits
//!
//! ## Usage
//!
//! ```rust
//! use blockcraft_editor::Document;
//! use blockcraft_model::BlockKind;
//!
//! let mut doc = Document::new("Landing page");
//! let section = doc.add_block(BlockKind::Container, None, None)?;
//! doc.add_block(BlockKind::Heading, Some(section.as_str()), None)?;
//!
//! let code = doc.generate_code();
//! assert!(code.markup.contains("<h1 class=\"heading\">New Heading</h1>"));
//!
//! doc.undo();
//! assert!(doc.find(&section).unwrap().children().is_empty());
//! # Ok::<(), blockcraft_editor::MutationError>(())
//! ```

mod autosave;
mod codegen;
mod document;
mod errors;
mod history;
mod mutations;
mod project;
mod storage;
pub mod tree;

pub use autosave::{AutoSave, AutoSaveConfig, AutoSaveNotice, AutoSaveTrigger};
pub use codegen::{generate_code, generate_code_with_options, CodegenOptions, GeneratedCode};
pub use document::{Document, LOAD_PROJECT_LABEL};
pub use errors::{EditorError, MutationError, ProjectError, StorageError};
pub use history::{History, HistoryEntry, DEFAULT_CAPACITY};
pub use mutations::{Mutation, MutationResult};
pub use project::{
    load_project_from_json, load_project_from_value, sanitize_filename, save_project_to_record,
    validate_block, ProjectMetadata, ProjectRecord, SaveOptions, FORMAT_VERSION,
    IMPORTED_PROJECT, UNTITLED_PROJECT,
};
pub use storage::{
    project_key, KeyValueStore, MemoryStore, ProjectStorage, ProjectSummary, PROJECT_KEY_PREFIX,
};
pub use tree::MenuItemPatch;

// Re-export model types for convenience
pub use blockcraft_model::{Block, BlockKind, Device, Properties};
