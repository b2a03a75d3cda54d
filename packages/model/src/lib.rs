//! # Blockcraft Model
//!
//! The document tree shared by every other blockcraft crate.
//!
//! ```text
//! Block (container) ── children ──▶ Block (heading)
//!                               └─▶ Block (container) ── children ──▶ ...
//! Block (header) ── menuItems ──▶ MenuItem, MenuItem, ...
//! ```
//!
//! Blocks are plain data. Structural edits live in `blockcraft-editor`, code
//! generation lives in the compiler crates.

pub mod bem;
pub mod block;
pub mod id_generator;
pub mod palette;
pub mod properties;
pub mod responsive;
pub mod style;

pub use block::{count_blocks, Block, BlockKind, HeadingTag, MenuItem};
pub use id_generator::{new_project_id, IdGenerator};
pub use properties::Properties;
pub use responsive::{resolve, Device, PropertyValue, ResponsiveKey, ResponsiveValue};
