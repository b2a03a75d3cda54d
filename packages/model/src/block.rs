//! # Blocks
//!
//! A [`Block`] is one node of the page tree. Only containers own children;
//! every other kind is a leaf. Header blocks carry an ordered list of
//! [`MenuItem`]s instead.
//!
//! The wire shape mirrors the persisted project format:
//!
//! ```json
//! { "id": "block-1", "type": "container", "bemName": "container",
//!   "properties": { "padding": "2rem", "children": [ ... ] } }
//! ```

use crate::properties::Properties;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of block kinds.
///
/// Kinds this build does not know about are kept verbatim in
/// [`BlockKind::Unknown`] so an imported document survives a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    Container,
    Heading,
    Text,
    Button,
    Header,
    Unknown(String),
}

impl BlockKind {
    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Container => "container",
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Button => "button",
            BlockKind::Header => "header",
            BlockKind::Unknown(kind) => kind,
        }
    }

    /// Only containers may own children.
    pub fn is_container(&self) -> bool {
        matches!(self, BlockKind::Container)
    }

    /// Base stylesheet class for freshly created blocks of this kind
    pub fn default_bem_name(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for BlockKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "container" => BlockKind::Container,
            "heading" => BlockKind::Heading,
            "text" => BlockKind::Text,
            "button" => BlockKind::Button,
            "header" => BlockKind::Header,
            _ => BlockKind::Unknown(kind),
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Unknown(kind) => kind,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heading level for `heading` blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    #[default]
    H1,
    H2,
    H3,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
        }
    }
}

/// A navigation entry of a header block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: None,
            color: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Link target, `#` when unset
    pub fn href_or_default(&self) -> &str {
        self.href.as_deref().unwrap_or("#")
    }
}

/// A node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable identifier, unique across the whole tree
    pub id: String,

    #[serde(rename = "type")]
    pub kind: BlockKind,

    /// Base stylesheet class
    #[serde(rename = "bemName")]
    pub bem_name: String,

    pub properties: Properties,
}

impl Block {
    /// Create a block with empty properties and the kind's default class.
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            bem_name: kind.default_bem_name().to_string(),
            kind,
            properties: Properties::default(),
        }
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    /// Builder helper used heavily by tests and the palette.
    pub fn with_child(mut self, child: Block) -> Self {
        if let Some(children) = self.children_mut() {
            children.push(child);
        }
        self
    }

    pub fn is_container(&self) -> bool {
        self.kind.is_container()
    }

    /// Owned children. Always empty for non-container kinds, even if an
    /// imported record carried a stray `children` array.
    pub fn children(&self) -> &[Block] {
        if !self.is_container() {
            return &[];
        }
        self.properties.children.as_deref().unwrap_or(&[])
    }

    /// Mutable children list, `None` for kinds that cannot own children. A
    /// container without a `children` key gets an empty list on first use.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Block>> {
        if !self.is_container() {
            return None;
        }
        Some(self.properties.children.get_or_insert_with(Vec::new))
    }

    /// Whether `id` names this block or any block below it
    pub fn contains(&self, id: &str) -> bool {
        self.id == id || self.children().iter().any(|child| child.contains(id))
    }

    /// Number of blocks in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + count_blocks(self.children())
    }

    /// Modifier names whose flag is set, in declaration order
    pub fn active_modifiers(&self) -> impl Iterator<Item = &str> {
        self.properties
            .modifiers
            .iter()
            .flatten()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        self.properties.menu_items.as_deref().unwrap_or(&[])
    }
}

/// Total number of blocks in a forest, each node counted once.
pub fn count_blocks(blocks: &[Block]) -> usize {
    blocks.iter().map(Block::count).sum()
}
