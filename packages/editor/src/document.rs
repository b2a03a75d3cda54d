//! # Document Handle
//!
//! The single owner of an editing session: the live block forest, its undo
//! history, the current selection and the project identity it is saved
//! under. UI surfaces query and edit through this handle only; nothing it
//! hands out aliases the internal state mutably.
//!
//! ## Lifecycle
//!
//! ```text
//! new/load → edit (mutations) → generate code → save/export
//!               ↓ ↑
//!           undo / redo
//! ```
//!
//! ## History bookkeeping
//!
//! History entries hold the tree as it was *before* each edit. The live tree
//! is therefore not in the log until an undo needs it; `synced` tracks
//! whether the live tree is the snapshot at the history cursor.

use crate::codegen::{generate_code_with_options, CodegenOptions, GeneratedCode};
use crate::errors::{MutationError, ProjectError, StorageError};
use crate::history::History;
use crate::mutations::{Mutation, MutationResult};
use crate::project::{
    load_project_from_json, save_project_to_record, ProjectMetadata, ProjectRecord, SaveOptions,
    UNTITLED_PROJECT,
};
use crate::storage::{KeyValueStore, ProjectStorage};
use crate::tree::{self, MenuItemPatch};
use blockcraft_model::responsive::{copy_to_all_devices, set_device_value};
use blockcraft_model::{
    count_blocks, new_project_id, Block, BlockKind, Device, IdGenerator, MenuItem, Properties,
    ResponsiveKey,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// History label recorded when a project replaces the tree
pub const LOAD_PROJECT_LABEL: &str = "Load project";

const LIVE_STATE_LABEL: &str = "Current state";

/// Editable page document
#[derive(Debug, Clone)]
pub struct Document {
    id: String,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    metadata: ProjectMetadata,

    blocks: Vec<Block>,
    history: History,
    synced: bool,
    selected: Option<String>,
    ids: IdGenerator,

    /// Increments on every change to the live tree
    version: u64,
    saved_version: Option<u64>,
    persisted: bool,
}

impl Document {
    pub fn new(name: &str) -> Self {
        Self::with_id_generator(name, IdGenerator::new())
    }

    /// Create a document whose new block ids come from `ids`
    pub fn with_id_generator(name: &str, ids: IdGenerator) -> Self {
        let now = Utc::now();
        Self {
            id: new_project_id(),
            name: display_name(name),
            created_at: now,
            updated_at: now,
            metadata: ProjectMetadata::default(),
            blocks: Vec::new(),
            history: History::new(),
            synced: false,
            selected: None,
            ids,
            version: 0,
            saved_version: None,
            persisted: false,
        }
    }

    pub fn from_record(record: ProjectRecord) -> Self {
        let mut doc = Self::new(&record.name);
        doc.load_record(record);
        doc
    }

    // Project identity

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: &str) {
        self.name = display_name(name);
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether the project has been explicitly saved or loaded at least once
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Whether the tree changed since the last save or load
    pub fn is_dirty(&self) -> bool {
        self.saved_version != Some(self.version)
    }

    // Tree queries

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        tree::find(&self.blocks, id)
    }

    pub fn block_count(&self) -> usize {
        count_blocks(&self.blocks)
    }

    // Mutations

    /// Apply a mutation, recording one history entry on success. A rejected
    /// mutation changes nothing, history included.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        match mutation.apply(&self.blocks) {
            Ok(next) => Ok(self.commit(next, mutation.label())),
            Err(err) => {
                debug!(mutation = %mutation.label(), reason = %err, "mutation left the tree unchanged");
                Err(err)
            }
        }
    }

    /// Create a palette block of `kind` and insert it; `index` defaults to
    /// the end of the target list. Returns the new block's id.
    pub fn add_block(
        &mut self,
        kind: BlockKind,
        parent_id: Option<&str>,
        index: Option<usize>,
    ) -> Result<String, MutationError> {
        let block = Block::from_palette(kind, &mut self.ids);
        let id = block.id.clone();
        self.insert_block(parent_id, index.unwrap_or(usize::MAX), block)?;
        Ok(id)
    }

    pub fn insert_block(
        &mut self,
        parent_id: Option<&str>,
        index: usize,
        block: Block,
    ) -> Result<MutationResult, MutationError> {
        self.apply(Mutation::InsertBlock {
            parent_id: parent_id.map(str::to_string),
            index,
            block,
        })
    }

    /// Remove a block and its subtree, returning what was removed
    pub fn remove_block(&mut self, id: &str) -> Result<Block, MutationError> {
        let removed = self
            .find(id)
            .cloned()
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
        self.apply(Mutation::RemoveBlock {
            block_id: id.to_string(),
        })?;
        Ok(removed)
    }

    pub fn move_block(
        &mut self,
        id: &str,
        target_parent_id: Option<&str>,
        index: usize,
    ) -> Result<MutationResult, MutationError> {
        self.apply(Mutation::MoveBlock {
            block_id: id.to_string(),
            target_parent_id: target_parent_id.map(str::to_string),
            index,
        })
    }

    pub fn update_block(
        &mut self,
        id: &str,
        properties: Properties,
    ) -> Result<MutationResult, MutationError> {
        self.apply(Mutation::UpdateProperties {
            block_id: id.to_string(),
            properties,
        })
    }

    /// Override one device slot of a responsive property, promoting a plain
    /// value first.
    pub fn set_device_value(
        &mut self,
        id: &str,
        key: ResponsiveKey,
        device: Device,
        value: &str,
    ) -> Result<MutationResult, MutationError> {
        let block = self
            .find(id)
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
        let updated = set_device_value(block.properties.responsive(key), device, value);

        let mut patch = Properties::default();
        patch.set_responsive(key, updated.into());
        self.update_block(id, patch)
    }

    /// Write the value resolved for `from` into every device slot.
    pub fn copy_to_all_devices(
        &mut self,
        id: &str,
        key: ResponsiveKey,
        from: Device,
    ) -> Result<MutationResult, MutationError> {
        let block = self
            .find(id)
            .ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
        let updated = copy_to_all_devices(block.properties.responsive(key), from);

        let mut patch = Properties::default();
        patch.set_responsive(key, updated.into());
        self.update_block(id, patch)
    }

    /// Append a menu item to a header, returning the new item's id
    pub fn add_menu_item(&mut self, header_id: &str, label: &str) -> Result<String, MutationError> {
        let item = MenuItem::new(self.ids.new_id("menu"), label);
        let item_id = item.id.clone();
        self.apply(Mutation::AddMenuItem {
            header_id: header_id.to_string(),
            item,
        })?;
        Ok(item_id)
    }

    pub fn update_menu_item(
        &mut self,
        header_id: &str,
        item_id: &str,
        patch: MenuItemPatch,
    ) -> Result<MutationResult, MutationError> {
        self.apply(Mutation::UpdateMenuItem {
            header_id: header_id.to_string(),
            item_id: item_id.to_string(),
            patch,
        })
    }

    pub fn remove_menu_item(
        &mut self,
        header_id: &str,
        item_id: &str,
    ) -> Result<MutationResult, MutationError> {
        self.apply(Mutation::RemoveMenuItem {
            header_id: header_id.to_string(),
            item_id: item_id.to_string(),
        })
    }

    fn commit(&mut self, next: Vec<Block>, label: String) -> MutationResult {
        if self.synced {
            self.history.branch(label.clone());
        } else {
            self.history.push(&self.blocks, label.clone());
        }

        self.blocks = next;
        self.synced = false;
        self.touch();

        debug!(version = self.version, action = %label, "committed edit");
        MutationResult {
            version: self.version,
            label,
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        if let Some(selected) = &self.selected {
            if tree::find(&self.blocks, selected).is_none() {
                self.selected = None;
            }
        }
    }

    // History

    pub fn undo(&mut self) -> bool {
        if !self.synced && !self.history.is_empty() {
            self.history.push(&self.blocks, LIVE_STATE_LABEL);
        }

        let Some(entry) = self.history.undo() else {
            return false;
        };
        self.blocks = entry.blocks.clone();
        self.synced = true;
        self.touch();

        debug!(cursor = self.history.cursor(), "undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.synced {
            return false;
        }

        let Some(entry) = self.history.redo() else {
            return false;
        };
        self.blocks = entry.blocks.clone();
        self.touch();

        debug!(cursor = self.history.cursor(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || (!self.synced && !self.history.is_empty())
    }

    pub fn can_redo(&self) -> bool {
        self.synced && self.history.can_redo()
    }

    /// Label of the action the next undo reverts
    pub fn undo_label(&self) -> Option<&str> {
        if self.synced {
            self.history.undo_label()
        } else {
            self.history.current().map(|entry| entry.label.as_str())
        }
    }

    /// Label of the action the next redo re-applies
    pub fn redo_label(&self) -> Option<&str> {
        if self.synced {
            self.history.redo_label()
        } else {
            None
        }
    }

    // Selection

    /// Select an existing block; unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_deref().and_then(|id| self.find(id))
    }

    // Project lifecycle

    /// Start over with an empty tree and no history.
    pub fn new_project(&mut self, name: &str) {
        let ids = std::mem::take(&mut self.ids);
        let version = self.version + 1;
        *self = Self::with_id_generator(name, ids);
        self.version = version;
        info!(project_id = %self.id, "created project");
    }

    /// Replace the whole document with `record`. History restarts with a
    /// single entry so the load itself can be undone back to a blank tree.
    pub fn load_record(&mut self, record: ProjectRecord) {
        self.history.clear();
        self.history.push(&[], LOAD_PROJECT_LABEL);
        self.synced = false;
        self.selected = None;

        self.id = record.id;
        self.name = display_name(&record.name);
        self.created_at = record.created_at;
        self.updated_at = record.updated_at;
        self.metadata = record.metadata;
        self.blocks = record.blocks;

        self.touch();
        self.saved_version = Some(self.version);
        self.persisted = true;

        info!(project_id = %self.id, blocks = self.block_count(), "loaded project");
    }

    /// Validate and load an exported record. On failure the document is left
    /// exactly as it was.
    pub fn import_json(&mut self, json: &str) -> Result<(), ProjectError> {
        let record = load_project_from_json(json, Utc::now())?;
        self.load_record(record);
        Ok(())
    }

    /// Snapshot the document as a persistable record stamped with `now`
    pub fn to_record(&self, now: DateTime<Utc>) -> ProjectRecord {
        save_project_to_record(
            &self.blocks,
            &self.name,
            SaveOptions {
                project_id: Some(self.id.clone()),
                created_at: Some(self.created_at),
                metadata: Some(self.metadata.clone()),
            },
            now,
        )
    }

    /// Pretty JSON export with `exportedAt` set
    pub fn export_json(&self, now: DateTime<Utc>) -> Result<String, ProjectError> {
        let mut record = self.to_record(now);
        record.metadata.exported_at = Some(now);
        record.to_json_pretty()
    }

    /// Persist to `storage`. A failed write leaves the document untouched.
    pub fn save<S: KeyValueStore>(
        &mut self,
        storage: &mut ProjectStorage<S>,
        now: DateTime<Utc>,
    ) -> Result<ProjectRecord, StorageError> {
        let record = self.to_record(now);
        storage.save(&record)?;

        self.updated_at = now;
        self.saved_version = Some(self.version);
        self.persisted = true;

        info!(project_id = %self.id, blocks = record.block_count(), "saved project");
        Ok(record)
    }

    // Code generation

    pub fn generate_code(&self) -> GeneratedCode {
        self.generate_code_with_options(&CodegenOptions::default())
    }

    pub fn generate_code_with_options(&self, options: &CodegenOptions) -> GeneratedCode {
        generate_code_with_options(&self.blocks, options)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(UNTITLED_PROJECT)
    }
}

fn display_name(name: &str) -> String {
    if name.trim().is_empty() {
        UNTITLED_PROJECT.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        Document::with_id_generator("Test", IdGenerator::from_seed("t"))
    }

    #[test]
    fn test_create_document() {
        let doc = doc();
        assert_eq!(doc.version(), 0);
        assert!(doc.blocks().is_empty());
        assert!(!doc.can_undo());
        assert!(!doc.can_redo());
        assert!(!doc.is_persisted());
    }

    #[test]
    fn test_version_increments_only_on_change() {
        let mut doc = doc();
        let id = doc.add_block(BlockKind::Text, None, None).unwrap();
        assert_eq!(doc.version(), 1);

        assert!(doc.move_block(&id, None, 0).is_err());
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_undo_redo_single_edit() {
        let mut doc = doc();
        doc.add_block(BlockKind::Container, None, None).unwrap();
        assert!(doc.can_undo());
        assert_eq!(doc.undo_label(), Some("Add container"));

        assert!(doc.undo());
        assert!(doc.blocks().is_empty());
        assert!(!doc.can_undo());
        assert!(doc.can_redo());
        assert_eq!(doc.redo_label(), Some("Add container"));

        assert!(doc.redo());
        assert_eq!(doc.blocks().len(), 1);
        assert!(!doc.can_redo());
    }

    #[test]
    fn test_selection_cleared_when_block_removed() {
        let mut doc = doc();
        let outer = doc.add_block(BlockKind::Container, None, None).unwrap();
        let inner = doc.add_block(BlockKind::Text, Some(outer.as_str()), None).unwrap();

        assert!(doc.select(&inner));
        assert_eq!(doc.selected_block().map(|b| b.kind.clone()), Some(BlockKind::Text));

        doc.remove_block(&outer).unwrap();
        assert_eq!(doc.selected_id(), None);
        assert!(!doc.select("missing"));
    }

    #[test]
    fn test_set_device_value_promotes_plain_padding() {
        let mut doc = doc();
        let id = doc.add_block(BlockKind::Container, None, None).unwrap();
        doc.set_device_value(&id, ResponsiveKey::Padding, Device::Mobile, "1rem")
            .unwrap();

        let padding = doc.find(&id).and_then(|b| b.properties.padding.as_ref()).unwrap();
        assert_eq!(padding.resolve(Device::Mobile), "1rem");
        assert_eq!(padding.resolve(Device::Desktop), "2rem");

        doc.copy_to_all_devices(&id, ResponsiveKey::Padding, Device::Mobile)
            .unwrap();
        let padding = doc.find(&id).and_then(|b| b.properties.padding.as_ref()).unwrap();
        assert_eq!(padding.resolve(Device::Desktop), "1rem");
        assert_eq!(padding.as_responsive().and_then(|r| r.default.clone()), None);
    }

    #[test]
    fn test_new_project_resets_everything() {
        let mut doc = doc();
        doc.add_block(BlockKind::Text, None, None).unwrap();
        let old_id = doc.id().to_string();

        doc.new_project("Fresh");
        assert_ne!(doc.id(), old_id);
        assert_eq!(doc.name(), "Fresh");
        assert!(doc.blocks().is_empty());
        assert!(!doc.can_undo());
    }
}
