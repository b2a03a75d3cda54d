//! # Tree operations
//!
//! Pure functions over a borrowed block forest. Every operation either
//! returns a new forest or an [`MutationError`] explaining why the edit is a
//! no-op; the input is never touched, so an `Err` always means "tree
//! unchanged".
//!
//! Blocks are addressed by id, never by index path.

use crate::errors::MutationError;
use blockcraft_model::{Block, BlockKind, MenuItem, Properties};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Depth-first search through the forest, containers' children included
pub fn find<'a>(blocks: &'a [Block], id: &str) -> Option<&'a Block> {
    for block in blocks {
        if block.id == id {
            return Some(block);
        }
        if let Some(found) = find(block.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Parent id (`None` for roots) and sibling index of `id`
pub fn locate(blocks: &[Block], id: &str) -> Option<(Option<String>, usize)> {
    locate_in(blocks, None, id)
}

fn locate_in(
    blocks: &[Block],
    parent_id: Option<&str>,
    id: &str,
) -> Option<(Option<String>, usize)> {
    if let Some(index) = blocks.iter().position(|block| block.id == id) {
        return Some((parent_id.map(str::to_string), index));
    }
    blocks
        .iter()
        .find_map(|block| locate_in(block.children(), Some(block.id.as_str()), id))
}

/// First id that appears more than once in the forest
pub fn find_duplicate_id(blocks: &[Block]) -> Option<String> {
    fn walk<'a>(blocks: &'a [Block], seen: &mut HashSet<&'a str>) -> Option<String> {
        for block in blocks {
            if !seen.insert(&block.id) {
                return Some(block.id.clone());
            }
            if let Some(duplicate) = walk(block.children(), seen) {
                return Some(duplicate);
            }
        }
        None
    }

    walk(blocks, &mut HashSet::new())
}

/// Insert `block` at `index` (clamped) among the roots, or among the children
/// of the container `parent_id`.
pub fn insert(
    blocks: &[Block],
    parent_id: Option<&str>,
    index: usize,
    block: Block,
) -> Result<Vec<Block>, MutationError> {
    let mut next = blocks.to_vec();
    let siblings = siblings_mut(&mut next, parent_id)?;
    let index = index.min(siblings.len());
    siblings.insert(index, block);

    ensure_unique(next)
}

/// Detach `id` and its whole subtree from wherever it lives.
pub fn remove(blocks: &[Block], id: &str) -> Result<(Vec<Block>, Block), MutationError> {
    let mut next = blocks.to_vec();
    let removed =
        detach(&mut next, id).ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
    Ok((next, removed))
}

/// Relocate `id` under `target_parent_id` (or the roots) at `target_index`.
///
/// `target_index` is interpreted against the sibling list as it looks
/// *before* the block is detached, which is what a drop indicator shows.
/// Dropping a block back onto its own slot yields
/// [`MutationError::Unchanged`].
pub fn move_block(
    blocks: &[Block],
    id: &str,
    target_parent_id: Option<&str>,
    target_index: usize,
) -> Result<Vec<Block>, MutationError> {
    let (source_parent, source_index) =
        locate(blocks, id).ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;

    let target_len = match target_parent_id {
        None => blocks.len(),
        Some(parent_id) => {
            let parent = find(blocks, parent_id)
                .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?;
            if !parent.is_container() {
                return Err(MutationError::NotAContainer(parent_id.to_string()));
            }
            parent.children().len()
        }
    };

    if let Some(parent_id) = target_parent_id {
        let moving = find(blocks, id).ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
        if moving.contains(parent_id) {
            return Err(MutationError::CycleDetected {
                block_id: id.to_string(),
                target_id: parent_id.to_string(),
            });
        }
    }

    let mut index = target_index.min(target_len);
    if source_parent.as_deref() == target_parent_id {
        if source_index < index {
            index -= 1;
        }
        if index == source_index {
            return Err(MutationError::Unchanged);
        }
    }

    let mut next = blocks.to_vec();
    let moving = detach(&mut next, id).ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;
    let siblings = siblings_mut(&mut next, target_parent_id)?;
    let index = index.min(siblings.len());
    siblings.insert(index, moving);

    Ok(next)
}

/// Shallow-merge `patch` into the block's properties.
///
/// `children` in the patch is ignored for kinds that cannot own children. A
/// patch that changes nothing is reported as [`MutationError::Unchanged`].
pub fn update(
    blocks: &[Block],
    id: &str,
    mut patch: Properties,
) -> Result<Vec<Block>, MutationError> {
    let mut next = blocks.to_vec();
    let block = find_mut(&mut next, id).ok_or_else(|| MutationError::BlockNotFound(id.to_string()))?;

    if !block.is_container() {
        patch.children = None;
    }

    let before = block.properties.clone();
    block.properties.merge(patch);
    if block.properties == before {
        return Err(MutationError::Unchanged);
    }

    ensure_unique(next)
}

/// Field changes for one menu item; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Append a menu item to a header block.
pub fn add_menu_item(
    blocks: &[Block],
    header_id: &str,
    item: MenuItem,
) -> Result<Vec<Block>, MutationError> {
    let mut next = blocks.to_vec();
    let items = menu_items_mut(&mut next, header_id)?;
    if items.iter().any(|existing| existing.id == item.id) {
        return Err(MutationError::DuplicateId(item.id));
    }
    items.push(item);
    Ok(next)
}

pub fn update_menu_item(
    blocks: &[Block],
    header_id: &str,
    item_id: &str,
    patch: MenuItemPatch,
) -> Result<Vec<Block>, MutationError> {
    let mut next = blocks.to_vec();
    let item = menu_items_mut(&mut next, header_id)?
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| MutationError::MenuItemNotFound(item_id.to_string()))?;

    let before = item.clone();
    if let Some(label) = patch.label {
        item.label = label;
    }
    if let Some(href) = patch.href {
        item.href = Some(href);
    }
    if let Some(color) = patch.color {
        item.color = Some(color);
    }
    if *item == before {
        return Err(MutationError::Unchanged);
    }

    Ok(next)
}

/// Remove one menu item, keeping the others in their original order.
pub fn remove_menu_item(
    blocks: &[Block],
    header_id: &str,
    item_id: &str,
) -> Result<Vec<Block>, MutationError> {
    let mut next = blocks.to_vec();
    let items = menu_items_mut(&mut next, header_id)?;
    let position = items
        .iter()
        .position(|item| item.id == item_id)
        .ok_or_else(|| MutationError::MenuItemNotFound(item_id.to_string()))?;
    items.remove(position);
    Ok(next)
}

fn ensure_unique(blocks: Vec<Block>) -> Result<Vec<Block>, MutationError> {
    match find_duplicate_id(&blocks) {
        Some(duplicate) => Err(MutationError::DuplicateId(duplicate)),
        None => Ok(blocks),
    }
}

fn find_mut<'a>(blocks: &'a mut [Block], id: &str) -> Option<&'a mut Block> {
    for block in blocks.iter_mut() {
        if block.id == id {
            return Some(block);
        }
        if let Some(children) = stored_children_mut(block) {
            if let Some(found) = find_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Remove an element from its parent and return it
fn detach(blocks: &mut Vec<Block>, id: &str) -> Option<Block> {
    if let Some(position) = blocks.iter().position(|block| block.id == id) {
        return Some(blocks.remove(position));
    }

    blocks
        .iter_mut()
        .filter_map(stored_children_mut)
        .find_map(|children| detach(children, id))
}

/// Children already present on a container; searching never materialises an
/// empty list.
fn stored_children_mut(block: &mut Block) -> Option<&mut Vec<Block>> {
    if block.is_container() {
        block.properties.children.as_mut()
    } else {
        None
    }
}

fn siblings_mut<'a>(
    blocks: &'a mut Vec<Block>,
    parent_id: Option<&str>,
) -> Result<&'a mut Vec<Block>, MutationError> {
    let Some(parent_id) = parent_id else {
        return Ok(blocks);
    };

    find_mut(blocks, parent_id)
        .ok_or_else(|| MutationError::ParentNotFound(parent_id.to_string()))?
        .children_mut()
        .ok_or_else(|| MutationError::NotAContainer(parent_id.to_string()))
}

fn menu_items_mut<'a>(
    blocks: &'a mut [Block],
    header_id: &str,
) -> Result<&'a mut Vec<MenuItem>, MutationError> {
    let header =
        find_mut(blocks, header_id).ok_or_else(|| MutationError::BlockNotFound(header_id.to_string()))?;
    if header.kind != BlockKind::Header {
        return Err(MutationError::NotAHeader(header_id.to_string()));
    }
    Ok(header.properties.menu_items.get_or_insert_with(Vec::new))
}
