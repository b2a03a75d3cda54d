//! # Project records
//!
//! The persisted/exchanged document shape:
//!
//! ```json
//! { "id": "...", "name": "...", "createdAt": "...", "updatedAt": "...",
//!   "blocks": [ ... ], "metadata": { "version": "1", "blockCount": 3 } }
//! ```
//!
//! Loading validates the raw JSON structurally before anything is typed;
//! one bad node anywhere rejects the whole record.

use crate::errors::ProjectError;
use crate::tree::find_duplicate_id;
use blockcraft_model::{count_blocks, new_project_id, Block};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Record format version written on save
pub const FORMAT_VERSION: &str = "1";

pub const UNTITLED_PROJECT: &str = "Untitled Project";
pub const IMPORTED_PROJECT: &str = "Imported Project";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub metadata: ProjectMetadata,
}

/// Free-form metadata; the known keys are typed, the rest kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const METADATA_KEYS: [&str; 4] = ["description", "version", "blockCount", "exportedAt"];

impl ProjectRecord {
    /// Total number of blocks, nested children included
    pub fn block_count(&self) -> usize {
        count_blocks(&self.blocks)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Suggested download name, `<sanitized name>.json`
    pub fn file_name(&self) -> String {
        format!("{}.json", sanitize_filename(&self.name))
    }
}

/// Options for [`save_project_to_record`]
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Reuse an existing id instead of minting one
    pub project_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    /// Merged over the generated `version`/`blockCount`
    pub metadata: Option<ProjectMetadata>,
}

/// Wrap a forest into a persistable record stamped with `now`.
pub fn save_project_to_record(
    blocks: &[Block],
    name: &str,
    options: SaveOptions,
    now: DateTime<Utc>,
) -> ProjectRecord {
    let mut metadata = options.metadata.unwrap_or_default();
    metadata.version.get_or_insert_with(|| FORMAT_VERSION.to_string());
    metadata.block_count = Some(count_blocks(blocks));

    let name = if name.trim().is_empty() {
        UNTITLED_PROJECT.to_string()
    } else {
        name.to_string()
    };

    ProjectRecord {
        id: options.project_id.unwrap_or_else(new_project_id),
        name,
        created_at: options.created_at.unwrap_or(now),
        updated_at: now,
        blocks: blocks.to_vec(),
        metadata,
    }
}

/// Parse and validate a record. Missing id, name, timestamps and metadata are
/// backfilled; anything structurally wrong rejects the record.
pub fn load_project_from_json(json: &str, now: DateTime<Utc>) -> Result<ProjectRecord, ProjectError> {
    let value: Value = serde_json::from_str(json)?;
    load_project_from_value(value, now)
}

pub fn load_project_from_value(value: Value, now: DateTime<Utc>) -> Result<ProjectRecord, ProjectError> {
    let Value::Object(mut record) = value else {
        return Err(ProjectError::invalid("$", "project must be an object"));
    };

    let blocks_value = record
        .remove("blocks")
        .ok_or_else(|| ProjectError::invalid("$.blocks", "missing"))?;
    let Value::Array(raw_blocks) = &blocks_value else {
        return Err(ProjectError::invalid("$.blocks", "must be an array"));
    };
    for (index, block) in raw_blocks.iter().enumerate() {
        validate_block(block, &format!("$.blocks[{}]", index))?;
    }

    let blocks: Vec<Block> = serde_json::from_value(blocks_value)
        .map_err(|err| ProjectError::invalid("$.blocks", err.to_string()))?;
    if let Some(duplicate) = find_duplicate_id(&blocks) {
        return Err(ProjectError::invalid(
            "$.blocks",
            format!("duplicate block id {}", duplicate),
        ));
    }

    let id = non_empty_string(record.get("id")).unwrap_or_else(new_project_id);
    let name = non_empty_string(record.get("name")).unwrap_or_else(|| IMPORTED_PROJECT.to_string());
    let created_at = timestamp(record.get("createdAt")).unwrap_or(now);
    let updated_at = timestamp(record.get("updatedAt")).unwrap_or(now);
    let metadata = record
        .remove("metadata")
        .map(parse_metadata)
        .unwrap_or_default();

    Ok(ProjectRecord {
        id,
        name,
        created_at,
        updated_at,
        blocks,
        metadata,
    })
}

/// Structural shape check for one node and, recursively, its children.
pub fn validate_block(value: &Value, path: &str) -> Result<(), ProjectError> {
    let Value::Object(block) = value else {
        return Err(ProjectError::invalid(path, "block must be an object"));
    };

    for key in ["id", "type", "bemName"] {
        if !block.get(key).is_some_and(Value::is_string) {
            return Err(ProjectError::invalid(
                format!("{}.{}", path, key),
                "must be a string",
            ));
        }
    }

    let Some(Value::Object(properties)) = block.get("properties") else {
        return Err(ProjectError::invalid(
            format!("{}.properties", path),
            "must be an object",
        ));
    };

    match properties.get("children") {
        None => Ok(()),
        Some(Value::Array(children)) => {
            for (index, child) in children.iter().enumerate() {
                validate_block(child, &format!("{}.properties.children[{}]", path, index))?;
            }
            Ok(())
        }
        Some(_) => Err(ProjectError::invalid(
            format!("{}.properties.children", path),
            "must be an array",
        )),
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    let raw = value.and_then(Value::as_str)?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(err) => {
            debug!(value = raw, error = %err, "ignoring unparseable timestamp");
            None
        }
    }
}

fn parse_metadata(value: Value) -> ProjectMetadata {
    let Value::Object(mut map) = value else {
        return ProjectMetadata::default();
    };

    match serde_json::from_value(Value::Object(map.clone())) {
        Ok(metadata) => metadata,
        Err(err) => {
            debug!(error = %err, "metadata has unexpected shape, keeping only free-form keys");
            for key in METADATA_KEYS {
                map.remove(key);
            }
            ProjectMetadata {
                extra: map,
                ..Default::default()
            }
        }
    }
}

/// Make a project name safe to use as a file name.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::new();
    let mut in_whitespace = false;

    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
            sanitized.push(ch);
        }
    }

    sanitized.truncate(80);
    if sanitized.is_empty() {
        "project".to_string()
    } else {
        sanitized
    }
}
