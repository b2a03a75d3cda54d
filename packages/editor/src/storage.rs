//! # Project storage
//!
//! The core only needs four operations from a persistence backend, captured
//! by [`KeyValueStore`]. [`ProjectStorage`] layers the project key scheme
//! (`project_<id>`) and record validation on top of any backend.

use crate::errors::StorageError;
use crate::project::{load_project_from_json, ProjectRecord};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Key prefix shared by every stored project
pub const PROJECT_KEY_PREFIX: &str = "project_";

/// Minimal key-value persistence collaborator
pub trait KeyValueStore {
    fn put(&mut self, key: &str, record: &str) -> Result<(), StorageError>;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn delete(&mut self, key: &str) -> Result<(), StorageError>;

    fn list_keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// In-memory store with an optional byte quota over all stored values
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota: Some(quota),
        }
    }

    /// Bytes currently used by stored values
    pub fn used_bytes(&self) -> usize {
        self.entries.values().map(String::len).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&mut self, key: &str, record: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota {
            let replaced = self.entries.get(key).map_or(0, String::len);
            let available = quota.saturating_sub(self.used_bytes() - replaced);
            if record.len() > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed: record.len(),
                    quota: available,
                });
            }
        }

        self.entries.insert(key.to_string(), record.to_string());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }

    fn list_keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

/// Listing entry for a stored project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub updated_at: DateTime<Utc>,
    pub block_count: usize,
}

impl From<&ProjectRecord> for ProjectSummary {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            updated_at: record.updated_at,
            block_count: record.block_count(),
        }
    }
}

pub fn project_key(project_id: &str) -> String {
    format!("{}{}", PROJECT_KEY_PREFIX, project_id)
}

/// Project-level persistence over a [`KeyValueStore`]
#[derive(Debug, Clone, Default)]
pub struct ProjectStorage<S> {
    store: S,
}

impl<S: KeyValueStore> ProjectStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn save(&mut self, record: &ProjectRecord) -> Result<(), StorageError> {
        let key = project_key(&record.id);
        let json = serde_json::to_string(record)?;
        self.store.put(&key, &json)?;
        debug!(key = %key, bytes = json.len(), "stored project");
        Ok(())
    }

    /// `Ok(None)` when nothing is stored under the id
    pub fn load(&self, project_id: &str) -> Result<Option<ProjectRecord>, StorageError> {
        let key = project_key(project_id);
        let Some(json) = self.store.get(&key)? else {
            return Ok(None);
        };

        load_project_from_json(&json, Utc::now())
            .map(Some)
            .map_err(|source| StorageError::Corrupt { key, source })
    }

    pub fn delete(&mut self, project_id: &str) -> Result<(), StorageError> {
        self.store.delete(&project_key(project_id))
    }

    /// Every readable project, most recently updated first. Unreadable
    /// records are skipped.
    pub fn list(&self) -> Result<Vec<ProjectSummary>, StorageError> {
        let mut projects = Vec::new();

        for key in self.store.list_keys_with_prefix(PROJECT_KEY_PREFIX)? {
            let Some(json) = self.store.get(&key)? else {
                continue;
            };
            match load_project_from_json(&json, Utc::now()) {
                Ok(record) => projects.push(ProjectSummary::from(&record)),
                Err(err) => warn!(key = %key, error = %err, "skipping unreadable project"),
            }
        }

        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }
}
