//! Directory-backed project store: one `<key>.json` file per entry.

use blockcraft_editor::{KeyValueStore, StorageError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if !valid {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid store key {:?}", key),
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, EXTENSION)))
    }
}

impl KeyValueStore for FileStore {
    fn put(&mut self, key: &str, record: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write then rename so a crash never leaves a half-written record
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, record)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), bytes = record.len(), "wrote record");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)?) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    fn list_keys_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) {
                if key.starts_with(prefix) {
                    keys.push(key.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_editor::{Document, ProjectStorage};
    use blockcraft_model::BlockKind;
    use chrono::{Duration, Utc};

    #[test]
    fn test_put_get_delete() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("store"));

        assert_eq!(store.get("project_a").unwrap(), None);

        store.put("project_a", "{}").unwrap();
        assert_eq!(store.get("project_a").unwrap().as_deref(), Some("{}"));
        assert!(dir.path().join("store/project_a.json").exists());

        store.delete("project_a").unwrap();
        assert_eq!(store.get("project_a").unwrap(), None);
        store.delete("project_a").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(store.put("../escape", "{}").is_err());
        assert!(store.put("", "{}").is_err());
        assert!(store.get("a/b").is_err());
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.put("project_b", "{}").unwrap();
        store.put("project_a", "{}").unwrap();
        store.put("settings", "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        assert_eq!(
            store.list_keys_with_prefix("project_").unwrap(),
            vec!["project_a", "project_b"]
        );
        assert!(FileStore::new(dir.path().join("missing"))
            .list_keys_with_prefix("project_")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_project_storage_over_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = ProjectStorage::new(FileStore::new(dir.path()));
        let now = Utc::now();

        let mut older = Document::new("Older");
        older.add_block(BlockKind::Text, None, None).unwrap();
        older.save(&mut storage, now - Duration::hours(1)).unwrap();

        let mut newer = Document::new("Newer");
        newer.save(&mut storage, now).unwrap();

        fs::write(dir.path().join("project_broken.json"), "{ nope").unwrap();

        let names: Vec<_> = storage.list().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Newer", "Older"]);

        let loaded = storage.load(older.id()).unwrap().unwrap();
        assert_eq!(loaded.blocks, older.blocks());
    }
}
