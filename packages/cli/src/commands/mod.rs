pub mod generate;
pub mod info;
pub mod list;
pub mod new;
pub mod validate;

pub use generate::{generate, GenerateArgs};
pub use info::{info, InfoArgs};
pub use list::{list, ListArgs};
pub use new::{new, NewArgs};
pub use validate::{validate, ValidateArgs};

use crate::config::Config;
use crate::store::FileStore;
use anyhow::{anyhow, Context, Result};
use blockcraft_editor::{load_project_from_json, ProjectRecord, ProjectStorage};
use chrono::Utc;
use std::path::PathBuf;

pub(crate) fn open_storage(config: &Config, cwd: &str) -> ProjectStorage<FileStore> {
    ProjectStorage::new(FileStore::new(config.store_path(cwd)))
}

/// Load a project from a file path, or from the store when `source` names a
/// stored project id instead.
pub(crate) fn load_project(source: &str, config: &Config, cwd: &str) -> Result<ProjectRecord> {
    let path = PathBuf::from(cwd).join(source);
    if path.is_file() {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        return load_project_from_json(&json, Utc::now())
            .with_context(|| format!("Invalid project file {}", path.display()));
    }

    open_storage(config, cwd)
        .load(source)?
        .ok_or_else(|| anyhow!("No project file or stored project named {}", source))
}
