use crate::ports::outbound::KeyValueStorage;
use crate::shared::error::FleetError;
use crate::shared::security::{validate_not_symlink, validate_session_file};
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JsonFileStorage adapter persisting string pairs in a single JSON object
///
/// A missing file reads as an empty store. Every write replaces the file
/// atomically (temp file in the same directory, then rename).
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, details: impl ToString) -> anyhow::Error {
        FleetError::StorageError {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Ok(BTreeMap::new());
        }

        validate_session_file(&self.path).map_err(|e| self.storage_error(e))?;
        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| self.storage_error(format!("Session file is not valid JSON: {}", e)))
    }

    fn save(&self, items: &BTreeMap<String, String>) -> Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| self.storage_error(e))?;

        if self.path.exists() {
            validate_not_symlink(&self.path, "write").map_err(|e| self.storage_error(e))?;
        }

        let content = serde_json::to_string_pretty(items)?;
        let mut temp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| self.storage_error(e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| self.storage_error(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.storage_error(e.error))?;

        tracing::debug!(path = %self.path.display(), keys = items.len(), "session file written");
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.load()?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.save(&items)
    }
}
