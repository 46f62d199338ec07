//! JSON file key/value backend
//!
//! All keys live in one JSON object on disk. Writes go through a temporary
//! file in the same directory followed by a rename, so a failed write leaves
//! the previous state file untouched.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

/// Key/value store persisted as a single JSON object file
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    values: Mutex<Map<String, Value>>,
}

impl FileKeyValueStore {
    /// Opens the state file at `path`
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first update.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = Self::load(&path)?;
        tracing::debug!("Opened state file {} ({} keys)", path.display(), values.len());
        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    /// Returns the state file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> StoreResult<Map<String, Value>> {
        if !path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Read(format!("Failed to read {}: {}", path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StoreError::Read(format!(
                "{} does not contain a JSON object",
                path.display()
            ))),
            Err(e) => Err(StoreError::Read(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write_atomic(&self, values: &Map<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Write(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(values).map_err(|e| StoreError::Serialize {
            key: "*".to_string(),
            reason: e.to_string(),
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).map_err(|e| {
            StoreError::Write(format!("Failed to write {}: {}", tmp_path.display(), e))
        })?;

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            StoreError::Write(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn update(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);

        let mut next = values.clone();
        next.insert(key.to_string(), value);
        self.write_atomic(&next)?;

        *values = next;
        tracing::debug!("Persisted '{}' to {}", key, self.path.display());
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
