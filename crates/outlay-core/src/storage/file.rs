//! Filesystem storage backend
//!
//! One text file per logical key under a data directory, `<key>.json`.
//! Writes go through a temp file in the same directory followed by a rename,
//! so a crash mid-write never leaves a torn value behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::storage::StorageBackend;

pub struct FileBackend {
    /// Directory where key files are stored
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `data_dir`, creating the directory if it
    /// doesn't exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .map_err(|e| Error::Storage(format!("Failed to create data directory: {}", e)))?;
            info!("Created data directory: {}", data_dir.display());
        }
        Ok(Self { data_dir })
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn name(&self) -> &str {
        "file"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(Some(text))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.data_dir)
            .map_err(|e| Error::Storage(format!("Failed to create temp file: {}", e)))?;
        tmp.write_all(value.as_bytes())
            .map_err(|e| Error::Storage(format!("Failed to write {}: {}", path.display(), e)))?;
        tmp.persist(&path)
            .map_err(|e| Error::Storage(format!("Failed to persist {}: {}", path.display(), e)))?;
        debug!("Stored {} bytes under key '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                Error::Storage(format!("Failed to remove {}: {}", path.display(), e))
            })?;
            debug!("Removed key '{}'", key);
        }
        Ok(())
    }
}
