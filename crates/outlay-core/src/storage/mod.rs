//! Key/value persistence for Outlay
//!
//! # Architecture
//!
//! Storage is a flat string key/value contract. Values are serialized JSON
//! text; keys are the fixed logical names below. Backends implement
//! [`StorageBackend`], and [`Store`] wraps one backend behind typed handles
//! so the rest of the crate never touches raw keys or strings.
//!
//! # Failure model
//!
//! Reading a missing key yields the caller's default. Malformed stored text
//! is logged with a warning and also falls back to the default; a read never
//! fails the caller. Writes do return errors.

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::models::{Expense, Theme};

/// Key holding the serialized expense collection
pub const KEY_EXPENSES: &str = "expenses";
/// Key holding the active theme
pub const KEY_THEME: &str = "theme";
/// Reserved for filter persistence. The active filter is session-only, so
/// nothing writes this key today.
pub const KEY_FILTER: &str = "filter";

/// Contract every storage backend implements.
///
/// Values are opaque text to the backend; serialization happens above it in
/// [`Handle`].
pub trait StorageBackend: Send + Sync {
    /// Backend name for logging
    fn name(&self) -> &str;

    /// Read a key. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// Typed view of one logical key
pub struct Handle<T> {
    key: &'static str,
    backend: Arc<dyn StorageBackend>,
    _marker: PhantomData<T>,
}

impl<T: Serialize + DeserializeOwned> Handle<T> {
    fn new(key: &'static str, backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            key,
            backend,
            _marker: PhantomData,
        }
    }

    /// Load the stored value, falling back to `default` when the key is
    /// missing or its text does not parse. Corruption is logged, never
    /// surfaced as an error.
    pub fn load_or(&self, default: impl FnOnce() -> T) -> T {
        let text = match self.backend.get(self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return default(),
            Err(e) => {
                warn!("Failed to read key '{}': {}", self.key, e);
                return default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    "Malformed value under key '{}', falling back to default: {}",
                    self.key, e
                );
                default()
            }
        }
    }

    /// Serialize and store the value.
    pub fn save(&self, value: &T) -> Result<()> {
        let text = serde_json::to_string(value)?;
        self.backend.set(self.key, &text)
    }

    /// Delete the stored value.
    pub fn clear(&self) -> Result<()> {
        self.backend.remove(self.key)
    }
}

/// The application's storage object, injected into the tracker. One handle
/// per logical key.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Backend name for logging
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Handle for the expense collection
    pub fn expenses(&self) -> Handle<Vec<Expense>> {
        Handle::new(KEY_EXPENSES, Arc::clone(&self.backend))
    }

    /// Handle for the persisted theme
    pub fn theme(&self) -> Handle<Theme> {
        Handle::new(KEY_THEME, Arc::clone(&self.backend))
    }
}

/// Default data directory: the platform-local data dir plus "outlay"
/// (~/.local/share/outlay on Linux).
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("outlay")
}
