//! Persistence store abstraction
//!
//! Roles and permissions can be written to a key-value store and read back
//! when a new session starts. Values are JSON arrays of strings under the
//! [`ROLES_KEY`] and [`PERMISSIONS_KEY`] keys.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::{GateError, GateResult};

/// Store key for the persisted role list.
pub const ROLES_KEY: &str = "roles";

/// Store key for the persisted permission list.
pub const PERMISSIONS_KEY: &str = "permissions";

/// Store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Synchronous key-value store used for persistence.
pub trait KeyValueStore: Send + Debug {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// Encode a list of names for storage.
///
/// # Example
///
/// ```
/// use gates_rbac::store::encode_list;
///
/// let encoded = encode_list(&["admin".to_string(), "editor".to_string()]);
/// assert_eq!(encoded, r#"["admin","editor"]"#);
/// ```
pub fn encode_list(values: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored list of names.
///
/// An absent value decodes to an empty list.
///
/// # Errors
///
/// Returns [`GateError::MalformedPersistedData`] if the value is not a JSON
/// array of strings.
pub fn decode_list(key: &str, raw: Option<&str>) -> GateResult<Vec<String>> {
    match raw {
        None => Ok(Vec::new()),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|e| GateError::MalformedPersistedData {
                key: key.to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// In-memory store.
///
/// Suitable for tests and for hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store.
///
/// Keeps every key in a single JSON object file. A missing file reads as an
/// empty store; each write rewrites the whole file. A write to a file that
/// cannot be parsed starts over from an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = match self.load() {
            Ok(entries) => entries,
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Replacing unreadable store file"
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        fs::write(&self.path, serde_json::to_string_pretty(&entries)?)?;
        Ok(())
    }
}
