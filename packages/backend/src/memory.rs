//! Map-backed storage backend.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::{BackendError, StorageBackend};

/// An in-memory storage backend.
///
/// Useful as the storage area in native deployments and tests, and as the
/// reference implementation of the [`StorageBackend`] contract.
///
/// # Example
///
/// ```rust
/// use funnelstore_backend::{MemoryBackend, StorageBackend};
/// use serde_json::json;
///
/// let mut backend = MemoryBackend::new();
/// backend.write("app.foo", json!("bar")).unwrap();
/// assert_eq!(backend.read("app.foo").unwrap(), Some(json!("bar")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    data: BTreeMap<String, Value>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend with initial contents.
    pub fn with_data(data: BTreeMap<String, Value>) -> Self {
        Self { data }
    }

    /// The stored contents, keyed by fully-namespaced key.
    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&mut self, key: &str) -> Result<Option<Value>, BackendError> {
        Ok(self.data.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), BackendError> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), BackendError> {
        self.data.remove(key);
        Ok(())
    }

    fn list_prefixed(&mut self, prefix: &str) -> Result<Vec<String>, BackendError> {
        Ok(self
            .data
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
