//! The storage backend capability.

use serde_json::Value;

use crate::BackendError;

/// What a persistent key/value storage area must offer.
///
/// Keys at this level are fully namespaced - the funnel has already added
/// the application's prefix before a key reaches a backend, and strips it
/// again after. Implementations store JSON values as-is; a read of a key
/// that was never written (or was deleted) returns `Ok(None)`.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn StorageBackend>`.
pub trait StorageBackend {
    /// Read the value under `key`, if any.
    fn read(&mut self, key: &str) -> Result<Option<Value>, BackendError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: Value) -> Result<(), BackendError>;

    /// Delete the value under `key`. Deleting a missing key is not an
    /// error.
    fn delete(&mut self, key: &str) -> Result<(), BackendError>;

    /// All stored keys whose string form begins with `prefix`, in sorted
    /// order. The empty prefix lists every key.
    fn list_prefixed(&mut self, prefix: &str) -> Result<Vec<String>, BackendError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn read(&mut self, key: &str) -> Result<Option<Value>, BackendError> {
        self.as_mut().read(key)
    }

    fn write(&mut self, key: &str, value: Value) -> Result<(), BackendError> {
        self.as_mut().write(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), BackendError> {
        self.as_mut().delete(key)
    }

    fn list_prefixed(&mut self, prefix: &str) -> Result<Vec<String>, BackendError> {
        self.as_mut().list_prefixed(prefix)
    }
}
