//! Client-side persisted state.
//!
//! The only thing the client persists is the active user identifier, under a
//! fixed key in a string key/value store. It is read once when the
//! storefront context is built; a missing value falls back to a configured
//! default. The identifier is not a credential and is not validated here.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::{debug, warn};

use amazin_core::UserId;

/// Storage keys.
pub mod keys {
    /// Key holding the active user identifier.
    pub const USER_ID: &str = "userId";
}

/// Errors reading or writing client storage.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not a JSON object: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// String key/value persistence.
pub trait UserStore: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete a value. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// In-memory store
// =============================================================================

/// Volatile store, for tests and one-shot runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a user identifier.
    #[must_use]
    pub fn with_user(user_id: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(keys::USER_ID.to_string(), user_id.to_string());
        Self {
            values: Mutex::new(values),
        }
    }
}

impl UserStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.values.lock().map_err(|_| StoreError::Poisoned)?;
        values.remove(key);
        Ok(())
    }
}

// =============================================================================
// JSON file store
// =============================================================================

/// Store backed by a JSON object file, e.g. `{"userId": "u1"}`.
///
/// A missing file reads as an empty store; parent directories are created
/// on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, values: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(values)?)?;
        Ok(())
    }
}

impl UserStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

// =============================================================================
// Current user
// =============================================================================

/// Resolution of the active user identifier.
pub struct CurrentUser;

impl CurrentUser {
    /// Read the stored user id, falling back to `default` when none is
    /// stored (or the store cannot be read).
    #[must_use]
    pub fn resolve(storage: &dyn UserStore, default: &str) -> UserId {
        match storage.get(keys::USER_ID) {
            Ok(Some(id)) if !id.is_empty() => {
                debug!(user_id = %id, "Using stored user id");
                UserId::new(id)
            }
            Ok(_) => {
                debug!(user_id = %default, "No stored user id, using default");
                UserId::new(default)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored user id, using default");
                UserId::new(default)
            }
        }
    }

    /// Persist a user id as the active user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn store(storage: &dyn UserStore, user_id: &UserId) -> Result<(), StoreError> {
        storage.set(keys::USER_ID, user_id.as_str())
    }

    /// Forget the active user, so the default applies again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn clear(storage: &dyn UserStore) -> Result<(), StoreError> {
        storage.remove(keys::USER_ID)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("amazin-session-{}-{name}", std::process::id()))
            .join("storage.json")
    }

    #[test]
    fn test_resolve_defaults_when_absent() {
        let store = MemoryStore::new();
        assert_eq!(CurrentUser::resolve(&store, "user123"), UserId::new("user123"));
    }

    #[test]
    fn test_resolve_prefers_stored_value() {
        let store = MemoryStore::with_user("alice");
        assert_eq!(CurrentUser::resolve(&store, "user123"), UserId::new("alice"));
    }

    #[test]
    fn test_store_and_clear() {
        let store = MemoryStore::new();
        CurrentUser::store(&store, &UserId::new("bob")).unwrap();
        assert_eq!(CurrentUser::resolve(&store, "d"), UserId::new("bob"));

        CurrentUser::clear(&store).unwrap();
        assert_eq!(CurrentUser::resolve(&store, "d"), UserId::new("d"));
    }

    #[test]
    fn test_json_file_store_round_trip() {
        let path = temp_path("round-trip");
        let _ = fs::remove_file(&path);
        let store = JsonFileStore::new(&path);

        assert_eq!(store.get(keys::USER_ID).unwrap(), None);
        store.set(keys::USER_ID, "carol").unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get(keys::USER_ID).unwrap(), Some("carol".to_string()));

        reopened.remove(keys::USER_ID).unwrap();
        assert_eq!(store.get(keys::USER_ID).unwrap(), None);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get(keys::USER_ID), Err(StoreError::Corrupt(_))));
        assert_eq!(CurrentUser::resolve(&store, "user123"), UserId::new("user123"));

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
