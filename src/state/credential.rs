//! Credential storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow writes an opaque token under a well-known key; the
//! navigation guard only reads it. Browser builds persist to `localStorage`,
//! everything else (tests, non-`csr` builds) uses [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: an unreachable store reads as "no credential". Writes
//! report [`StorageError`] so the login page can surface it.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("refusing to store an empty credential")]
    EmptyToken,
}

/// Key-value capability backing the credential.
pub trait CredentialStore: Send + Sync {
    /// Value stored under `key`, or `None` when unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Store handle shared through Leptos context.
pub type SharedStore = Arc<dyn CredentialStore>;

/// Read the credential under `key`, treating an empty string as absent.
pub fn read_credential(store: &dyn CredentialStore, key: &str) -> Option<String> {
    store.get(key).filter(|token| !token.is_empty())
}

/// In-process store. Used by tests and by builds without a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageStore;

#[cfg(feature = "csr")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

#[cfg(feature = "csr")]
impl CredentialStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// The store the running app should use.
pub fn default_store() -> SharedStore {
    #[cfg(feature = "csr")]
    {
        Arc::new(LocalStorageStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(MemoryStore::default())
    }
}
