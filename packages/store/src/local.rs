//! localStorage backend for the web platform.
//!
//! All failures are silently swallowed (reads come back as `None`, writes do
//! nothing), so a browser with storage disabled degrades to "no session"
//! rather than crashing the app.

use crate::SessionBackend;

/// Browser localStorage backend. Zero-size; a fresh `Storage` handle is
/// fetched from the window on every operation.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
