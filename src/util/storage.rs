//! Key-value persistence backends.
//!
//! The session record lives in a tab-scoped, synchronous, string-valued
//! store. `TabStorage` maps that onto the browser's `sessionStorage`;
//! `MemoryStorage` backs tests and any environment without a window object.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Synchronous string key-value store.
///
/// Individual operations are atomic within a tab; callers never need
/// locking on top of this.
pub trait KeyValueStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `sessionStorage`: scoped to the current tab, survives reloads,
/// not shared across tabs. Requires a browser environment; off wasm every
/// operation is a no-op so host tests and builds stay safe.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabStorage;

#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

impl KeyValueStorage for TabStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = session_storage() {
                if storage.set_item(key, value).is_err() {
                    log::warn!("tab storage write failed for key {key}");
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store for tests and non-browser fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.lock().unwrap().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}
