//! String key-value storage
//!
//! LocalStorage in the browser; an in-memory map for native runs and tests.

use std::collections::HashMap;

/// Minimal string storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Store a value. Returns false if the backend refused it.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Browser LocalStorage (WASM only)
///
/// If the browser blocks storage, reads find nothing and writes are refused,
/// so the game still runs without persistence.
#[cfg(target_arch = "wasm32")]
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    /// Open the window's LocalStorage
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, scores will not be saved");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let Some(storage) = self.storage.as_ref() else {
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Failed to write {}: {:?}", key, e);
                false
            }
        }
    }
}
