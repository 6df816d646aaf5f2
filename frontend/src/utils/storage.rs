use std::{cell::RefCell, collections::HashMap, rc::Rc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{0}` to storage")]
    Write(String),
}

/// String key/value storage backing the browser session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, StorageError> {
    web_sys::window().ok_or_else(|| StorageError::Unavailable("No window object".into()))
}

#[cfg(target_arch = "wasm32")]
pub fn session_storage() -> Result<web_sys::Storage, StorageError> {
    window()?
        .session_storage()
        .map_err(|_| StorageError::Unavailable("No sessionStorage".into()))?
        .ok_or_else(|| StorageError::Unavailable("No sessionStorage".into()))
}

/// `window.sessionStorage`. Tab-scoped, cleared when the tab closes.
#[cfg(target_arch = "wasm32")]
#[derive(Clone)]
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserSessionStorage {
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self {
            storage: session_storage()?,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// In-process storage. Used when no browser storage exists and in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<'a>(items: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        {
            let mut map = storage.items.borrow_mut();
            for (key, value) in items {
                map.insert(key.to_string(), value.to_string());
            }
        }
        storage
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trips_and_removes() {
        let storage = MemoryStorage::new();
        storage.set("token", "abc").unwrap();
        assert_eq!(storage.get("token").as_deref(), Some("abc"));

        storage.remove("token");
        assert!(storage.get("token").is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn memory_storage_clones_share_state() {
        let storage = MemoryStorage::with_items([("user", "{}")]);
        let clone = storage.clone();
        clone.remove("user");
        assert!(storage.get("user").is_none());
    }
}
