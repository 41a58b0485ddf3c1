//! String-keyed local storage used to persist user preferences.
//!
//! The browser build writes to `window.localStorage`. Native builds keep the
//! same key/value map in a JSON file. [`MemoryStore`] backs tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

// Re-export the backend for the current platform as `PlatformStore`.
#[cfg(target_arch = "wasm32")]
pub use wasm32::LocalStorage as PlatformStore;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::FileStore as PlatformStore;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// A synchronous string key/value store, modelled on the web storage API.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` if the key is absent or unreadable.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Clones share the same underlying map, the way every
/// handle to `localStorage` in one page sees the same data.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::*;

    /// Browser `localStorage`.
    #[derive(Clone, Debug, Default)]
    pub struct LocalStorage;

    impl LocalStorage {
        pub fn open(_config: &crate::config::ShopConfig) -> Self {
            Self
        }

        fn storage() -> Option<web_sys::Storage> {
            web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get_item(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok().flatten()
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let storage = Self::storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::*;
    use std::path::Path;
    use std::path::PathBuf;

    /// A JSON object on disk holding the whole key/value map.
    ///
    /// Every write rewrites the file. An unreadable or corrupt file reads as
    /// an empty map.
    #[derive(Clone, Debug)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn open(config: &crate::config::ShopConfig) -> Self {
            Self::new(&config.prefs_file)
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn read_map(&self) -> HashMap<String, String> {
            std::fs::read_to_string(&self.path)
                .ok()
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default()
        }
    }

    impl KeyValueStore for FileStore {
        fn get_item(&self, key: &str) -> Option<String> {
            self.read_map().remove(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            let write_err = |reason: String| StorageError::Write {
                key: key.to_string(),
                reason,
            };

            let mut map = self.read_map();
            map.insert(key.to_string(), value.to_string());
            let raw = serde_json::to_string_pretty(&map).map_err(|e| write_err(e.to_string()))?;

            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
            }
            std::fs::write(&self.path, raw).map_err(|e| write_err(e.to_string()))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn temp_path(name: &str) -> PathBuf {
            std::env::temp_dir()
                .join(format!("product-feed-test-{}", std::process::id()))
                .join(name)
        }

        #[test]
        fn values_survive_a_new_handle() {
            let path = temp_path("roundtrip.json");
            let _ = std::fs::remove_file(&path);

            let mut store = FileStore::new(&path);
            store.set_item("likedProducts", "[1,2]").unwrap();
            store.set_item("dislikedProducts", "[3]").unwrap();

            let reopened = FileStore::new(&path);
            assert_eq!(reopened.get_item("likedProducts").as_deref(), Some("[1,2]"));
            assert_eq!(reopened.get_item("dislikedProducts").as_deref(), Some("[3]"));
            assert_eq!(reopened.get_item("missing"), None);

            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn corrupt_file_reads_as_empty() {
            let path = temp_path("corrupt.json");
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "not json").unwrap();

            let store = FileStore::new(&path);
            assert_eq!(store.get_item("likedProducts"), None);

            let _ = std::fs::remove_file(&path);
        }
    }
}
