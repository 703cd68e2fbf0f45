//! Key/value storage backends for persisted overrides.
//!
//! The browser build uses `window.localStorage`; native builds keep one JSON
//! file per key in a directory. [`MemoryStorage`] backs tests and fakes.

use std::collections::HashMap;

use crate::error::{StoreError, StoreResult};

/// Minimal string key/value storage, shaped after the Web Storage API.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> StoreResult<()>;
}

/// In-process storage.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    available: bool,
}

impl MemoryStorage {
    /// Create an empty, available storage.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            available: true,
        }
    }

    /// Create a storage that fails every operation, like a browser with
    /// storage disabled.
    pub fn unavailable() -> Self {
        Self {
            entries: HashMap::new(),
            available: false,
        }
    }

    /// Toggle availability, keeping contents.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    fn check(&self) -> StoreResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(StoreError::storage("storage unavailable"))
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: `<dir>/<key>.json`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    /// Store files inside `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage in the platform config directory, e.g. `~/.config/qhp-site`.
    pub fn default_location() -> Option<Self> {
        let app_dir = crate::constants::storage::APP_DIR;
        if let Some(config_dir) = dirs::config_dir() {
            Some(Self::new(config_dir.join(app_dir)))
        } else {
            dirs::home_dir().map(|home| Self::new(home.join(".config").join(app_dir)))
        }
    }

    /// Directory holding the files.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;

        // Write then rename so readers never see a half-written map
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Browser `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Acquire the page's localStorage.
    pub fn new() -> StoreResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::storage("No window object available"))?;

        let storage = window
            .local_storage()
            .map_err(|e| StoreError::storage(format!("localStorage access error: {:?}", e)))?
            .ok_or_else(|| StoreError::storage("localStorage not available"))?;

        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::storage(format!("Failed to read from localStorage: {:?}", e)))
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::storage(format!("Failed to save to localStorage: {:?}", e)))
    }

    fn remove_item(&mut self, key: &str) -> StoreResult<()> {
        self.storage.remove_item(key).map_err(|e| {
            StoreError::storage(format!("Failed to remove from localStorage: {:?}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_basic() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));

        storage.remove_item("k").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_unavailable() {
        let mut storage = MemoryStorage::unavailable();
        assert!(storage.get_item("k").is_err());
        assert!(storage.set_item("k", "v").is_err());

        storage.set_available(true);
        storage.set_item("k", "v").unwrap();
        storage.set_available(false);
        assert!(storage.get_item("k").is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_storage_persists() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut storage = FileStorage::new(&nested);
        assert_eq!(storage.get_item("qhp_image_urls").unwrap(), None);

        storage.set_item("qhp_image_urls", r#"{"logo":"/x.png"}"#).unwrap();

        let reopened = FileStorage::new(&nested);
        assert_eq!(
            reopened.get_item("qhp_image_urls").unwrap().as_deref(),
            Some(r#"{"logo":"/x.png"}"#)
        );
        assert!(!nested.join("qhp_image_urls.json.tmp").exists());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_file_storage_remove_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.remove_item("never-written").unwrap();

        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
    }
}
