//! Image URL resolution over session overrides and the baseline config.
//!
//! Precedence for a slot key: a non-blank session override, then a non-blank
//! baseline entry, then the caller's fallback. Reads never fail; a missing or
//! broken storage behaves like an empty override map.

use super::overrides::{self, OverrideMap};
use super::storage::KeyValueStorage;
use crate::constants;
use crate::error::StoreResult;

/// Resolution and persistence of image overrides.
///
/// Views depend on this trait rather than on a concrete store so they can
/// run against any backend.
pub trait ImageStore {
    /// URL to display for `key`.
    fn resolve(&self, key: &str, fallback: &str) -> String;

    /// Whether an override or a baseline entry supplies `key`.
    fn is_customized(&self, key: &str) -> bool;

    /// The persisted override map, or an empty map if it can't be read.
    fn stored_overrides(&self) -> OverrideMap;

    /// Replace the whole persisted override map.
    fn save_overrides(&mut self, map: &OverrideMap) -> StoreResult<()>;

    /// Remove the persisted override map.
    fn clear_all(&mut self) -> StoreResult<()>;

    /// The bundled baseline config.
    fn baseline(&self) -> &OverrideMap;

    /// Baseline overlaid with `edits`, ready to ship as the next baseline.
    fn export_merged_config(&self, edits: &OverrideMap) -> OverrideMap {
        overrides::merge(self.baseline(), edits)
    }
}

/// [`ImageStore`] backed by a [`KeyValueStorage`].
#[derive(Debug, Clone)]
pub struct OverrideStore<S> {
    storage: S,
    baseline: OverrideMap,
    storage_key: String,
}

impl<S: KeyValueStorage> OverrideStore<S> {
    /// Create a store using the bundled baseline config.
    pub fn new(storage: S) -> Self {
        Self::with_baseline(storage, overrides::baseline_config())
    }

    /// Create a store with an explicit baseline.
    pub fn with_baseline(storage: S, baseline: OverrideMap) -> Self {
        Self {
            storage,
            baseline,
            storage_key: constants::storage::OVERRIDES_KEY.to_string(),
        }
    }

    /// Use a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Storage key the override map lives under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Access the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the underlying storage.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn session_overrides(&self) -> Option<OverrideMap> {
        match self.storage.get_item(&self.storage_key) {
            Ok(Some(json)) => overrides::parse_override_map(&json),
            Ok(None) => None,
            Err(e) => {
                log::debug!("Override storage unreadable, using defaults: {}", e);
                None
            }
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        self.session_overrides()
            .and_then(|session| overrides::non_blank(&session, key).map(str::to_string))
            .or_else(|| overrides::non_blank(&self.baseline, key).map(str::to_string))
    }
}

impl<S: KeyValueStorage> ImageStore for OverrideStore<S> {
    fn resolve(&self, key: &str, fallback: &str) -> String {
        self.lookup(key).unwrap_or_else(|| fallback.to_string())
    }

    fn is_customized(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    fn stored_overrides(&self) -> OverrideMap {
        self.session_overrides().unwrap_or_default()
    }

    fn save_overrides(&mut self, map: &OverrideMap) -> StoreResult<()> {
        let json = serde_json::to_string(map)?;
        self.storage.set_item(&self.storage_key, &json)?;
        log::info!("Saved {} image overrides", map.len());
        Ok(())
    }

    fn clear_all(&mut self) -> StoreResult<()> {
        self.storage.remove_item(&self.storage_key)?;
        log::info!("Cleared all image overrides");
        Ok(())
    }

    fn baseline(&self) -> &OverrideMap {
        &self.baseline
    }
}
