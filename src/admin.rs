//! Admin panel editing session.
//!
//! The operator edits an in-memory copy of the override map. Nothing is
//! persisted until [`AdminSession::save`], except [`AdminSession::clear_all`]
//! which wipes storage immediately.

use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;
use web_time::Instant;

use crate::constants;
use crate::error::StoreResult;
use crate::images::{self, ImageGroup, ImageSlot, ImageStore, OverrideMap, registry};

/// Everything the admin panel needs to render one slot row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotView {
    /// Slot key
    pub key: &'static str,
    /// Current value of the edit field
    pub current_url: String,
    /// Image to preview: the edit if set, else the bundled default
    pub display_src: String,
    /// Whether the edit field holds a non-blank URL
    pub is_custom: bool,
    /// Whether the slot ships a default asset
    pub has_default: bool,
    /// Whether this row's preview is expanded
    pub previewing: bool,
}

/// In-memory edit state over an [`ImageStore`].
#[derive(Debug)]
pub struct AdminSession<S> {
    store: S,
    edits: OverrideMap,
    saved_flash: Duration,
    saved_until: Option<Instant>,
    collapsed: HashSet<String>,
    preview: Option<String>,
}

impl<S: ImageStore> AdminSession<S> {
    /// Open a session, loading the persisted overrides as the edit map.
    pub fn open(store: S) -> Self {
        let edits = store.stored_overrides();
        log::debug!("Admin: opened with {} stored overrides", edits.len());
        Self {
            store,
            edits,
            saved_flash: Duration::from_millis(constants::admin::SAVED_FLASH_MS),
            saved_until: None,
            collapsed: HashSet::new(),
            preview: None,
        }
    }

    /// Set how long the saved indicator stays visible.
    pub fn with_saved_flash(mut self, duration: Duration) -> Self {
        self.saved_flash = duration;
        self
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Current edit map.
    pub fn edits(&self) -> &OverrideMap {
        &self.edits
    }

    /// Edit field value for `key` (empty if untouched).
    pub fn url(&self, key: &str) -> &str {
        self.edits.get(key).map(String::as_str).unwrap_or("")
    }

    /// Change the edit for `key`.
    pub fn set_url(&mut self, key: &str, value: &str) {
        self.edits.insert(key.to_string(), value.to_string());
        self.saved_until = None;
    }

    /// Drop the edit for `key`. Persisted on the next save.
    pub fn clear(&mut self, key: &str) {
        self.edits.remove(key);
        self.saved_until = None;
    }

    /// Remove the stored map right away, then drop every edit.
    ///
    /// Edits are kept if storage cannot be cleared.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.store.clear_all()?;
        self.edits.clear();
        self.saved_until = None;
        Ok(())
    }

    /// Persist the whole edit map, replacing what was stored.
    pub fn save(&mut self, now: Instant) -> StoreResult<()> {
        self.store.save_overrides(&self.edits)?;
        self.saved_until = Some(now + self.saved_flash);
        Ok(())
    }

    /// Whether the "saved" indicator should be shown at `now`.
    pub fn is_saved_visible(&self, now: Instant) -> bool {
        self.saved_until.is_some_and(|until| now < until)
    }

    /// Baseline overlaid with the current edits.
    pub fn export_merged_config(&self) -> OverrideMap {
        self.store.export_merged_config(&self.edits)
    }

    /// Exported config as pretty-printed JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.export_merged_config())
    }

    /// Suggested file name for the export.
    pub fn export_filename(&self) -> &'static str {
        constants::admin::EXPORT_FILENAME
    }

    /// Number of slots in the registry.
    pub fn total_slots(&self) -> usize {
        registry::total_slots()
    }

    /// Number of edits holding a non-blank URL.
    pub fn custom_count(&self) -> usize {
        images::count_non_blank(&self.edits)
    }

    /// Number of slots in `group` with a non-blank edit.
    pub fn group_custom_count(&self, group: &ImageGroup) -> usize {
        group
            .items
            .iter()
            .filter(|slot| images::non_blank(&self.edits, slot.key).is_some())
            .count()
    }

    /// Row data for `slot`.
    pub fn slot_view(&self, slot: &ImageSlot) -> SlotView {
        let current_url = self.url(slot.key).to_string();
        let is_custom = !images::is_blank(&current_url);
        let display_src = if is_custom {
            current_url.clone()
        } else {
            slot.default_src.to_string()
        };

        SlotView {
            key: slot.key,
            current_url,
            display_src,
            is_custom,
            has_default: slot.has_default(),
            previewing: self.preview.as_deref() == Some(slot.key),
        }
    }

    /// Collapse or expand a group.
    pub fn toggle_group(&mut self, title: &str) {
        if !self.collapsed.remove(title) {
            self.collapsed.insert(title.to_string());
        }
    }

    /// Whether a group is collapsed.
    pub fn is_collapsed(&self, title: &str) -> bool {
        self.collapsed.contains(title)
    }

    /// Show the preview for `key`, or hide it if it is already shown.
    pub fn toggle_preview(&mut self, key: &str) {
        if self.preview.as_deref() == Some(key) {
            self.preview = None;
        } else {
            self.preview = Some(key.to_string());
        }
    }

    /// Slot whose preview is open.
    pub fn preview_key(&self) -> Option<&str> {
        self.preview.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{KeyValueStorage, MemoryStorage, OverrideStore};

    fn map(entries: &[(&str, &str)]) -> OverrideMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn session_with(
        stored: &[(&str, &str)],
        baseline: &[(&str, &str)],
    ) -> AdminSession<OverrideStore<MemoryStorage>> {
        let mut store = OverrideStore::with_baseline(MemoryStorage::new(), map(baseline));
        if !stored.is_empty() {
            store.save_overrides(&map(stored)).unwrap();
        }
        AdminSession::open(store)
    }

    #[test]
    fn test_open_loads_stored_overrides() {
        let session = session_with(&[("logo", "/x.png")], &[]);
        assert_eq!(session.url("logo"), "/x.png");
        assert_eq!(session.url("gallery-1"), "");
    }

    #[test]
    fn test_edits_not_persisted_until_save() {
        let mut session = session_with(&[], &[]);
        session.set_url("logo", "https://cdn/x.png");
        assert_eq!(session.store().resolve("logo", "/logo.jpg"), "/logo.jpg");

        session.save(Instant::now()).unwrap();
        assert_eq!(session.store().resolve("logo", "/logo.jpg"), "https://cdn/x.png");
    }

    #[test]
    fn test_clear_is_deferred() {
        let mut session = session_with(&[("logo", "/x.png"), ("gallery-1", "/g.png")], &[]);
        session.clear("logo");
        assert_eq!(session.url("logo"), "");
        assert_eq!(session.store().resolve("logo", "/logo.jpg"), "/x.png");

        session.save(Instant::now()).unwrap();
        assert_eq!(session.store().resolve("logo", "/logo.jpg"), "/logo.jpg");
        assert_eq!(session.store().resolve("gallery-1", ""), "/g.png");
    }

    #[test]
    fn test_clear_all_is_immediate() {
        let mut session = session_with(&[("logo", "/x.png")], &[("logo", "/baseline.png")]);
        session.clear_all().unwrap();

        assert!(session.edits().is_empty());
        assert_eq!(session.store().resolve("logo", "/logo.jpg"), "/baseline.png");
        assert!(
            session
                .into_store()
                .storage()
                .get_item(constants::storage::OVERRIDES_KEY)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_saved_flash() {
        let mut session = session_with(&[], &[]);
        let t0 = Instant::now();
        assert!(!session.is_saved_visible(t0));

        session.save(t0).unwrap();
        assert!(session.is_saved_visible(t0 + Duration::from_millis(2999)));
        assert!(!session.is_saved_visible(t0 + Duration::from_millis(3000)));

        session.save(t0).unwrap();
        session.set_url("logo", "/y.png");
        assert!(!session.is_saved_visible(t0));
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let store = OverrideStore::with_baseline(MemoryStorage::unavailable(), OverrideMap::new());
        let mut session = AdminSession::open(store);
        session.set_url("logo", "/x.png");

        let t0 = Instant::now();
        assert!(session.save(t0).is_err());
        assert!(!session.is_saved_visible(t0));
        assert_eq!(session.url("logo"), "/x.png");
    }

    #[test]
    fn test_failed_clear_all_keeps_edits() {
        let mut store = session_with(&[("logo", "/x.png")], &[]).into_store();
        store.storage_mut().set_available(false);
        let mut session = AdminSession::open(store);
        session.set_url("gallery-1", "/g.png");

        assert!(session.clear_all().is_err());
        assert_eq!(session.url("gallery-1"), "/g.png");
        assert_eq!(session.custom_count(), 1);

        let mut store = session.into_store();
        store.storage_mut().set_available(true);
        assert_eq!(store.resolve("logo", "/logo.jpg"), "/x.png");
    }

    #[test]
    fn test_export_overlays_edits() {
        let mut session = session_with(&[], &[("logo", "/baseline.png"), ("gallery-1", "/g1.png")]);
        session.set_url("logo", "https://cdn/x.png");
        session.set_url("gallery-2", "/g2.png");

        assert_eq!(
            session.export_merged_config(),
            map(&[
                ("logo", "https://cdn/x.png"),
                ("gallery-1", "/g1.png"),
                ("gallery-2", "/g2.png"),
            ])
        );

        let json = session.export_json().unwrap();
        let parsed: OverrideMap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session.export_merged_config());
        assert_eq!(session.export_filename(), "siteConfig.json");
    }

    #[test]
    fn test_counters() {
        let mut session = session_with(&[], &[]);
        session.set_url("gallery-1", "/g1.png");
        session.set_url("gallery-2", "   ");
        session.set_url("logo", "/logo.png");

        assert_eq!(session.total_slots(), 20);
        assert_eq!(session.custom_count(), 2);

        let gallery = registry::find_group("3D Gallery Carousel").unwrap();
        assert_eq!(session.group_custom_count(gallery), 1);
    }

    #[test]
    fn test_slot_view() {
        let mut session = session_with(&[], &[]);
        let logo = registry::find_slot("logo").unwrap();

        let view = session.slot_view(logo);
        assert!(!view.is_custom);
        assert!(view.has_default);
        assert_eq!(view.display_src, "/logo.jpg");

        session.set_url("logo", "https://cdn/x.png");
        session.toggle_preview("logo");
        let view = session.slot_view(logo);
        assert!(view.is_custom);
        assert!(view.previewing);
        assert_eq!(view.display_src, "https://cdn/x.png");

        let hero = registry::find_slot("hero-bg-image").unwrap();
        let view = session.slot_view(hero);
        assert!(!view.has_default);
        assert_eq!(view.display_src, "");
    }

    #[test]
    fn test_toggles() {
        let mut session = session_with(&[], &[]);
        session.toggle_group("Hero Section");
        assert!(session.is_collapsed("Hero Section"));
        session.toggle_group("Hero Section");
        assert!(!session.is_collapsed("Hero Section"));

        session.toggle_preview("logo");
        session.toggle_preview("gallery-1");
        assert_eq!(session.preview_key(), Some("gallery-1"));
        session.toggle_preview("gallery-1");
        assert_eq!(session.preview_key(), None);
    }
}
