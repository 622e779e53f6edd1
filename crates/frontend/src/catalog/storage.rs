//! Persistence seam for the single-slot catalog cache.
//!
//! The loader only sees the [`CatalogStore`] trait, so the medium is
//! swappable; the browser implementation sits on `localStorage` with the
//! published two-key layout (serialized entry + numeric timestamp), both
//! written and cleared together.

use contracts::catalog::cache::CacheEntry;
use web_sys::window;

/// localStorage key for the serialized `{products, categories, timestamp}`.
const CATALOG_KEY: &str = "storefront.catalog";
/// localStorage key for the epoch-millis write timestamp.
const CATALOG_TS_KEY: &str = "storefront.catalog.ts";

/// Single named slot holding the last fetched catalog.
pub trait CatalogStore {
    /// The stored entry, or `None` when absent or unreadable.
    fn read(&self) -> Option<CacheEntry>;
    /// Overwrites any previous entry. Best-effort: storage failures (quota,
    /// disabled storage) are logged and swallowed.
    fn write(&self, entry: &CacheEntry);
    /// Removes the stored entry. Part of the manual retry action.
    fn clear(&self);
}

/// `localStorage`-backed store, scoped to one browser profile.
#[derive(Clone, Copy, Default)]
pub struct LocalCatalogStore;

impl LocalCatalogStore {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CatalogStore for LocalCatalogStore {
    fn read(&self) -> Option<CacheEntry> {
        let storage = Self::storage()?;
        let raw = storage.get_item(CATALOG_KEY).ok().flatten()?;
        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("discarding unreadable catalog cache: {e}");
                None
            }
        }
    }

    fn write(&self, entry: &CacheEntry) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(entry) {
            Ok(json) => {
                let _ = storage.set_item(CATALOG_KEY, &json);
                let _ = storage.set_item(CATALOG_TS_KEY, &entry.timestamp_ms.to_string());
            }
            Err(e) => log::warn!("could not serialize catalog cache: {e}"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(CATALOG_KEY);
            let _ = storage.remove_item(CATALOG_TS_KEY);
        }
    }
}

/// In-memory store used by loader unit tests.
#[cfg(test)]
pub struct MemoryCatalogStore(pub std::cell::RefCell<Option<CacheEntry>>);

#[cfg(test)]
impl MemoryCatalogStore {
    pub fn empty() -> Self {
        Self(std::cell::RefCell::new(None))
    }

    pub fn with_entry(entry: CacheEntry) -> Self {
        Self(std::cell::RefCell::new(Some(entry)))
    }
}

#[cfg(test)]
impl CatalogStore for MemoryCatalogStore {
    fn read(&self) -> Option<CacheEntry> {
        self.0.borrow().clone()
    }

    fn write(&self, entry: &CacheEntry) {
        *self.0.borrow_mut() = Some(entry.clone());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::cache::{CacheEntry, FRESHNESS_WINDOW_MS};
    use contracts::catalog::sample::sample_catalog;

    #[test]
    fn round_trip_preserves_entry_and_freshness() {
        let store = MemoryCatalogStore::empty();
        assert!(store.read().is_none());

        let entry = CacheEntry::new(sample_catalog(), 1_000);
        store.write(&entry);

        let back = store.read().expect("entry should be stored");
        assert_eq!(back, entry);
        assert!(back.is_fresh(1_000 + 1));
        // After the window the entry is stale but still readable.
        assert!(!back.is_fresh(1_000 + FRESHNESS_WINDOW_MS));
        assert_eq!(store.read(), Some(entry));
    }

    #[test]
    fn write_overwrites_single_slot() {
        let store = MemoryCatalogStore::empty();
        store.write(&CacheEntry::new(sample_catalog(), 1));
        store.write(&CacheEntry::new(sample_catalog(), 2));
        assert_eq!(store.read().unwrap().timestamp_ms, 2);
    }

    #[test]
    fn clear_empties_the_slot() {
        let store = MemoryCatalogStore::with_entry(CacheEntry::new(sample_catalog(), 1));
        store.clear();
        assert!(store.read().is_none());
    }
}
