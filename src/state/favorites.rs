// src/state/favorites.rs

//! Favorite book ids, persisted write-through to a key-value store.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::storage::KeyValueStore;

/// Set of favorite book ids backed by a key-value store.
///
/// The whole set is rewritten on every toggle, so the stored entry always
/// matches the in-memory set.
#[derive(Debug)]
pub struct FavoritesStore<K> {
    store: K,
    key: String,
    ids: BTreeSet<String>,
}

impl<K: KeyValueStore> FavoritesStore<K> {
    /// Load favorites stored under `key`.
    ///
    /// Missing, unreadable or malformed data yields an empty set; the
    /// failure is logged and never returned.
    pub fn load(store: K, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = match store.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    log::warn!("Failed to parse favorites from '{}': {}", key, e);
                    BTreeSet::new()
                }
            },
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                log::warn!("Failed to read favorites from '{}': {}", key, e);
                BTreeSet::new()
            }
        };
        log::debug!("Loaded {} favorites from '{}'", ids.len(), key);

        Self { store, key, ids }
    }

    /// Add `id` if absent, remove it if present, and persist the set.
    ///
    /// Returns whether `id` is a favorite afterwards. If the write fails the
    /// change is rolled back and the error returned.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let added = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };

        if let Err(e) = self.persist() {
            if added {
                self.ids.remove(id);
            } else {
                self.ids.insert(id.to_string());
            }
            return Err(e);
        }

        log::debug!(
            "{} favorite {} ({} total)",
            if added { "Added" } else { "Removed" },
            id,
            self.ids.len()
        );
        Ok(added)
    }

    pub fn has(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Favorite ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Backing store.
    pub fn store(&self) -> &K {
        &self.store
    }

    fn persist(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.ids)?;
        self.store.set(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::storage::{LocalStorage, MemoryStorage};
    use tempfile::TempDir;

    const KEY: &str = "bookFinder-favorites";

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStorage);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(AppError::storage(key, "read-only"))
        }
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut favorites = FavoritesStore::load(MemoryStorage::new(), KEY);
        favorites.toggle("keep").unwrap();
        let before: Vec<String> = favorites.ids().map(String::from).collect();

        assert!(favorites.toggle("A").unwrap());
        assert_eq!(favorites.count(), 2);
        assert!(!favorites.toggle("A").unwrap());

        let after: Vec<String> = favorites.ids().map(String::from).collect();
        assert_eq!(before, after);
        assert_eq!(favorites.count(), 1);
    }

    #[test]
    fn test_every_toggle_writes_through() {
        let mut favorites = FavoritesStore::load(MemoryStorage::new(), KEY);

        favorites.toggle("b").unwrap();
        favorites.toggle("a").unwrap();
        assert_eq!(favorites.store().get(KEY).unwrap().as_deref(), Some(r#"["a","b"]"#));

        favorites.toggle("b").unwrap();
        assert_eq!(favorites.store().get(KEY).unwrap().as_deref(), Some(r#"["a"]"#));
    }

    #[test]
    fn test_round_trip_through_local_storage() {
        let tmp = TempDir::new().unwrap();

        let mut favorites = FavoritesStore::load(LocalStorage::new(tmp.path()), KEY);
        for id in ["zVSbAAAAMAAJ", "nBuA0hmspdMC", "B00B5"] {
            favorites.toggle(id).unwrap();
        }
        let saved: Vec<String> = favorites.ids().map(String::from).collect();

        let reloaded = FavoritesStore::load(LocalStorage::new(tmp.path()), KEY);
        let loaded: Vec<String> = reloaded.ids().map(String::from).collect();
        assert_eq!(saved, loaded);
        assert_eq!(reloaded.count(), 3);
        assert!(reloaded.has("nBuA0hmspdMC"));
    }

    #[test]
    fn test_malformed_data_loads_empty() {
        for raw in ["{not json", r#"{"ids":["a"]}"#, "[1,2,3]", ""] {
            let favorites = FavoritesStore::load(MemoryStorage::with_entry(KEY, raw), KEY);
            assert_eq!(favorites.count(), 0, "input {raw:?}");
        }
    }

    #[test]
    fn test_missing_entry_loads_empty() {
        let favorites = FavoritesStore::load(MemoryStorage::new(), KEY);
        assert_eq!(favorites.count(), 0);
        assert!(!favorites.has("anything"));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let favorites =
            FavoritesStore::load(MemoryStorage::with_entry(KEY, r#"["a","a","b"]"#), KEY);
        assert_eq!(favorites.count(), 2);
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let store = ReadOnlyStore(MemoryStorage::with_entry(KEY, r#"["a"]"#));
        let mut favorites = FavoritesStore::load(store, KEY);

        assert!(favorites.toggle("b").is_err());
        assert!(!favorites.has("b"));

        assert!(favorites.toggle("a").is_err());
        assert!(favorites.has("a"));
        assert_eq!(favorites.count(), 1);
    }
}
