//! Persistence of the review collection under a single storage key.
//!
//! `ReviewStore` owns the JSON encoding; the `StorageBackend` it wraps only
//! moves strings in and out of a key-value area, so the browser's
//! `localStorage` can be swapped for `MemoryStorage` in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::{error, log};

use crate::error::StoreError;
use crate::models::review::Review;

/// String key-value area with the shape of the Web Storage API.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// The browser's `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window object".to_string()))?;
        window
            .local_storage()
            .map_err(StoreError::unavailable)?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?.get_item(key).map_err(StoreError::read)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?.set_item(key, value).map_err(StoreError::write)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?.remove_item(key).map_err(StoreError::write)
    }
}

/// In-memory storage area. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// The review collection, oldest first, persisted as one JSON array.
#[derive(Debug, Clone)]
pub struct ReviewStore<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> ReviewStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Loads the collection. A missing value, an unreadable store or a value
    /// that does not parse all yield an empty collection; failures are logged.
    pub fn load(&self) -> Vec<Review> {
        match self.try_load() {
            Ok(reviews) => reviews,
            Err(err) => {
                error!("[STORE] Failed to load reviews from '{}': {}", self.key, err);
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Review>, StoreError> {
        match self.backend.get_item(&self.key)? {
            Some(raw) if !raw.is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    /// Replaces the persisted collection with `reviews`.
    pub fn save(&self, reviews: &[Review]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(reviews).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &raw)?;
        log!("[STORE] Saved {} reviews under '{}'", reviews.len(), self.key);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove_item(&self.key)?;
        log!("[STORE] Removed '{}'", self.key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "reviews_test";

    fn create_test_store() -> (ReviewStore<MemoryStorage>, MemoryStorage) {
        let backend = MemoryStorage::new();
        (ReviewStore::new(backend.clone(), TEST_KEY), backend)
    }

    fn review(id: &str, rating: u8) -> Review {
        Review {
            id: id.into(),
            username: format!("user-{}", id),
            comment: format!("comment {}", id),
            rating,
            time: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_load_without_value_is_empty() {
        let (store, _) = create_test_store();
        assert!(store.load().is_empty());
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let (store, backend) = create_test_store();
        let reviews = vec![review("a", 1), review("b", 5)];
        store.save(&reviews).unwrap();

        assert_eq!(store.load(), reviews);
        assert!(backend.raw(TEST_KEY).unwrap().starts_with('['));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let (store, _) = create_test_store();
        store.save(&[review("a", 3), review("b", 4)]).unwrap();
        store.save(&[review("c", 2)]).unwrap();
        assert_eq!(store.load(), vec![review("c", 2)]);
    }

    #[test]
    fn test_corrupt_value_loads_as_empty() {
        let (store, backend) = create_test_store();
        for raw in ["{not json", "null", "{\"id\":\"a\"}", "[{\"rating\":\"five\"}]"] {
            backend.insert_raw(TEST_KEY, raw);
            assert!(store.load().is_empty(), "{} should load as empty", raw);
            assert!(matches!(store.try_load(), Err(StoreError::Parse(_))));
        }
    }

    #[test]
    fn test_empty_string_is_empty_collection() {
        let (store, backend) = create_test_store();
        backend.insert_raw(TEST_KEY, "");
        assert!(store.try_load().unwrap().is_empty());
    }

    #[test]
    fn test_missing_id_is_tolerated() {
        let (store, backend) = create_test_store();
        backend.insert_raw(
            TEST_KEY,
            r#"[{"username":"Ann","comment":"Hi","rating":4,"time":1}]"#,
        );
        let reviews = store.load();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, "");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (store, backend) = create_test_store();
        store.save(&[review("a", 5)]).unwrap();

        store.clear().unwrap();
        assert!(backend.raw(TEST_KEY).is_none());
        assert!(store.load().is_empty());

        store.clear().unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_other_keys_are_untouched() {
        let (store, backend) = create_test_store();
        backend.insert_raw("theme", "dark");
        store.save(&[review("a", 5)]).unwrap();
        store.clear().unwrap();
        assert_eq!(backend.raw("theme").as_deref(), Some("dark"));
    }
}
