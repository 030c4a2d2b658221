//! Preference persistence behind a small trait.
//!
//! The UI only needs string get/set; `LocalStorage` backs it with the
//! browser's localStorage and degrades to a no-op when that is unavailable
//! (private browsing, storage disabled). `MemoryStore` backs tests.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the persisted interface language.
pub const LANGUAGE_KEY: &str = "language";

/// String key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser localStorage. All failures degrade to "no stored value".
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten();
        if let Some(storage) = storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist preference \"{key}\"");
            }
        }
    }
}

/// In-memory store for tests and non-browser contexts.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get(LANGUAGE_KEY), None);
        store.set(LANGUAGE_KEY, "vi");
        assert_eq!(store.get(LANGUAGE_KEY), Some("vi".to_string()));
        store.set(LANGUAGE_KEY, "en");
        assert_eq!(store.get(LANGUAGE_KEY), Some("en".to_string()));
    }
}
