//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::storage::{LocalStorage, PreferenceStore, LANGUAGE_KEY};
use dioxus::prelude::*;
use std::rc::Rc;
use viago_core::i18n;
use viago_core::language::Language;
use viago_core::location::Location;

/// Shared application state for the Viago apps.
#[derive(Clone)]
pub struct AppState {
    /// Active interface language
    pub language: Signal<Language>,
    /// Bookable locations for the origin/destination comboboxes
    pub locations: Signal<Vec<Location>>,
    store: Rc<dyn PreferenceStore>,
}

/// Language to start in: the persisted choice when present and recognized,
/// otherwise the default.
pub fn restore_language(store: &dyn PreferenceStore) -> Language {
    store
        .get(LANGUAGE_KEY)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

impl AppState {
    /// State backed by browser localStorage. Must be called inside a
    /// component, typically via `use_context_provider`.
    pub fn new() -> Self {
        Self::with_store(Rc::new(LocalStorage))
    }

    /// State backed by a specific preference store.
    pub fn with_store(store: Rc<dyn PreferenceStore>) -> Self {
        Self {
            language: Signal::new(restore_language(store.as_ref())),
            locations: Signal::new(Location::get_location_vector()),
            store,
        }
    }

    /// Switch language and persist the choice.
    pub fn set_language(&mut self, language: Language) {
        self.language.set(language);
        self.store.set(LANGUAGE_KEY, language.code());
    }

    /// Translate a dictionary key in the active language.
    pub fn t(&self, key: &str) -> String {
        i18n::translate((self.language)(), key)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_restore_language_defaults_to_english() {
        let store = MemoryStore::default();
        assert_eq!(restore_language(&store), Language::En);
    }

    #[test]
    fn test_restore_language_reads_persisted_choice() {
        let store = MemoryStore::default();
        store.set(LANGUAGE_KEY, "vi");
        assert_eq!(restore_language(&store), Language::Vi);
    }

    #[test]
    fn test_restore_language_ignores_unrecognized_codes() {
        let store = MemoryStore::default();
        store.set(LANGUAGE_KEY, "klingon");
        assert_eq!(restore_language(&store), Language::En);
    }
}
