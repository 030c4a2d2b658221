//! Translation lookup over the embedded dictionary.
//!
//! The dictionary is a static nested mapping, language code -> key path ->
//! string, embedded at compile time and parsed once. It is never mutated at
//! runtime; switching language only changes which sub-table is consulted.

use crate::language::Language;
use log::warn;
use serde_json::Value;
use std::sync::OnceLock;

static DICTIONARY_JSON: &str = include_str!("../fixtures/dictionary.json");
static DICTIONARY: OnceLock<Value> = OnceLock::new();

fn dictionary() -> &'static Value {
    DICTIONARY.get_or_init(|| {
        serde_json::from_str(DICTIONARY_JSON).expect("embedded dictionary must be valid JSON")
    })
}

/// Resolve a dot-separated key path to a leaf string.
fn lookup<'a>(table: &'a Value, path: &str) -> Option<&'a str> {
    let mut current = table;
    for part in path.split('.') {
        current = current.get(part)?;
    }
    current.as_str()
}

/// Translate `key` for `language`. A missing key degrades to the raw key
/// plus a warning, never a failure.
pub fn translate(language: Language, key: &str) -> String {
    translate_or(language, key, None)
}

/// Translate `key` for `language`, returning `fallback` when the key does
/// not resolve and a fallback was given.
pub fn translate_or(language: Language, key: &str, fallback: Option<&str>) -> String {
    let table = &dictionary()[language.code()];
    if let Some(value) = lookup(table, key) {
        return value.to_string();
    }
    if let Some(fallback) = fallback {
        return fallback.to_string();
    }
    warn!(
        "translation key \"{}\" not found for language \"{}\"",
        key,
        language.code()
    );
    key.to_string()
}
