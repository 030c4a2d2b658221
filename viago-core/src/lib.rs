//! Core data and logic for the Viago travel search apps.
//!
//! Everything here is browser-free: embedded location and dictionary data,
//! the search query codec, form validation, and calendar math. The `viago-ui`
//! crate layers Dioxus components on top.

pub mod calendar;
pub mod date_locale;
pub mod form;
pub mod i18n;
pub mod language;
pub mod location;
pub mod query;
