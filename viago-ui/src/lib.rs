//! Shared Dioxus components for the Viago travel search apps.
//!
//! This crate provides:
//! - `storage`: Preference persistence behind a small trait
//! - `state`: Reactive AppState with Dioxus Signals
//! - `dom`: Typed wrappers over browser geometry and navigation
//! - `components`: Reusable RSX components (combobox, calendar, forms)

pub mod components;
pub mod dom;
pub mod state;
pub mod storage;
