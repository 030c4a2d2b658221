//! Dropdown selector for the interface language.

use crate::state::AppState;
use dioxus::prelude::*;
use viago_core::language::Language;

/// Language dropdown. Updates and persists the choice through AppState.
#[component]
pub fn LanguageSelect() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.language)();

    let on_change = move |evt: Event<FormData>| {
        if let Some(language) = Language::from_code(&evt.value()) {
            state.set_language(language);
        }
    };

    rsx! {
        select {
            id: "language-select",
            style: "padding: 6px 10px; border: 1px solid #D1D5DB; border-radius: 8px; font-size: 14px; background: white;",
            onchange: on_change,
            for language in Language::ALL {
                option {
                    value: "{language.code()}",
                    selected: language == selected,
                    "{language.flag()} {language.label()} ({language.native_name()})"
                }
            }
        }
    }
}
