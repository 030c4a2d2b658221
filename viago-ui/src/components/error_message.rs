//! Inline validation message rendered under a form field.

use dioxus::prelude::*;

/// Field-level error text; renders nothing when there is no error.
#[component]
pub fn ErrorMessage(#[props(!optional)] message: Option<String>) -> Element {
    match message {
        Some(message) => rsx! {
            p {
                style: "color: #DC2626; font-size: 12px; margin: 4px 0 0;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
