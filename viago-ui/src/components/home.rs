//! Landing view: hero banner, travel-mode tabs, and the active tab's form.

use crate::components::BusForm;
use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Bus,
    Hotel,
    Flight,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Bus, Tab::Hotel, Tab::Flight];

    fn icon(self) -> &'static str {
        match self {
            Tab::Bus => "🚌",
            Tab::Hotel => "🏨",
            Tab::Flight => "✈️",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Tab::Bus => "tabs.bus",
            Tab::Hotel => "tabs.hotel",
            Tab::Flight => "tabs.flight",
        }
    }
}

/// Home page content. Only the bus tab has a working form; the others show
/// a placeholder.
#[component]
pub fn HomeContent() -> Element {
    let state = use_context::<AppState>();
    let mut active = use_signal(|| Tab::Bus);

    let hero_title = state.t("hero.title");
    let hero_subtitle = state.t("hero.subtitle");
    let no_data = state.t("common.no_data");

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 32px 16px;",
            div {
                style: "text-align: center; margin-bottom: 32px;",
                h1 { style: "font-size: 32px; margin: 0 0 8px;", "{hero_title}" }
                p { style: "color: #6B7280; margin: 0;", "{hero_subtitle}" }
            }
            div {
                style: "display: flex; gap: 8px; justify-content: center; margin-bottom: 24px;",
                for tab in Tab::ALL {
                    TabButton {
                        icon: tab.icon().to_string(),
                        label: state.t(tab.label_key()),
                        active: tab == active(),
                        on_click: move |_| active.set(tab),
                    }
                }
            }
            match active() {
                Tab::Bus => rsx! { BusForm {} },
                _ => rsx! {
                    p {
                        style: "text-align: center; color: #6B7280; padding: 48px 0;",
                        "{no_data}"
                    }
                },
            }
        }
    }
}

#[component]
fn TabButton(icon: String, label: String, active: bool, on_click: EventHandler<()>) -> Element {
    let (background, color) = if active {
        ("#19C0FF", "white")
    } else {
        ("white", "#111827")
    };
    rsx! {
        button {
            r#type: "button",
            style: "display: flex; align-items: center; gap: 6px; padding: 10px 20px; border: 1px solid #E5E7EB; border-radius: 999px; background: {background}; color: {color}; cursor: pointer; font-size: 14px;",
            onclick: move |_| on_click.call(()),
            span { "{icon}" }
            span { "{label}" }
        }
    }
}
