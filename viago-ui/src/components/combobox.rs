//! Searchable location combobox with a viewport-aware popover.
//!
//! The input doubles as the search field. While the list is open the input
//! shows the typed filter text; once closed it shows the selected location's
//! label. The filter text survives a close and is reused on the next focus.
//! Selection is reported to the parent as a short code through `on_change`;
//! the parent owns the value.

use crate::dom;
use dioxus::prelude::*;
use viago_core::location::Location;

/// Estimated open-list height used before the list is measurable.
const MENU_MAX_HEIGHT: f64 = 240.0;

/// Which side of the input the popover opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    #[default]
    Below,
    Above,
}

/// Input-side events that decide whether the list is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListEvent {
    Focus,
    Input,
    Blur,
    Pick,
    Clear,
}

/// Open flag after an event. Only focusing and typing keep the list open;
/// picking an option and pressing the clear control both close it.
fn list_open_after(event: ListEvent) -> bool {
    matches!(event, ListEvent::Focus | ListEvent::Input)
}

/// Prefer opening below; flip above only when below would overflow the
/// viewport and above actually fits.
pub fn popover_placement(
    input_top: f64,
    input_bottom: f64,
    menu_height: f64,
    viewport_height: f64,
) -> Placement {
    if input_bottom + menu_height > viewport_height && input_top - menu_height >= 0.0 {
        Placement::Above
    } else {
        Placement::Below
    }
}

/// Searchable dropdown over a list of locations.
///
/// `value` is the selected short code (empty for none); `options` is the
/// already-scoped candidate list. Selecting an option or pressing the clear
/// control calls `on_change` with the new short code (empty on clear).
#[component]
pub fn Combobox(
    id: String,
    placeholder: String,
    options: Vec<Location>,
    value: String,
    errored: bool,
    empty_message: String,
    on_change: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut typed = use_signal(String::new);
    let mut placement = use_signal(Placement::default);

    let selected = options
        .iter()
        .find(|location| location.short_code == value)
        .cloned();

    // While open the input is the filter; closed it mirrors the selection,
    // or keeps the raw text when nothing was picked.
    let display = if open() {
        typed()
    } else {
        match &selected {
            Some(location) => location.display_label(),
            None => typed(),
        }
    };

    let filtered: Vec<Location> = options
        .iter()
        .filter(|location| location.matches_search(&typed()))
        .cloned()
        .collect();

    let input_id = id.clone();
    let reposition = move || {
        if let Some(rect) = dom::element_rect(&input_id) {
            placement.set(popover_placement(
                rect.top,
                rect.bottom,
                MENU_MAX_HEIGHT,
                dom::viewport_height(),
            ));
        }
    };

    // keep an open list on the right side while the user resizes or scrolls
    let mut viewport_reposition = reposition.clone();
    use_hook(move || {
        dom::on_viewport_change(move || {
            if *open.peek() {
                viewport_reposition();
            }
        });
    });

    let mut reposition_on_focus = reposition;
    let on_focus = move |_| {
        reposition_on_focus();
        open.set(list_open_after(ListEvent::Focus));
    };

    let on_input = move |evt: Event<FormData>| {
        typed.set(evt.value());
        open.set(list_open_after(ListEvent::Input));
    };

    let on_blur = move |_| {
        open.set(list_open_after(ListEvent::Blur));
    };

    let on_clear = move |_| {
        typed.set(String::new());
        on_change.call(String::new());
        open.set(list_open_after(ListEvent::Clear));
    };

    let border_color = if errored { "#DC2626" } else { "#D1D5DB" };
    let list_position = match placement() {
        Placement::Below => "top: calc(100% + 4px);",
        Placement::Above => "bottom: calc(100% + 4px);",
    };

    rsx! {
        div {
            style: "position: relative;",
            div {
                style: "display: flex; align-items: center; border: 1px solid {border_color}; border-radius: 8px; padding: 0 8px;",
                input {
                    id: "{id}",
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "{placeholder}",
                    value: "{display}",
                    style: "flex: 1; border: none; outline: none; padding: 10px 4px; font-size: 14px;",
                    onfocus: on_focus,
                    oninput: on_input,
                    onblur: on_blur,
                }
                if !value.is_empty() {
                    button {
                        r#type: "button",
                        style: "border: none; background: none; cursor: pointer; color: #6B7280;",
                        // keep the input focused; the handler closes the list itself
                        onmousedown: |evt: Event<MouseData>| evt.prevent_default(),
                        onclick: on_clear,
                        "✕"
                    }
                } else {
                    span { style: "color: #6B7280;", "▾" }
                }
            }
            if open() {
                ul {
                    style: "position: absolute; {list_position} left: 0; right: 0; max-height: {MENU_MAX_HEIGHT}px; overflow-y: auto; margin: 0; padding: 4px; list-style: none; background: white; border: 1px solid #E5E7EB; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); z-index: 50;",
                    if filtered.is_empty() {
                        li {
                            style: "padding: 8px; color: #6B7280; font-size: 14px;",
                            "{empty_message}"
                        }
                    }
                    for location in filtered {
                        ComboboxOption {
                            location: location.clone(),
                            selected: location.short_code == value,
                            on_pick: move |code: String| {
                                on_change.call(code);
                                open.set(list_open_after(ListEvent::Pick));
                            },
                        }
                    }
                }
            }
        }
    }
}

/// One row of the open list.
#[component]
fn ComboboxOption(location: Location, selected: bool, on_pick: EventHandler<String>) -> Element {
    let code = location.short_code.clone();
    rsx! {
        li {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px; border-radius: 6px; cursor: pointer; font-size: 14px;",
            // a mousedown would blur the input and close the list before
            // the click lands
            onmousedown: |evt: Event<MouseData>| evt.prevent_default(),
            onclick: move |_| on_pick.call(code.clone()),
            span { "{location.display_label()}" }
            if selected {
                span { style: "color: #19C0FF;", "✓" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_prefers_below() {
        assert_eq!(popover_placement(100.0, 140.0, 240.0, 800.0), Placement::Below);
    }

    #[test]
    fn test_placement_flips_above_near_bottom() {
        assert_eq!(popover_placement(700.0, 740.0, 240.0, 800.0), Placement::Above);
    }

    #[test]
    fn test_placement_stays_below_when_above_does_not_fit() {
        // cramped viewport: neither side fits, keep the default
        assert_eq!(popover_placement(100.0, 140.0, 240.0, 300.0), Placement::Below);
    }

    #[test]
    fn test_placement_boundary_exactly_fits_below() {
        assert_eq!(popover_placement(400.0, 560.0, 240.0, 800.0), Placement::Below);
    }

    #[test]
    fn test_clear_control_closes_the_list() {
        assert!(!list_open_after(ListEvent::Clear));
    }

    #[test]
    fn test_only_focus_and_typing_keep_the_list_open() {
        assert!(list_open_after(ListEvent::Focus));
        assert!(list_open_after(ListEvent::Input));
        assert!(!list_open_after(ListEvent::Blur));
        assert!(!list_open_after(ListEvent::Pick));
    }
}
