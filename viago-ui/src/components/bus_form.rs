//! Bus search form: origin/destination comboboxes, localized date pickers,
//! round-trip toggle, passenger stepper, and submit-time validation.
//!
//! The round-trip checkbox carries no state of its own: it is checked
//! exactly when a return date is set. Picking a departure date always
//! seeds a return two days later (which checks the box); checking the box
//! by hand seeds from the current departure; unchecking clears the return
//! date and leaves the departure alone.

use crate::components::{CalendarMode, Combobox, ErrorMessage, LocalizedCalendar};
use crate::dom;
use crate::state::AppState;
use chrono::{Days, NaiveDate};
use dioxus::prelude::*;
use std::collections::BTreeMap;
use viago_core::form::{BusSearchForm, Field};
use viago_core::location::Location;

/// Days added to the departure when seeding a fresh return date.
const RETURN_SEED_DAYS: u64 = 2;

fn seed_return(departure: NaiveDate) -> Option<NaiveDate> {
    departure.checked_add_days(Days::new(RETURN_SEED_DAYS))
}

fn format_picked(date: Option<NaiveDate>, placeholder: &str) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => placeholder.to_string(),
    }
}

/// New (departure, return) pair after a departure pick: the return is
/// always re-seeded two days out, even on a one-way form.
fn departure_pick(day: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
    (Some(day), seed_return(day))
}

/// Exchanged endpoints, or the pair unchanged when either side is missing.
fn swap_endpoints(from: String, to: String) -> (String, String) {
    if from.is_empty() || to.is_empty() {
        (from, to)
    } else {
        (to, from)
    }
}

/// Round-trip toggle outcome: the new return date, plus whether the return
/// picker should open because there is no departure to seed from yet.
fn toggle_round_trip(
    departure: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
) -> (Option<NaiveDate>, bool) {
    if return_date.is_some() {
        (None, false)
    } else {
        match departure {
            Some(day) => (seed_return(day), false),
            None => (None, true),
        }
    }
}

/// The bus tab's search form.
#[component]
pub fn BusForm() -> Element {
    let state = use_context::<AppState>();

    let mut from = use_signal(String::new);
    let mut to = use_signal(String::new);
    let mut departure = use_signal(|| None::<NaiveDate>);
    let mut return_date = use_signal(|| None::<NaiveDate>);
    let mut passengers = use_signal(|| "1".to_string());
    let mut errors = use_signal(BTreeMap::<Field, String>::new);
    let mut open_departure = use_signal(|| false);
    let mut open_return = use_signal(|| false);

    let round_trip = return_date().is_some();
    let locations = state.locations.read().clone();

    // each side offers every location except the one picked on the other
    let from_options: Vec<Location> = locations
        .iter()
        .filter(|location| location.short_code != to())
        .cloned()
        .collect();
    let to_options: Vec<Location> = locations
        .iter()
        .filter(|location| location.short_code != from())
        .cloned()
        .collect();

    let swap_disabled = from().is_empty() || to().is_empty();
    let on_swap = move |_| {
        let (new_from, new_to) = swap_endpoints(from(), to());
        from.set(new_from);
        to.set(new_to);
    };

    let on_departure_pick = move |(day, _): (NaiveDate, Option<NaiveDate>)| {
        let (new_departure, new_return) = departure_pick(day);
        departure.set(new_departure);
        return_date.set(new_return);
        open_departure.set(false);
    };

    let on_return_pick = move |(start, end): (NaiveDate, Option<NaiveDate>)| {
        departure.set(Some(start));
        return_date.set(end);
        if end.is_some() {
            open_return.set(false);
        }
    };

    // checked state is derived from the return date, so the toggle just
    // flips whichever side is current
    let on_round_trip_toggle = move |_: Event<FormData>| {
        let (new_return, open_picker) = toggle_round_trip(*departure.peek(), *return_date.peek());
        return_date.set(new_return);
        if open_picker {
            open_return.set(true);
        }
    };

    let on_passengers_input = move |evt: Event<FormData>| {
        let digits: String = evt.value().chars().filter(|c| c.is_ascii_digit()).collect();
        passengers.set(digits);
    };

    let on_decrement = move |_| {
        let parsed = passengers.peek().parse::<i64>();
        if let Ok(count) = parsed {
            if count > 1 {
                passengers.set((count - 1).to_string());
            }
        }
    };

    let on_increment = move |_| {
        let count = passengers.peek().parse::<i64>().unwrap_or(0);
        passengers.set((count + 1).to_string());
    };

    let submit_state = state.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let form = BusSearchForm {
            from: from(),
            to: to(),
            departure: departure(),
            return_date: return_date(),
            passengers: passengers(),
        };
        match form.validate() {
            Ok(query) => {
                errors.set(BTreeMap::new());
                dom::navigate_to_search(&query.to_query_string());
            }
            Err(field_errors) => {
                let translated = field_errors
                    .into_iter()
                    .map(|(field, error)| (field, submit_state.t(error.message_key())))
                    .collect();
                errors.set(translated);
            }
        }
    };

    let at_minimum = passengers().parse::<i64>().map_or(true, |count| count <= 1);
    let departure_label = format_picked(departure(), &state.t("bus_form.placeholder_departure"));
    let return_label = format_picked(return_date(), &state.t("bus_form.placeholder_return"));

    let round_trip_text = state.t("common.round_trip");
    let from_title = state.t("bus_form.bus_from");
    let to_title = state.t("bus_form.bus_to");
    let departure_title = state.t("bus_form.departure_date");
    let return_title = state.t("bus_form.placeholder_return");
    let passengers_title = state.t("bus_form.no_of_passengers");
    let search_text = state.t("bus_form.search_button");

    rsx! {
        form {
            style: "background: white; border-radius: 16px; box-shadow: 0 4px 16px rgba(0,0,0,0.08); padding: 24px; display: flex; flex-direction: column; gap: 16px;",
            onsubmit: on_submit,

            label {
                style: "display: flex; align-items: center; gap: 8px; font-size: 14px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: round_trip,
                    onchange: on_round_trip_toggle,
                }
                "{round_trip_text}"
            }

            div {
                style: "display: flex; gap: 12px; align-items: flex-start;",
                div {
                    style: "flex: 1;",
                    p { style: "font-size: 13px; margin: 0 0 4px;", "{from_title}" }
                    Combobox {
                        id: "bus-from".to_string(),
                        placeholder: state.t("bus_form.placeholder_location"),
                        options: from_options,
                        value: from(),
                        errored: errors().contains_key(&Field::From),
                        empty_message: state.t("bus_form.no_results"),
                        on_change: move |code| from.set(code),
                    }
                    ErrorMessage { message: errors().get(&Field::From).cloned() }
                }
                button {
                    r#type: "button",
                    disabled: swap_disabled,
                    style: "margin-top: 24px; border: 1px solid #D1D5DB; background: white; border-radius: 50%; width: 36px; height: 36px; cursor: pointer;",
                    onclick: on_swap,
                    "⇄"
                }
                div {
                    style: "flex: 1;",
                    p { style: "font-size: 13px; margin: 0 0 4px;", "{to_title}" }
                    Combobox {
                        id: "bus-to".to_string(),
                        placeholder: state.t("bus_form.placeholder_location"),
                        options: to_options,
                        value: to(),
                        errored: errors().contains_key(&Field::To),
                        empty_message: state.t("bus_form.no_results"),
                        on_change: move |code| to.set(code),
                    }
                    ErrorMessage { message: errors().get(&Field::To).cloned() }
                }
            }

            div {
                style: "display: flex; gap: 12px; align-items: flex-start;",
                div {
                    style: "flex: 1; position: relative;",
                    p { style: "font-size: 13px; margin: 0 0 4px;", "{departure_title}" }
                    button {
                        r#type: "button",
                        id: "departure-date",
                        style: "width: 100%; text-align: left; padding: 10px 12px; border: 1px solid #D1D5DB; border-radius: 8px; background: white; cursor: pointer; font-size: 14px;",
                        onclick: move |_| {
                            open_return.set(false);
                            let toggled = !*open_departure.peek();
                            open_departure.set(toggled);
                        },
                        "{departure_label}"
                    }
                    ErrorMessage { message: errors().get(&Field::DepartureDate).cloned() }
                    if open_departure() {
                        div {
                            style: "position: absolute; z-index: 60; margin-top: 4px;",
                            LocalizedCalendar {
                                mode: CalendarMode::Single,
                                language: (state.language)(),
                                start: departure(),
                                end: None,
                                on_select: on_departure_pick,
                            }
                        }
                    }
                }
                if round_trip || open_return() {
                    div {
                        style: "flex: 1; position: relative;",
                        p { style: "font-size: 13px; margin: 0 0 4px;", "{return_title}" }
                        button {
                            r#type: "button",
                            id: "return-date",
                            style: "width: 100%; text-align: left; padding: 10px 12px; border: 1px solid #D1D5DB; border-radius: 8px; background: white; cursor: pointer; font-size: 14px;",
                            onclick: move |_| {
                                open_departure.set(false);
                                let toggled = !*open_return.peek();
                                open_return.set(toggled);
                            },
                            "{return_label}"
                        }
                        ErrorMessage { message: errors().get(&Field::ReturnDate).cloned() }
                        if open_return() {
                            div {
                                style: "position: absolute; z-index: 60; margin-top: 4px;",
                                LocalizedCalendar {
                                    mode: CalendarMode::Range,
                                    language: (state.language)(),
                                    start: departure(),
                                    end: return_date(),
                                    on_select: on_return_pick,
                                }
                            }
                        }
                    }
                }
                div {
                    style: "flex: 1;",
                    p { style: "font-size: 13px; margin: 0 0 4px;", "{passengers_title}" }
                    div {
                        style: "display: flex; align-items: center; border: 1px solid #D1D5DB; border-radius: 8px;",
                        button {
                            r#type: "button",
                            disabled: at_minimum,
                            style: "border: none; background: none; padding: 10px 14px; cursor: pointer; font-size: 16px;",
                            onclick: on_decrement,
                            "−"
                        }
                        input {
                            r#type: "text",
                            inputmode: "numeric",
                            value: "{passengers}",
                            style: "flex: 1; border: none; outline: none; text-align: center; font-size: 14px;",
                            oninput: on_passengers_input,
                        }
                        button {
                            r#type: "button",
                            style: "border: none; background: none; padding: 10px 14px; cursor: pointer; font-size: 16px;",
                            onclick: on_increment,
                            "+"
                        }
                    }
                    ErrorMessage { message: errors().get(&Field::Passengers).cloned() }
                }
            }

            button {
                r#type: "submit",
                style: "background: #19C0FF; color: white; border: none; border-radius: 8px; padding: 12px; font-size: 15px; font-weight: 600; cursor: pointer;",
                "{search_text}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_return_adds_two_days() {
        let departure = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(seed_return(departure), NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn test_seed_return_crosses_month_boundary() {
        let departure = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(seed_return(departure), NaiveDate::from_ymd_opt(2024, 2, 2));
    }

    #[test]
    fn test_format_picked() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 5);
        assert_eq!(format_picked(day, "Pick a date"), "05/06/2024");
        assert_eq!(format_picked(None, "Pick a date"), "Pick a date");
    }

    #[test]
    fn test_departure_pick_seeds_return_on_one_way_form() {
        // no prior return date: the pick still seeds one, two days out
        let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let (new_departure, new_return) = departure_pick(day);
        assert_eq!(new_departure, Some(day));
        assert_eq!(new_return, NaiveDate::from_ymd_opt(2024, 6, 12));
    }

    #[test]
    fn test_departure_pick_reseeds_over_existing_return() {
        let day = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let (_, new_return) = departure_pick(day);
        assert_eq!(new_return, NaiveDate::from_ymd_opt(2024, 7, 3));
    }

    #[test]
    fn test_swap_exchanges_both_endpoints() {
        let (from, to) = swap_endpoints("HAN".to_string(), "SGN".to_string());
        assert_eq!(from, "SGN");
        assert_eq!(to, "HAN");
    }

    #[test]
    fn test_swap_is_a_noop_when_either_side_is_empty() {
        let (from, to) = swap_endpoints("HAN".to_string(), String::new());
        assert_eq!(from, "HAN");
        assert_eq!(to, "");
        let (from, to) = swap_endpoints(String::new(), "SGN".to_string());
        assert_eq!(from, "");
        assert_eq!(to, "SGN");
    }

    #[test]
    fn test_uncheck_round_trip_clears_return_only() {
        let departure = NaiveDate::from_ymd_opt(2024, 6, 10);
        let return_date = NaiveDate::from_ymd_opt(2024, 6, 12);
        // the toggle never produces a new departure, so it is preserved
        assert_eq!(toggle_round_trip(departure, return_date), (None, false));
    }

    #[test]
    fn test_check_round_trip_seeds_from_departure() {
        let departure = NaiveDate::from_ymd_opt(2024, 6, 10);
        assert_eq!(
            toggle_round_trip(departure, None),
            (NaiveDate::from_ymd_opt(2024, 6, 12), false)
        );
    }

    #[test]
    fn test_check_round_trip_without_departure_opens_picker() {
        assert_eq!(toggle_round_trip(None, None), (None, true));
    }
}
