//! Search results view fed by the query string.
//!
//! Renders whatever subset of the query survived the trip through the URL:
//! unknown location codes render as blank, unparseable dates as "-", and
//! the return row disappears entirely for one-way searches.

use crate::state::AppState;
use dioxus::prelude::*;
use viago_core::location::english_name_for;
use viago_core::query::{format_day, ResultsQuery};

/// Results page content for a raw query string.
#[component]
pub fn SearchResults(query: String) -> Element {
    let state = use_context::<AppState>();
    let parsed = ResultsQuery::parse(&query);
    let locations = state.locations.read().clone();

    let title = state.t("search_page.title");
    let from_value = english_name_for(&locations, &parsed.from);
    let to_value = english_name_for(&locations, &parsed.to);
    let departure_value = format_day(&parsed.dep);
    let return_value = format_day(&parsed.ret);
    let passengers_value = if parsed.pax.is_empty() {
        "-".to_string()
    } else {
        parsed.pax.clone()
    };

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; padding: 32px 16px;",
            h1 { style: "font-size: 24px; margin: 0 0 16px;", "{title}" }
            div {
                style: "background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
                ResultRow { label: state.t("search_page.from_label"), value: from_value }
                ResultRow { label: state.t("search_page.to_label"), value: to_value }
                ResultRow {
                    label: state.t("search_page.departure_date_label"),
                    value: departure_value,
                }
                if parsed.has_return() {
                    ResultRow {
                        label: state.t("search_page.return_date_label"),
                        value: return_value,
                    }
                }
                ResultRow {
                    label: state.t("search_page.passengers_label"),
                    value: passengers_value,
                }
            }
        }
    }
}

/// One label/value line of the summary card.
#[component]
fn ResultRow(label: String, value: String) -> Element {
    let label = label.to_uppercase();
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; padding: 8px 0; border-bottom: 1px solid #F3F4F6; font-size: 14px;",
            span { style: "color: #6B7280; letter-spacing: 0.05em;", "{label}" }
            span { style: "font-weight: 600;", "{value}" }
        }
    }
}
