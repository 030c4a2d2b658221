//! Viago travel search web app.
//!
//! One WASM binary, two views: the search form on a bare URL, the results
//! summary once a query string is present. Navigation happens by replacing
//! `location.search`, so the browser back button returns to the form.

use dioxus::prelude::*;
use viago_core::query::ResultsQuery;
use viago_ui::components::{HomeContent, LanguageSelect, SearchResults};
use viago_ui::dom;
use viago_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("viago-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    // the query string is fixed for the lifetime of the page load
    let query = use_hook(dom::current_query_string);
    let show_results = !ResultsQuery::parse(&query).mode.is_empty();

    rsx! {
        div {
            style: "min-height: 100vh; background: #F9FAFB; font-family: system-ui, -apple-system, sans-serif;",
            header {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: white; border-bottom: 1px solid #E5E7EB;",
                a {
                    href: "/",
                    style: "font-size: 20px; font-weight: 700; color: #19C0FF; text-decoration: none;",
                    "Viago"
                }
                LanguageSelect {}
            }
            if show_results {
                SearchResults { query }
            } else {
                HomeContent {}
            }
        }
    }
}
