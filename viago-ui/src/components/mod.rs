//! Reusable Dioxus RSX components for the Viago apps.

mod bus_form;
mod calendar;
mod combobox;
mod error_message;
mod home;
mod language_select;
mod results;

pub use bus_form::BusForm;
pub use calendar::{CalendarMode, LocalizedCalendar};
pub use combobox::{popover_placement, Combobox, Placement};
pub use error_message::ErrorMessage;
pub use home::HomeContent;
pub use language_select::LanguageSelect;
pub use results::SearchResults;
