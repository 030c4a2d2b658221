//! Localized calendar popover for picking departure and return dates.
//!
//! Renders a fixed number of month panels side by side with the month and
//! weekday names of the active language. Days before today are disabled;
//! weekends keep their own color. The widget is stateless about the
//! selection: picked dates are reported through `on_select` and come back
//! in as props.

use chrono::{Datelike, NaiveDate, Utc};
use dioxus::prelude::*;
use viago_core::calendar::{add_months, is_weekend, month_grid};
use viago_core::date_locale::{date_locale, month_label};
use viago_core::language::Language;

/// Whether one date or a departure/return pair is being picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMode {
    Single,
    Range,
}

/// Next selection state after clicking `day` in range mode: a click on or
/// after the pending start completes the range, anything else restarts it.
pub fn range_click(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    day: NaiveDate,
) -> (NaiveDate, Option<NaiveDate>) {
    match (start, end) {
        (Some(start), None) if day >= start => (start, Some(day)),
        _ => (day, None),
    }
}

/// Calendar with localized labels and disabled past days.
#[component]
pub fn LocalizedCalendar(
    mode: CalendarMode,
    language: Language,
    #[props(!optional)] start: Option<NaiveDate>,
    #[props(!optional)] end: Option<NaiveDate>,
    #[props(default = 2)] months: u32,
    on_select: EventHandler<(NaiveDate, Option<NaiveDate>)>,
) -> Element {
    let today = Utc::now().date_naive();
    let initial = start.unwrap_or(today);
    let mut cursor = use_signal(|| {
        NaiveDate::from_ymd_opt(initial.year(), initial.month(), 1).unwrap_or(initial)
    });

    let on_day = move |day: NaiveDate| match mode {
        CalendarMode::Single => on_select.call((day, None)),
        CalendarMode::Range => {
            let (new_start, new_end) = range_click(start, end, day);
            on_select.call((new_start, new_end));
        }
    };

    rsx! {
        div {
            style: "background: white; border: 1px solid #E5E7EB; border-radius: 12px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); padding: 12px; display: flex; gap: 16px;",
            button {
                r#type: "button",
                style: "border: none; background: none; cursor: pointer; align-self: flex-start;",
                onmousedown: |evt: Event<MouseData>| evt.prevent_default(),
                onclick: move |_| {
                    let previous = add_months(cursor(), -1);
                    cursor.set(previous);
                },
                "‹"
            }
            for offset in 0..months {
                MonthPanel {
                    first_day: add_months(cursor(), offset as i32),
                    language,
                    today,
                    start,
                    end,
                    on_day,
                }
            }
            button {
                r#type: "button",
                style: "border: none; background: none; cursor: pointer; align-self: flex-start;",
                onmousedown: |evt: Event<MouseData>| evt.prevent_default(),
                onclick: move |_| {
                    let next = add_months(cursor(), 1);
                    cursor.set(next);
                },
                "›"
            }
        }
    }
}

/// One month: localized header, weekday row, day grid.
#[component]
fn MonthPanel(
    first_day: NaiveDate,
    language: Language,
    today: NaiveDate,
    #[props(!optional)] start: Option<NaiveDate>,
    #[props(!optional)] end: Option<NaiveDate>,
    on_day: EventHandler<NaiveDate>,
) -> Element {
    let locale = date_locale(language);
    let header = month_label(language, first_day.year(), first_day.month());
    let cells = month_grid(first_day.year(), first_day.month());

    rsx! {
        div {
            p {
                style: "text-align: center; font-weight: 600; margin: 0 0 8px;",
                "{header}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(7, 32px); gap: 2px;",
                for weekday in locale.weekdays {
                    span {
                        style: "text-align: center; font-size: 12px; color: #6B7280;",
                        "{weekday}"
                    }
                }
                for cell in cells {
                    match cell {
                        Some(day) => rsx! {
                            DayCell { day, today, start, end, on_day }
                        },
                        None => rsx! { span {} },
                    }
                }
            }
        }
    }
}

#[component]
fn DayCell(
    day: NaiveDate,
    today: NaiveDate,
    #[props(!optional)] start: Option<NaiveDate>,
    #[props(!optional)] end: Option<NaiveDate>,
    on_day: EventHandler<NaiveDate>,
) -> Element {
    let disabled = day < today;
    let selected = Some(day) == start || Some(day) == end;
    let in_range = match (start, end) {
        (Some(start), Some(end)) => day > start && day < end,
        _ => false,
    };

    let background = if selected {
        "#19C0FF"
    } else if in_range {
        "#EBF9FF"
    } else {
        "transparent"
    };
    let color = if selected {
        "white"
    } else if disabled {
        "#D1D5DB"
    } else if is_weekend(day) {
        "#F43F5E"
    } else {
        "#111827"
    };
    let cursor = if disabled { "default" } else { "pointer" };

    rsx! {
        button {
            r#type: "button",
            disabled: disabled,
            style: "width: 32px; height: 32px; border: none; border-radius: 6px; background: {background}; color: {color}; cursor: {cursor}; font-size: 13px;",
            onmousedown: |evt: Event<MouseData>| evt.prevent_default(),
            onclick: move |_| on_day.call(day),
            "{day.day()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_range_click_starts_fresh() {
        assert_eq!(range_click(None, None, date(2024, 6, 10)), (date(2024, 6, 10), None));
    }

    #[test]
    fn test_range_click_completes_pair() {
        assert_eq!(
            range_click(Some(date(2024, 6, 10)), None, date(2024, 6, 12)),
            (date(2024, 6, 10), Some(date(2024, 6, 12)))
        );
    }

    #[test]
    fn test_range_click_same_day_round_trip() {
        assert_eq!(
            range_click(Some(date(2024, 6, 10)), None, date(2024, 6, 10)),
            (date(2024, 6, 10), Some(date(2024, 6, 10)))
        );
    }

    #[test]
    fn test_range_click_before_start_restarts() {
        assert_eq!(
            range_click(Some(date(2024, 6, 10)), None, date(2024, 6, 8)),
            (date(2024, 6, 8), None)
        );
    }

    #[test]
    fn test_range_click_after_complete_pair_restarts() {
        assert_eq!(
            range_click(
                Some(date(2024, 6, 10)),
                Some(date(2024, 6, 12)),
                date(2024, 6, 20)
            ),
            (date(2024, 6, 20), None)
        );
    }
}
