//! Calendar math for the month-grid date picker.

use chrono::{Datelike, NaiveDate, Weekday};

/// Cells for a Sunday-first month grid: leading `None` padding for the
/// weekday offset of the first day, then every day of the month.
pub fn month_grid(year: i32, month: u32) -> Vec<Option<NaiveDate>> {
    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(day) => day,
        None => return Vec::new(),
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
    let mut day = first;
    while day.month() == month {
        cells.push(Some(day));
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    cells
}

/// First day of the month `delta` months away from `date`'s month.
pub fn add_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = date.year() * 12 + date.month0() as i32 + delta;
    let (year, month0) = (months.div_euclid(12), months.rem_euclid(12));
    NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1).unwrap_or(date)
}

/// Saturday and Sunday get the weekend styling.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
