//! Month and weekday names per interface language.
//!
//! Static vocabulary only; the calendar widget does the layout. English is
//! the fallback for anything unmapped.

use crate::language::Language;

/// Date formatting vocabulary for one language.
pub struct DateLocale {
    pub months: [&'static str; 12],
    /// Sunday-first weekday abbreviations.
    pub weekdays: [&'static str; 7],
}

static EN: DateLocale = DateLocale {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    weekdays: ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"],
};

static ZH: DateLocale = DateLocale {
    months: [
        "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
        "十二月",
    ],
    weekdays: ["日", "一", "二", "三", "四", "五", "六"],
};

static VI: DateLocale = DateLocale {
    months: [
        "Tháng 1", "Tháng 2", "Tháng 3", "Tháng 4", "Tháng 5", "Tháng 6", "Tháng 7", "Tháng 8",
        "Tháng 9", "Tháng 10", "Tháng 11", "Tháng 12",
    ],
    weekdays: ["CN", "T2", "T3", "T4", "T5", "T6", "T7"],
};

static JA: DateLocale = DateLocale {
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    weekdays: ["日", "月", "火", "水", "木", "金", "土"],
};

static TH: DateLocale = DateLocale {
    months: [
        "มกราคม", "กุมภาพันธ์", "มีนาคม", "เมษายน", "พฤษภาคม", "มิถุนายน", "กรกฎาคม", "สิงหาคม",
        "กันยายน", "ตุลาคม", "พฤศจิกายน", "ธันวาคม",
    ],
    weekdays: ["อา.", "จ.", "อ.", "พ.", "พฤ.", "ศ.", "ส."],
};

static KO: DateLocale = DateLocale {
    months: [
        "1월", "2월", "3월", "4월", "5월", "6월", "7월", "8월", "9월", "10월", "11월", "12월",
    ],
    weekdays: ["일", "월", "화", "수", "목", "금", "토"],
};

static ES: DateLocale = DateLocale {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    weekdays: ["do", "lu", "ma", "mi", "ju", "vi", "sá"],
};

/// Locale for a language.
pub fn date_locale(language: Language) -> &'static DateLocale {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
        Language::Vi => &VI,
        Language::Ja => &JA,
        Language::Th => &TH,
        Language::Ko => &KO,
        Language::Es => &ES,
    }
}

/// Header label for one month panel, e.g. "January 2026".
pub fn month_label(language: Language, year: i32, month: u32) -> String {
    let locale = date_locale(language);
    let name = locale
        .months
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    format!("{name} {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_a_locale() {
        for language in Language::ALL {
            let locale = date_locale(language);
            assert!(locale.months.iter().all(|m| !m.is_empty()));
            assert!(locale.weekdays.iter().all(|w| !w.is_empty()));
        }
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(Language::En, 2026, 1), "January 2026");
        assert_eq!(month_label(Language::Vi, 2026, 12), "Tháng 12 2026");
    }

    #[test]
    fn test_month_label_out_of_range_month() {
        assert_eq!(month_label(Language::En, 2026, 13), " 2026");
    }
}
