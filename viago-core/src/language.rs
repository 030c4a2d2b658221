use serde::{Deserialize, Serialize};

/// Supported interface languages.
///
/// The language code drives both dictionary lookup ([`crate::i18n`]) and
/// date formatting ([`crate::date_locale`]). The selected value is
/// persisted by the UI layer and restored on startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Vi,
    Ja,
    Th,
    Ko,
    Es,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Zh,
        Language::Vi,
        Language::Ja,
        Language::Th,
        Language::Ko,
        Language::Es,
    ];

    /// Two-letter code used in the dictionary and the persisted preference.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Vi => "vi",
            Language::Ja => "ja",
            Language::Th => "th",
            Language::Ko => "ko",
            Language::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    /// English display name.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "Chinese",
            Language::Vi => "Vietnamese",
            Language::Ja => "Japanese",
            Language::Th => "Thai",
            Language::Ko => "Korean",
            Language::Es => "Spanish",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
            Language::Vi => "Tiếng Việt",
            Language::Ja => "日本語",
            Language::Th => "ภาษาไทย",
            Language::Ko => "한국어",
            Language::Es => "Español",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Language::En => "🇬🇧",
            Language::Zh => "🇨🇳",
            Language::Vi => "🇻🇳",
            Language::Ja => "🇯🇵",
            Language::Th => "🇹🇭",
            Language::Ko => "🇰🇷",
            Language::Es => "🇪🇸",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
