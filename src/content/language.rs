use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The ten languages the app ships content and UI strings for. A code picks
/// both the dataset variant and (for the native side) the UI locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    Tr,
    Ru,
    Es,
    Ar,
    Fr,
    De,
    Ja,
    Pt,
    Fa,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 10] = [
        LanguageCode::Tr,
        LanguageCode::En,
        LanguageCode::Ru,
        LanguageCode::Es,
        LanguageCode::Ar,
        LanguageCode::Fr,
        LanguageCode::De,
        LanguageCode::Ja,
        LanguageCode::Pt,
        LanguageCode::Fa,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Tr => "tr",
            LanguageCode::Ru => "ru",
            LanguageCode::Es => "es",
            LanguageCode::Ar => "ar",
            LanguageCode::Fr => "fr",
            LanguageCode::De => "de",
            LanguageCode::Ja => "ja",
            LanguageCode::Pt => "pt",
            LanguageCode::Fa => "fa",
        }
    }

    /// Endonym shown in the language pickers.
    pub fn display_name(self) -> &'static str {
        match self {
            LanguageCode::En => "English",
            LanguageCode::Tr => "Türkçe",
            LanguageCode::Ru => "Русский",
            LanguageCode::Es => "Español",
            LanguageCode::Ar => "العربية",
            LanguageCode::Fr => "Français",
            LanguageCode::De => "Deutsch",
            LanguageCode::Ja => "日本語",
            LanguageCode::Pt => "Português",
            LanguageCode::Fa => "فارسی",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, Error)]
#[error("unknown language code '{0}' (expected one of en, tr, ru, es, ar, fr, de, ja, pt, fa)")]
pub struct UnknownLanguage(String);

impl FromStr for LanguageCode {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for lang in LanguageCode::ALL {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "xx".parse::<LanguageCode>().unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn test_all_covers_ten_distinct_codes() {
        let mut codes: Vec<&str> = LanguageCode::ALL.iter().map(|l| l.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }
}
