use serde::{Deserialize, Serialize};

/// Recognition/synthesis languages offered in the UI.
///
/// The set is fixed: the same six entries drive the dropdown, the
/// recognition engine and the synthesis voice selection. Tags are BCP 47
/// as understood by the Web Speech API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    specta::Type,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    #[strum(serialize = "en-US")]
    EnglishUs,
    #[serde(rename = "en-IN")]
    #[strum(serialize = "en-IN")]
    EnglishIn,
    #[serde(rename = "hi")]
    #[strum(serialize = "hi")]
    Hindi,
    #[serde(rename = "es-ES")]
    #[strum(serialize = "es-ES")]
    Spanish,
    #[serde(rename = "fr-FR")]
    #[strum(serialize = "fr-FR")]
    French,
    #[serde(rename = "de-DE")]
    #[strum(serialize = "de-DE")]
    German,
}

impl Language {
    /// BCP 47 tag passed to the speech capabilities.
    pub fn tag(self) -> &'static str {
        match self {
            Language::EnglishUs => "en-US",
            Language::EnglishIn => "en-IN",
            Language::Hindi => "hi",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
            Language::German => "de-DE",
        }
    }

    /// Display name shown in the language dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Language::EnglishUs => "English",
            Language::EnglishIn => "English - IN",
            Language::Hindi => "Hindi",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
        }
    }
}

/// One dropdown entry, as sent to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, specta::Type)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: String,
    pub label: String,
}

impl From<Language> for LanguageOption {
    fn from(language: Language) -> Self {
        Self {
            code: language.tag().to_string(),
            label: language.label().to_string(),
        }
    }
}

/// All selectable languages, in dropdown order.
pub fn all_languages() -> Vec<LanguageOption> {
    use strum::IntoEnumIterator;

    Language::iter().map(LanguageOption::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_every_offered_tag() {
        for option in all_languages() {
            let parsed = Language::from_str(&option.code)
                .unwrap_or_else(|_| panic!("tag {} should parse", option.code));
            assert_eq!(parsed.tag(), option.code);
        }
    }

    #[test]
    fn rejects_codes_outside_the_fixed_set() {
        for code in ["en-GB", "en-us", "", "xx", "fr", "es"] {
            assert!(
                Language::from_str(code).is_err(),
                "code {:?} should be rejected",
                code
            );
        }
    }

    #[test]
    fn default_is_american_english() {
        assert_eq!(Language::default(), Language::EnglishUs);
        assert_eq!(Language::default().tag(), "en-US");
    }

    #[test]
    fn serde_uses_the_wire_tag() {
        let json = serde_json::to_string(&Language::French).unwrap();
        assert_eq!(json, "\"fr-FR\"");
        let back: Language = serde_json::from_str("\"de-DE\"").unwrap();
        assert_eq!(back, Language::German);
    }
}
