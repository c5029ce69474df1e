//! Languages of transliterated words, selected by `%code` shifts.

use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGE: Language = Language::Akkadian;
pub const NORMALIZATION_SHIFT: &str = "%n";

const AKKADIAN_CODES: &[&str] = &[
    "%ma", "%mb", "%na", "%nb", "%lb", "%sb", "%a", "%akk", "%eakk", "%oakk", "%ur3akk", "%oa",
    "%ob",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Language {
    Akkadian,
    Sumerian,
    Emesal,
}

impl Language {
    /// Language selected by a shift code. Unknown codes fall back to the default language.
    pub fn of_atf(code: &str) -> Language {
        match code {
            "%sux" => Language::Sumerian,
            "%es" => Language::Emesal,
            code if AKKADIAN_CODES.contains(&code) => Language::Akkadian,
            _ => DEFAULT_LANGUAGE,
        }
    }

    /// Only words in a lemmatizable language can carry a unique lemma.
    pub fn lemmatizable(&self) -> bool {
        matches!(self, Language::Akkadian)
    }
}

impl Default for Language {
    fn default() -> Self {
        DEFAULT_LANGUAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("%ma", Language::Akkadian)]
    #[case("%ur3akk", Language::Akkadian)]
    #[case("%sb", Language::Akkadian)]
    #[case("%sux", Language::Sumerian)]
    #[case("%es", Language::Emesal)]
    #[case("%n", Language::Akkadian)]
    #[case("%foo", DEFAULT_LANGUAGE)]
    fn test_of_atf(#[case] code: &str, #[case] expected: Language) {
        assert_eq!(Language::of_atf(code), expected);
    }

    #[test]
    fn test_only_akkadian_is_lemmatizable() {
        assert!(Language::Akkadian.lemmatizable());
        assert!(!Language::Sumerian.lemmatizable());
        assert!(!Language::Emesal.lemmatizable());
    }
}
