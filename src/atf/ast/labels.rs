//! Structural labels
//!
//!     Labels name a position on the object: a surface (`o`, `r`, `b.e.`), a column (roman
//!     numeral) or a line number, each optionally followed by status characters. They are
//!     carried by at-lines and by manuscript lines of a corpus chapter.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::LabelError;
use super::symbols::{Status, Surface};

static SURFACE_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(o|r|b\.e\.|e\.|l\.e\.|r\.e\.|t\.e\.)([!?*']*)$").unwrap());
static COLUMN_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([ivxlcdm]+)([!?*']*)$").unwrap());

const ROMAN_NUMERALS: &[(u32, &str)] = &[
    (1000, "m"),
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

fn to_roman(mut number: u32) -> String {
    let mut roman = String::new();
    for (value, numeral) in ROMAN_NUMERALS {
        while number >= *value {
            roman.push_str(numeral);
            number -= value;
        }
    }
    roman
}

fn from_roman(roman: &str) -> Option<u32> {
    let mut rest = roman;
    let mut number: u32 = 0;
    for (value, numeral) in ROMAN_NUMERALS {
        while let Some(remaining) = rest.strip_prefix(numeral) {
            number = number.checked_add(*value)?;
            rest = remaining;
        }
    }
    // Only canonical spellings are accepted.
    (rest.is_empty() && number > 0 && to_roman(number) == roman).then_some(number)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SurfaceLabel {
    pub surface: Surface,
    pub status: Vec<Status>,
    #[serde(default)]
    pub text: String,
}

impl SurfaceLabel {
    pub fn new(surface: Surface, status: Vec<Status>, text: impl Into<String>) -> Self {
        Self {
            surface,
            status,
            text: text.into(),
        }
    }

    pub fn from_surface(surface: Surface) -> Self {
        Self::new(surface, Vec::new(), "")
    }

    /// Spelling after `@` in an at-line: `obverse'`, `edge a`, `surface thing?`.
    pub fn atf(&self) -> String {
        let mut atf = self.surface.atf().to_string();
        if !self.text.is_empty() {
            atf.push(' ');
            atf.push_str(&self.text);
        }
        atf.push_str(&Status::to_atf(&self.status));
        atf
    }

    pub fn abbreviation(&self) -> &str {
        match self.surface.label() {
            "" => &self.text,
            label => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnLabel {
    pub column: u32,
    pub status: Vec<Status>,
}

impl ColumnLabel {
    pub fn new(column: u32, status: Vec<Status>) -> Self {
        Self { column, status }
    }

    /// Parse a lower-case roman numeral.
    pub fn from_label(roman: &str, status: Vec<Status>) -> Result<Self, LabelError> {
        from_roman(roman)
            .map(|column| Self::new(column, status))
            .ok_or_else(|| LabelError::InvalidLabel(roman.to_string()))
    }

    pub fn atf(&self) -> String {
        format!("column {}{}", self.column, Status::to_atf(&self.status))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineNumberLabel {
    pub number: String,
}

impl LineNumberLabel {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Label {
    Surface(SurfaceLabel),
    Column(ColumnLabel),
    LineNumber(LineNumberLabel),
}

impl Label {
    /// Short form used in manuscript lines: `o`, `b.e.'`, `iii?`.
    pub fn to_value(&self) -> String {
        match self {
            Label::Surface(label) => {
                format!("{}{}", label.abbreviation(), Status::to_atf(&label.status))
            }
            Label::Column(label) => {
                format!("{}{}", to_roman(label.column), Status::to_atf(&label.status))
            }
            Label::LineNumber(label) => label.number.clone(),
        }
    }

    /// Parse one short-form surface or column label.
    pub fn parse(value: &str) -> Result<Label, LabelError> {
        let invalid = || LabelError::InvalidLabel(value.to_string());
        if let Some(captures) = SURFACE_LABEL.captures(value) {
            let surface = Surface::from_label(&captures[1]).ok_or_else(invalid)?;
            let status = Status::parse_all(&captures[2]).ok_or_else(invalid)?;
            Ok(Label::Surface(SurfaceLabel::new(surface, status, "")))
        } else if let Some(captures) = COLUMN_LABEL.captures(value) {
            let status = Status::parse_all(&captures[2]).ok_or_else(invalid)?;
            Ok(Label::Column(
                ColumnLabel::from_label(&captures[1], status).map_err(|_| invalid())?,
            ))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Parse space separated labels, e.g. `o iii'`.
pub fn parse_labels(labels: &str) -> Result<Vec<Label>, LabelError> {
    labels.split_whitespace().map(Label::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "i")]
    #[case(4, "iv")]
    #[case(9, "ix")]
    #[case(14, "xiv")]
    #[case(1999, "mcmxcix")]
    fn test_roman_numerals(#[case] number: u32, #[case] roman: &str) {
        assert_eq!(to_roman(number), roman);
        assert_eq!(from_roman(roman), Some(number));
    }

    #[test]
    fn test_non_canonical_roman_numeral_is_rejected() {
        assert_eq!(from_roman("iiii"), None);
        assert_eq!(from_roman(""), None);
    }

    #[test]
    fn test_oversized_roman_numeral_is_rejected() {
        let roman = "m".repeat(5_000_000);

        assert_eq!(from_roman(&roman), None);
        assert!(Label::parse(&roman).is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            parse_labels("o iii'").unwrap(),
            vec![
                Label::Surface(SurfaceLabel::from_surface(Surface::Obverse)),
                Label::Column(ColumnLabel::new(3, vec![Status::Prime])),
            ]
        );
    }

    #[rstest]
    #[case("o")]
    #[case("b.e.*")]
    #[case("r.e.?!")]
    #[case("iv'")]
    fn test_to_value_reverses_parse(#[case] value: &str) {
        assert_eq!(Label::parse(value).unwrap().to_value(), value);
    }

    #[rstest]
    #[case("obverse")]
    #[case("iiii")]
    #[case("1.")]
    fn test_invalid_label(#[case] value: &str) {
        assert_eq!(
            Label::parse(value),
            Err(LabelError::InvalidLabel(value.to_string()))
        );
    }

    #[test]
    fn test_at_line_spelling() {
        assert_eq!(
            SurfaceLabel::new(Surface::Edge, vec![Status::Uncertain], "a").atf(),
            "edge a?"
        );
        assert_eq!(ColumnLabel::new(2, vec![Status::Collation]).atf(), "column 2*");
    }
}
