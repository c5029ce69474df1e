//! Line Classification
//!
//! Sorts a physical line into exactly one line production by its prefix. Control sigils are
//! checked before the line number pattern so `#1. note` stays a comment.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::atf::ast::symbols::CONTROL_SIGILS;

static TEXT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^((?:[^\s.]+\.)+)\s+(\S.*)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Empty,
    /// Sigil and the verbatim remainder of the line.
    Control { sigil: &'a str, rest: &'a str },
    /// Line number including its final `.` and the content after the separating whitespace.
    Text { prefix: &'a str, content: &'a str },
    Invalid,
}

pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.trim().is_empty() {
        return LineKind::Empty;
    }
    if let Some(sigil) = CONTROL_SIGILS
        .iter()
        .copied()
        .find(|sigil| line.starts_with(sigil))
    {
        return LineKind::Control {
            sigil,
            rest: &line[sigil.len()..],
        };
    }
    match TEXT_LINE.captures(line) {
        Some(captures) => match (captures.get(1), captures.get(2)) {
            (Some(prefix), Some(content)) => LineKind::Text {
                prefix: prefix.as_str(),
                content: content.as_str(),
            },
            _ => LineKind::Invalid,
        },
        None => LineKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineKind::Empty)]
    #[case("   ", LineKind::Empty)]
    #[case("&K11111", LineKind::Control { sigil: "&", rest: "K11111" })]
    #[case("=: foo", LineKind::Control { sigil: "=:", rest: " foo" })]
    #[case("$ (end of side)", LineKind::Control { sigil: "$", rest: " (end of side)" })]
    #[case("@reverse", LineKind::Control { sigil: "@", rest: "reverse" })]
    #[case("#1. note", LineKind::Control { sigil: "#", rest: "1. note" })]
    #[case("1. ku", LineKind::Text { prefix: "1.", content: "ku" })]
    #[case("a+1.a+2.  ku ra", LineKind::Text { prefix: "a+1.a+2.", content: "ku ra" })]
    #[case("2'. ku", LineKind::Text { prefix: "2'.", content: "ku" })]
    #[case("1.ku", LineKind::Invalid)]
    #[case("1. ", LineKind::Invalid)]
    #[case("ku", LineKind::Invalid)]
    #[case(" 1. ku", LineKind::Invalid)]
    fn test_classify_line(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify_line(line), expected);
    }
}
