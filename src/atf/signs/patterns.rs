//! Lexical pattern matcher
//!
//!     Classifies one cleaned value by its shape. The patterns are tried in order and must
//!     match the whole value; the first match wins. Order matters: `x` is broken before it
//!     could be a reading, a numeral must not be treated as a reading, and a compound sign
//!     name must not be split as a variant.
//!
//!     Two pattern sets exist because the two lookup entry points classify differently:
//!     [`classify`] serves the sign list mapping, [`classify_for_signs`] the standalone
//!     transliteration to signs converter.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sign list patterns as (name, pattern), anchored when compiled.
const VALUE_PATTERNS: &[(&str, &str)] = &[
    ("broken", r"x"),
    ("with_sign", r"[^\(/\|]+\((?P<sign>.+)\)"),
    ("number", r"\d+"),
    (
        "grapheme",
        r"\|?(?:\d*[.x×%&+@]?\(?[A-ZṢŠṬ₀-₉]+(?:[@~][a-z0-9]+)*\)?)+\|?",
    ),
    ("reading", r"(?P<reading>[^₀-₉ₓ/]+)(?P<sub_index>[₀-₉ₓ]+)?"),
    ("variant", r"[^/]+(?:/[^/]+)+"),
];

/// Standalone converter patterns.
const SIGN_PATTERNS: &[(&str, &str)] = &[
    (
        "literal",
        r"\|?(?:[.x%&+]?[A-ZṢŠṬ₀-₉]+)+\|?|\d+|[^\(]+\((?P<sign>.+)\)",
    ),
    ("reading", r"(?P<reading>[^₀-₉ₓ]+)(?P<sub_index>[₀-₉ₓ]+)?"),
];

fn compile(patterns: &[(&'static str, &str)]) -> Vec<(&'static str, Regex)> {
    patterns
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(&format!("^(?:{})$", pattern)).unwrap()))
        .collect()
}

static VALUE_GRAMMAR: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| compile(VALUE_PATTERNS));
static SIGN_GRAMMAR: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| compile(SIGN_PATTERNS));

/// Shape of a value. Every value has exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape<'a> {
    /// `x`: a broken sign
    Broken,
    /// `reading(SIGN)`: the sign is named explicitly
    WithSign(&'a str),
    Number(&'a str),
    /// A compound sign name, used as is
    Grapheme(&'a str),
    /// Base reading and the raw sub-index run, if any
    Reading {
        reading: &'a str,
        sub_index: Option<&'a str>,
    },
    /// `/` separated alternatives
    Variant(Vec<&'a str>),
    Unknown,
}

/// Classify a value for the sign list mapping.
pub fn classify(value: &str) -> ValueShape<'_> {
    for (name, regex) in VALUE_GRAMMAR.iter() {
        let Some(captures) = regex.captures(value) else {
            continue;
        };
        let group = |group: &str| captures.name(group).map(|m| m.as_str());
        let shape = match *name {
            "broken" => ValueShape::Broken,
            "with_sign" => ValueShape::WithSign(group("sign").unwrap_or(value)),
            "number" => ValueShape::Number(value),
            "grapheme" => ValueShape::Grapheme(value),
            "reading" => ValueShape::Reading {
                reading: group("reading").unwrap_or(value),
                sub_index: group("sub_index"),
            },
            "variant" => ValueShape::Variant(value.split('/').collect()),
            _ => continue,
        };
        return shape;
    }
    ValueShape::Unknown
}

/// Shape of a value for the standalone converter: a literal to keep, or a reading to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignShape<'a> {
    Literal(&'a str),
    Reading {
        reading: &'a str,
        sub_index: Option<&'a str>,
    },
    Unknown,
}

pub fn classify_for_signs(value: &str) -> SignShape<'_> {
    for (name, regex) in SIGN_GRAMMAR.iter() {
        let Some(captures) = regex.captures(value) else {
            continue;
        };
        let group = |group: &str| captures.name(group).map(|m| m.as_str());
        match *name {
            "literal" => return SignShape::Literal(group("sign").unwrap_or(value)),
            "reading" => {
                return SignShape::Reading {
                    reading: group("reading").unwrap_or(value),
                    sub_index: group("sub_index"),
                }
            }
            _ => continue,
        }
    }
    SignShape::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("x", ValueShape::Broken)]
    #[case("ku(KU₃)", ValueShape::WithSign("KU₃"))]
    #[case("1(AŠ)", ValueShape::WithSign("AŠ"))]
    #[case("256", ValueShape::Number("256"))]
    #[case("|BI×IS|", ValueShape::Grapheme("|BI×IS|"))]
    #[case("|GEŠTU~axŠE~a@t|", ValueShape::Grapheme("|GEŠTU~axŠE~a@t|"))]
    #[case("BI", ValueShape::Grapheme("BI"))]
    #[case("gid₂", ValueShape::Reading { reading: "gid", sub_index: Some("₂") })]
    #[case("šu", ValueShape::Reading { reading: "šu", sub_index: None })]
    #[case("kuₓ", ValueShape::Reading { reading: "ku", sub_index: Some("ₓ") })]
    #[case("ku/|BI×IS|", ValueShape::Variant(vec!["ku", "|BI×IS|"]))]
    #[case("", ValueShape::Unknown)]
    #[case("/", ValueShape::Unknown)]
    #[case("₂", ValueShape::Grapheme("₂"))]
    #[case("ₓ", ValueShape::Unknown)]
    fn test_classify(#[case] value: &str, #[case] expected: ValueShape) {
        assert_eq!(classify(value), expected);
    }

    #[rstest]
    #[case("|BI.IS|", SignShape::Literal("|BI.IS|"))]
    #[case("KU₃", SignShape::Literal("KU₃"))]
    #[case("12", SignShape::Literal("12"))]
    #[case("ku(KU₃)", SignShape::Literal("KU₃"))]
    #[case("gid₂", SignShape::Reading { reading: "gid", sub_index: Some("₂") })]
    #[case("ₓ", SignShape::Unknown)]
    fn test_classify_for_signs(#[case] value: &str, #[case] expected: SignShape) {
        assert_eq!(classify_for_signs(value), expected);
    }
}
