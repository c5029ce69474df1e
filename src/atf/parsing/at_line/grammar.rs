//! Declarative at-line grammar
//!
//! The sub-grammar of structural `@` lines as regex rules with names. Rules are tried in
//! declaration order and the first match wins; the transformer dispatches on the rule name,
//! so a composite start and end are told apart by which rule fired.
//!
//! Status characters (`'` `?` `!` `*`) are captured as one run and keep their source order.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Grammar rules as (name, pattern) over the text after `@`.
/// Order matters: `signatures` must be tried before `signature`.
const GRAMMAR_PATTERNS: &[(&str, &str)] = &[
    ("seal", r"^seal (?P<number>\d+)$"),
    ("column", r"^column (?P<number>\d+)(?P<status>[!?*']*)$"),
    ("heading", r"^h(?P<number>\d+)$"),
    (
        "discourse",
        r"^(?P<discourse>catchline|colophon|date|signatures|signature|summary|witnesses)$",
    ),
    (
        "surface",
        r"^(?P<surface>obverse|reverse|left|right|top|bottom)(?P<status>[!?*']*)$",
    ),
    ("edge", r"^edge(?: (?P<text>[a-z]))?(?P<status>[!?*']*)$"),
    ("face", r"^face (?P<text>[a-z])(?P<status>[!?*']*)$"),
    ("generic_surface", r"^surface (?P<text>.+?)(?P<status>[!?*']*)$"),
    (
        "object",
        r"^(?P<object>tablet|envelope|prism|bulla)(?P<status>[!?*']*)$",
    ),
    ("generic_object", r"^object (?P<text>.+?)(?P<status>[!?*']*)$"),
    ("fragment", r"^fragment (?P<text>.+?)(?P<status>[!?*']*)$"),
    ("division", r"^m=division (?P<text>.+?)(?: (?P<number>\d+))?$"),
    ("composite_start", r"^div (?P<text>.+?)(?: (?P<number>\d+))?$"),
    ("composite_end", r"^end (?P<text>.+)$"),
    ("composite", r"^composite$"),
    ("milestone", r"^m=locator (?P<text>.+?)(?: (?P<number>\d+))?$"),
];

static GRAMMAR: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    GRAMMAR_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
});

/// Match the text after `@` against the rules in order.
pub fn match_rule(text: &str) -> Option<(&'static str, Captures<'_>)> {
    GRAMMAR
        .iter()
        .find_map(|(name, regex)| regex.captures(text).map(|captures| (*name, captures)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rule(text: &str) -> Option<&'static str> {
        match_rule(text).map(|(name, _)| name)
    }

    #[rstest]
    #[case("seal 1", "seal")]
    #[case("column 2'", "column")]
    #[case("h1", "heading")]
    #[case("signatures", "discourse")]
    #[case("obverse?!", "surface")]
    #[case("edge", "edge")]
    #[case("edge a", "edge")]
    #[case("face b", "face")]
    #[case("surface stone", "generic_surface")]
    #[case("prism", "object")]
    #[case("object stone", "generic_object")]
    #[case("fragment a*", "fragment")]
    #[case("m=division paragraph 5", "division")]
    #[case("div part-names 1", "composite_start")]
    #[case("end part-names", "composite_end")]
    #[case("composite", "composite")]
    #[case("m=locator catchline 16", "milestone")]
    fn test_rule_order(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(rule(text), Some(expected));
    }

    #[rstest]
    #[case("foo")]
    #[case("column")]
    #[case("face")]
    #[case("obverse x")]
    fn test_no_rule(#[case] text: &str) {
        assert_eq!(rule(text), None);
    }

    #[test]
    fn test_statuses_keep_order() {
        let (_, captures) = match_rule("surface thing*?").unwrap();

        assert_eq!(&captures["text"], "thing");
        assert_eq!(&captures["status"], "*?");
    }
}
