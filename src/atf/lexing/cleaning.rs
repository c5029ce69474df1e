//! Transliteration cleaning
//!
//!     Strips ATF decoration from a transliteration, leaving the bare readings of every text
//!     line. The result feeds sign lookup, so only what names a sign survives: line numbers,
//!     erasures (the erased part), omissions, lacunae, flags, shifts, columns and joiners are
//!     removed; readings are lower-cased.
//!
//!     Graphemes (`|BI.IS|`) and explicit sign forms (`ku(KU₃)`) name their sign literally and
//!     are kept verbatim.
//!
//!     Control lines and empty lines are dropped. Any other line keeps its slot even when
//!     nothing is left of it:
//!
//!         1. [(...)]      =>  ""
//!         2. šu-mu gid₂   =>  "šu mu gid₂"

use once_cell::sync::Lazy;
use regex::Regex;

use crate::atf::ast::symbols::CONTROL_SIGILS;

static LINE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[^.\s]+\.)+\s+").unwrap());
static TABULATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\$_+\$\)").unwrap());
static ERASURE: Lazy<Regex> = Lazy::new(|| Regex::new(r"°[^\\°]*\\([^°]*)°").unwrap());
static OMISSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"<<?\(?[^>]+\)?>?>").unwrap());
static LACUNA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\[\]⸢⸣]|\.\.\.").unwrap());
static UNCERTAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|\s)\(([^()]*)\)").unwrap());
static GRAPHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|[^|\s]+\|").unwrap());
static JOINER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-.+{}|]").unwrap());
static FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?#*$]").unwrap());
static MODIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@~][a-z0-9]+").unwrap());
static WITH_SIGN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^(\s]+\(.+\)$").unwrap());
static DROPPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:&\d*|%\w+|→)$").unwrap());

fn is_content_line(line: &str) -> bool {
    !line.is_empty() && !CONTROL_SIGILS.iter().any(|sigil| line.starts_with(sigil))
}

/// Clean every content line of a transliteration.
pub fn clean_transliteration(transliteration: &str) -> Vec<String> {
    transliteration
        .lines()
        .filter(|line| is_content_line(line))
        .map(clean_line)
        .collect()
}

/// Clean a single text line.
pub fn clean_line(line: &str) -> String {
    let line = LINE_NUMBER.replace(line, "");
    let line = TABULATION.replace_all(&line, "");
    let line = ERASURE.replace_all(&line, "${1}");
    let line = OMISSION.replace_all(&line, "");
    let line = LACUNA.replace_all(&line, "");
    let line = remove_uncertain_parentheses(&line);
    let line = remove_uncertain_parentheses(&split_joiners(&line));
    let line = line
        .split_whitespace()
        .map(normalize_reading)
        .collect::<Vec<_>>()
        .join(" ");
    remove_uncertain_parentheses(&line)
        .split_whitespace()
        .filter(|reading| !DROPPED.is_match(reading))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unwrap `(…)` spans that start a word until none is left. Unwrapping can expose an
/// enclosing span, hence the loop.
fn remove_uncertain_parentheses(line: &str) -> String {
    let mut line = line.to_string();
    loop {
        let unwrapped = UNCERTAIN.replace_all(&line, "${1}${2}").into_owned();
        if unwrapped == line {
            return line;
        }
        line = unwrapped;
    }
}

/// Drop flags and turn joiners into spaces everywhere except inside graphemes.
fn split_joiners(line: &str) -> String {
    let strip = |segment: &str| JOINER.replace_all(&FLAG.replace_all(segment, ""), " ").into_owned();
    let mut result = String::new();
    let mut last = 0;
    for grapheme in GRAPHEME.find_iter(line) {
        result.push_str(&strip(&line[last..grapheme.start()]));
        result.push_str(grapheme.as_str());
        last = grapheme.end();
    }
    result.push_str(&strip(&line[last..]));
    result
}

/// Lower-case each side of a variant and drop sign modifiers. Sides holding a grapheme or
/// an explicit sign are kept verbatim.
fn normalize_reading(reading: &str) -> String {
    variant_sides(reading)
        .into_iter()
        .map(|side| {
            if side.contains('|') || WITH_SIGN.is_match(side) {
                side.to_string()
            } else {
                MODIFIER.replace_all(&side.to_lowercase(), "").into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Split on `/` outside graphemes and parentheses.
fn variant_sides(reading: &str) -> Vec<&str> {
    let mut sides = Vec::new();
    let mut depth = 0usize;
    let mut in_grapheme = false;
    let mut start = 0;
    for (index, c) in reading.char_indices() {
        match c {
            '|' => in_grapheme = !in_grapheme,
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '/' if depth == 0 && !in_grapheme => {
                sides.push(&reading[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    sides.push(&reading[start..]);
    sides
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_control_and_empty_lines_are_dropped() {
        assert!(clean_transliteration("&K11111\n@reverse\n\n$ end of side\n#note\n=: foo").is_empty());
    }

    #[rstest]
    #[case("1. ($___$) ša₂", "ša₂")]
    #[case("1.  ba! ba? ba# ba*", "ba ba ba ba")]
    #[case("2. $KU", "ku")]
    #[case("1. %es qa", "qa")]
    #[case("2. ba %g ba", "ba ba")]
    #[case("1. ku →", "ku")]
    #[case("6. tu &2 na", "tu na")]
    #[case("1. lu₂@v", "lu₂")]
    #[case("2. LU₂@v", "lu₂")]
    #[case("9. din-{d}x", "din d x")]
    #[case("8. mu {{giš}}BI", "mu giš bi")]
    #[case("3. {giš}|BI.IS|", "giš |BI.IS|")]
    fn test_clean_line(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(clean_line(line), expected);
    }

    #[rstest]
    #[case("1. °\\° ku", "ku")]
    #[case("1. °\\ra° ku", "ra ku")]
    #[case("1. °ra\\ku°", "ku")]
    #[case("1. °\\KU°", "ku")]
    #[case("1. °ra (ra) 1(AŠ) <(ra)> [(ra)]\\° ku", "ku")]
    #[case("1. °[(1(AŠ))]\\° 2(DIŠ)", "2(DIŠ)")]
    fn test_erasures(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(clean_line(line), expected);
    }

    #[rstest]
    #[case("UTU/|BI×IS|", vec!["UTU", "|BI×IS|"])]
    #[case("|A/B|/ku", vec!["|A/B|", "ku"])]
    #[case("1(AŠ/DIŠ)", vec!["1(AŠ/DIŠ)"])]
    #[case("ku", vec!["ku"])]
    fn test_variant_sides(#[case] reading: &str, #[case] expected: Vec<&str>) {
        assert_eq!(variant_sides(reading), expected);
    }

    #[test]
    fn test_nested_uncertain_spans() {
        assert_eq!(clean_line("1. x (a (b))"), "x a b");
    }
}
