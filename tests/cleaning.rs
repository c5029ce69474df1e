//! Transliteration cleaning scenarios.

use ebl_atf::atf::{clean_line, clean_transliteration};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_ignored_lines() {
    let transliteration = "&K11111\n@reverse\n\n$ end of side\n#note\n=: foo";

    assert!(clean_transliteration(transliteration).is_empty());
}

#[test]
fn test_strip_line_numbers() {
    assert_eq!(
        clean_transliteration("1. mu\n2'. me\na+1. e\n1.2. a\n3. kur. ra"),
        vec!["mu", "me", "e", "a", "kur ra"]
    );
}

#[test]
fn test_map_spaces() {
    let transliteration = "1. šu-mu gid₂-ba
2. {giš}BI.IS
3. {m}{d}
4. {+tu-um}
5. tu | na
6. |BIxIS|
7. mu {{giš}}BI";

    assert_eq!(
        clean_transliteration(transliteration),
        vec![
            "šu mu gid₂ ba",
            "giš bi is",
            "m d",
            "tu um",
            "tu na",
            "|BIxIS|",
            "mu giš bi",
        ]
    );
}

#[test]
fn test_strip_lacuna() {
    let transliteration = "1.  [... N]U KU₃\n2. [... a]-ba-an\n3. [...] ši [...]\n5. [(... a)]-ba";

    assert_eq!(
        clean_transliteration(transliteration),
        vec!["nu ku₃", "a ba an", "ši", "a ba"]
    );
}

#[test]
fn test_empty_line_keeps_its_slot() {
    assert_eq!(
        clean_transliteration("1. [(...)]\n2. ku"),
        vec!["", "ku"]
    );
}

#[rstest]
#[case("1.  <NU> KU₃", "ku₃")]
#[case("2. <(ba)> an", "an")]
#[case("5. <<a>> ba", "ba")]
fn test_strip_omissions(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(clean_line(line), expected);
}

#[rstest]
#[case("1. (ku) (|BI×IS|) ra", "ku |BI×IS| ra")]
#[case("1. ku(KU₃)", "ku(KU₃)")]
#[case("1. 1(AŠ) 2(DIŠ)", "1(AŠ) 2(DIŠ)")]
#[case("1. %sux ku %n ra", "ku ra")]
#[case("1. ku °ra\\mu° pa", "ku mu pa")]
#[case("1.2.3. ku", "ku")]
#[case("1. UTU/|BI×IS|", "utu/|BI×IS|")]
#[case("1. ku(KU₃)/MI", "ku(KU₃)/mi")]
fn test_clean_line(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(clean_line(line), expected);
}

fn reading() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[abšAB₂₃01\\-.\\[\\]()!?#*{}<>%&x]{1,8}",
        1 => Just("...".to_string()),
    ]
}

fn line() -> impl Strategy<Value = String> {
    prop::collection::vec(reading(), 1..6)
        .prop_map(|readings| format!("1. {}", readings.join(" ")))
}

proptest! {
    #[test]
    fn cleaning_is_idempotent(line in line()) {
        let cleaned = clean_line(&line);
        let again = clean_line(&format!("1. {}", cleaned));

        prop_assert_eq!(again, cleaned);
    }

    #[test]
    fn cleaned_lines_have_no_decoration(line in line()) {
        let cleaned = clean_line(&line);

        prop_assert!(!cleaned.contains(['[', ']', '!', '?', '#', '*']));
        prop_assert!(!cleaned.contains("  "));
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
    }
}
