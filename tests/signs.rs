//! Sign lookup and sign-line search over the curated catalog.

use ebl_atf::atf::{clean_line, clean_transliteration};
use ebl_atf::atf::signs::patterns::{classify, ValueShape};
use ebl_atf::atf::signs::{transliteration_to_signs, SignQuery, UNIDENTIFIED_SIGN, UNKNOWN_SIGN};
use ebl_atf::atf::testing::{repository, sign_list, SAMPLE_ATF};
use proptest::prelude::*;
use rstest::rstest;

#[test]
fn test_signs_of_sample() {
    let cleaned = clean_transliteration(SAMPLE_ATF);

    assert_eq!(
        sign_list().signs_of(&cleaned),
        "ŠU MI AN UD X\nKU₃ ? KU₃/ŠU\nGIŠ\nAŠ |BI×IS| ?"
    );
}

#[rstest]
#[case("ku₃", "KU₃")]
#[case("ku₂", UNKNOWN_SIGN)]
#[case("kuₓ", UNKNOWN_SIGN)]
#[case("ku", UNKNOWN_SIGN)]
#[case("kur", UNKNOWN_SIGN)]
#[case("x", UNIDENTIFIED_SIGN)]
fn test_lookup_misses_degrade(#[case] value: &str, #[case] expected: &str) {
    assert_eq!(sign_list().parse_value(value), expected);
}

#[rstest]
#[case("1. UTU/|BI×IS|", "UD/|BI×IS|")]
#[case("1. UTU/ku₃", "UD/KU₃")]
#[case("1.2.3. ku₃", "KU₃")]
fn test_cleaned_line_resolves(#[case] line: &str, #[case] expected: &str) {
    let cleaned = vec![clean_line(line)];

    assert_eq!(sign_list().signs_of(&cleaned), expected);
}

#[test]
fn test_standalone_converter_uses_x() {
    let cleaned = vec!["šu ku₂ utu".to_string(), "KU₃ 12".to_string()];

    assert_eq!(
        transliteration_to_signs(&cleaned, &repository()),
        vec![vec!["ŠU", "X", "UD"], vec!["KU₃", "12"]]
    );
}

#[test]
fn test_search_sample() {
    let sign_list = sign_list();
    let signs = sign_list.signs_of(&clean_transliteration(SAMPLE_ATF));

    let query = SignQuery::from_transliteration("1. šu-mi", &sign_list);
    assert_eq!(query.matching_lines(&signs), vec![0..1]);

    let query = SignQuery::from_transliteration("1. ku₃/šu\n2. {giš}", &sign_list);
    assert_eq!(query.matching_lines(&signs), vec![1..3]);

    let query = SignQuery::from_transliteration("1. mi", &sign_list);
    assert_eq!(query.matching_lines("ŠU MI\nMI"), vec![0..1, 1..2]);
}

fn value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zšṣṭḫ]{1,4}[₀-₉ₓ]{0,2}",
        "[A-ZŠṢṬ]{1,3}[₀-₉]?",
        "\\|[A-Z.×]{1,6}\\|",
        "[a-z]{1,3}\\([A-Z₀-₉]{1,3}\\)",
        "[0-9]{1,3}",
        "[a-z₀-₉]{1,3}/[a-z₀-₉]{1,3}",
    ]
}

proptest! {
    #[test]
    fn classification_is_total(value in "\\PC{0,8}") {
        let _: ValueShape = classify(&value);
    }

    #[test]
    fn resolution_always_yields_a_sign(value in value()) {
        let sign = sign_list().parse_value(&value);

        prop_assert!(!sign.is_empty());
        prop_assert!(!sign.contains(' '));
    }

    #[test]
    fn every_row_keeps_its_slot(rows in prop::collection::vec("[a-z₀-₉ ]{0,12}", 0..5)) {
        prop_assert_eq!(sign_list().map_transliteration(&rows).len(), rows.len());
    }
}
