//! Test factories
//!
//!     Curated inputs shared by unit and integration tests, so that the ATF used in tests is
//!     written (and checked) once. Use [`sign_list`] or [`repository`] for sign lookups; they
//!     are backed by [`CATALOG_JSON`], the same catalog the command-line tests write to disk.
//!
//!     [`SAMPLE_ATF`] exercises every line production: at-lines, a control line, an empty
//!     line and text lines with shifts, erasures, variants and a lone determinative.

use crate::atf::ast::lines::{Line, TextLine};
use crate::atf::ast::text::Text;
use crate::atf::ast::tokens::{Token, Word};
use crate::atf::signs::{MemorySignRepository, Sign, SignList, SignValue};

pub const USER: &str = "test.user@example.com";

pub const SAMPLE_ATF: &str = "@obverse
1. [...] šu-mi {d}utu x ...
2. %sux ku₃ °me\\ku° %ma ku₃/šu
$ (end of side)

@reverse
1'. {giš}
2'. 1(AŠ) |BI×IS| ku₂";

/// Sign catalog in stored form.
pub const CATALOG_JSON: &str = r#"[
  {"_id": "KU₃", "values": [{"value": "ku", "subIndex": 3}]},
  {"_id": "ŠU", "values": [{"value": "šu", "subIndex": 1}]},
  {"_id": "MI", "values": [{"value": "mi", "subIndex": 1}]},
  {"_id": "UD", "values": [{"value": "utu", "subIndex": 1}, {"value": "ud", "subIndex": 1}]},
  {"_id": "AN", "values": [{"value": "d", "subIndex": 1}, {"value": "an", "subIndex": 1}]},
  {"_id": "ME", "values": [{"value": "me", "subIndex": 1}]},
  {"_id": "GIŠ", "values": [{"value": "giš", "subIndex": 1}]},
  {"_id": "DIŠ", "values": [{"value": "1", "subIndex": 1}]},
  {"_id": "UNKNOWN", "values": [{"value": "kur"}]}
]"#;

pub fn signs() -> Vec<Sign> {
    vec![
        Sign::new("KU₃", vec![SignValue::new("ku", Some(3))]),
        Sign::new("ŠU", vec![SignValue::new("šu", Some(1))]),
        Sign::new("MI", vec![SignValue::new("mi", Some(1))]),
        Sign::new(
            "UD",
            vec![SignValue::new("utu", Some(1)), SignValue::new("ud", Some(1))],
        ),
        Sign::new(
            "AN",
            vec![SignValue::new("d", Some(1)), SignValue::new("an", Some(1))],
        ),
        Sign::new("ME", vec![SignValue::new("me", Some(1))]),
        Sign::new("GIŠ", vec![SignValue::new("giš", Some(1))]),
        Sign::new("DIŠ", vec![SignValue::new("1", Some(1))]),
        Sign::new("UNKNOWN", vec![SignValue::new("kur", None)]),
    ]
}

pub fn repository() -> MemorySignRepository {
    MemorySignRepository::new(signs())
}

pub fn sign_list() -> SignList<MemorySignRepository> {
    SignList::new(repository())
}

pub fn word(value: &str) -> Token {
    Token::word(value)
}

pub fn lemmatized_word(value: &str, lemma: &str) -> Token {
    Token::Word(Word::new(value).with_unique_lemma(vec![lemma.to_string()]))
}

pub fn text_line(prefix: &str, content: Vec<Token>) -> Line {
    Line::Text(TextLine::new(prefix, content))
}

pub fn text(lines: Vec<Line>) -> Text {
    Text::new(lines)
}
