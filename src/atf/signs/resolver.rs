//! Sign resolver
//!
//!     Maps cleaned transliteration values to canonical sign ids. A lookup miss is never an
//!     error: the value degrades to an unknown sign marker and mapping goes on. The marker
//!     depends on the entry point; [`SignList`] uses `?`, [`transliteration_to_signs`] uses
//!     `X`.

use unicode_normalization::UnicodeNormalization;

use super::patterns::{classify, classify_for_signs, SignShape, ValueShape};
use super::repository::SignRepository;

pub const UNKNOWN_SIGN: &str = "?";
pub const UNIDENTIFIED_SIGN: &str = "X";

const DEFAULT_SUB_INDEX: u32 = 1;

/// Sub-index of a reading. Subscript digits are folded to ASCII by compatibility
/// normalization; a run that is still not a number (`ₓ`) has no sub-index.
pub fn parse_sub_index(sub_index: Option<&str>) -> Option<u32> {
    match sub_index {
        None => Some(DEFAULT_SUB_INDEX),
        Some(sub_index) => sub_index.nfkc().collect::<String>().parse().ok(),
    }
}

fn search_or<R: SignRepository>(
    repository: &R,
    reading: &str,
    sub_index: Option<u32>,
    default: &str,
) -> String {
    match sub_index.and_then(|sub_index| repository.search(reading, sub_index)) {
        Some(sign) => sign.name,
        None => {
            tracing::debug!(reading, ?sub_index, default, "sign not found");
            default.to_string()
        }
    }
}

/// Sign list mapping over a sign repository.
#[derive(Debug, Clone)]
pub struct SignList<R> {
    repository: R,
}

impl<R: SignRepository> SignList<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Map every row of a cleaned transliteration to signs. An empty row maps to a single
    /// empty value so it keeps its slot.
    pub fn map_transliteration(&self, cleaned: &[String]) -> Vec<Vec<String>> {
        cleaned
            .iter()
            .map(|row| {
                if row.is_empty() {
                    vec![String::new()]
                } else {
                    row.split(' ').map(|value| self.parse_value(value)).collect()
                }
            })
            .collect()
    }

    /// Resolve one value.
    pub fn parse_value(&self, value: &str) -> String {
        match classify(value) {
            ValueShape::Broken => UNIDENTIFIED_SIGN.to_string(),
            ValueShape::WithSign(sign) => sign.to_string(),
            ValueShape::Number(number) => {
                search_or(&self.repository, number, Some(DEFAULT_SUB_INDEX), number)
            }
            ValueShape::Grapheme(grapheme) => grapheme.to_string(),
            ValueShape::Reading { reading, sub_index } => search_or(
                &self.repository,
                reading,
                parse_sub_index(sub_index),
                UNKNOWN_SIGN,
            ),
            ValueShape::Variant(parts) => parts
                .into_iter()
                .map(|part| self.parse_value(part))
                .collect::<Vec<_>>()
                .join("/"),
            ValueShape::Unknown => UNKNOWN_SIGN.to_string(),
        }
    }

    /// Sign string of a cleaned transliteration: rows joined by newlines, values by spaces.
    pub fn signs_of(&self, cleaned: &[String]) -> String {
        self.map_transliteration(cleaned)
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Standalone converter from cleaned rows to signs. Unresolved readings become `X`.
pub fn transliteration_to_signs<R: SignRepository>(
    cleaned: &[String],
    repository: &R,
) -> Vec<Vec<String>> {
    cleaned
        .iter()
        .map(|row| {
            row.split(' ')
                .map(|value| match classify_for_signs(value) {
                    SignShape::Literal(literal) => literal.to_string(),
                    SignShape::Reading { reading, sub_index } => search_or(
                        repository,
                        reading,
                        parse_sub_index(sub_index),
                        UNIDENTIFIED_SIGN,
                    ),
                    SignShape::Unknown => UNIDENTIFIED_SIGN.to_string(),
                })
                .collect()
        })
        .collect()
}
