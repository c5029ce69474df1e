//! Lemmatization and alignment annotations
//!
//!     Annotations are sequences parallel to a text's tokens. Each entry repeats the token
//!     value it was made for, so a changed transliteration can be detected, and optionally
//!     carries a unique lemma or an alignment index.

use serde::{Deserialize, Serialize};

/// Dictionary word identifier.
pub type WordId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LemmatizationToken {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_lemma: Option<Vec<WordId>>,
}

impl LemmatizationToken {
    pub fn new(value: impl Into<String>, unique_lemma: Option<Vec<WordId>>) -> Self {
        Self {
            value: value.into(),
            unique_lemma,
        }
    }

    /// True when the token carries no lemma to attach.
    pub fn is_empty(&self) -> bool {
        self.unique_lemma
            .as_ref()
            .map_or(true, |lemma| lemma.is_empty())
    }
}

/// Rows of lemmatization tokens, one row per line of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lemmatization {
    pub tokens: Vec<Vec<LemmatizationToken>>,
}

impl Lemmatization {
    pub fn new(tokens: Vec<Vec<LemmatizationToken>>) -> Self {
        Self { tokens }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentToken {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<u32>,
}

impl AlignmentToken {
    pub fn new(value: impl Into<String>, alignment: Option<u32>) -> Self {
        Self {
            value: value.into(),
            alignment,
        }
    }
}

/// Rows of alignment tokens, one row per line of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alignment {
    pub tokens: Vec<Vec<AlignmentToken>>,
}

impl Alignment {
    pub fn new(tokens: Vec<Vec<AlignmentToken>>) -> Self {
        Self { tokens }
    }
}
