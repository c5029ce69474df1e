//! Fragment update workflow
//!
//!     A fragment is one tablet (or piece of one) with its parsed transliteration, free-form
//!     notes, the signs of its transliteration, and a change record. Updates never modify a
//!     fragment in place; they return a new one.
//!
//!     Updating the transliteration:
//!         1. Parse the new ATF. Failure rejects the update.
//!         2. Merge the parse with the current text, keeping lemmas and alignments of
//!            unchanged tokens.
//!         3. Recompute the signs from the cleaned ATF.
//!         4. Append a record entry if the ATF changed: `Transliteration` for the first
//!            transliteration, `Revision` afterwards.
//!
//!     Dates are supplied by the caller.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::atf::ast::annotation::Lemmatization;
use crate::atf::ast::error::{LemmatizationError, ParseError, RecordError};
use crate::atf::ast::records::{text_from_records, text_to_records, LineRecord};
use crate::atf::ast::text::Text;
use crate::atf::lexing::cleaning::clean_transliteration;
use crate::atf::parsing::parse_atf;
use crate::atf::signs::{SignList, SignQuery, SignRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Transliteration,
    Revision,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    pub user: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    pub date: String,
}

/// Change history of a fragment, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub entries: Vec<RecordEntry>,
}

impl Record {
    /// Append an entry if the transliteration changed.
    pub fn add_entry(&self, old_atf: &str, new_atf: &str, user: &str, date: &str) -> Record {
        if old_atf == new_atf {
            return self.clone();
        }
        let kind = if old_atf.is_empty() {
            RecordKind::Transliteration
        } else {
            RecordKind::Revision
        };
        let mut entries = self.entries.clone();
        entries.push(RecordEntry {
            user: user.to_string(),
            kind,
            date: date.to_string(),
        });
        Record { entries }
    }
}

/// New transliteration and notes for a fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationUpdate {
    pub atf: String,
    pub notes: String,
}

impl TransliterationUpdate {
    pub fn new(atf: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            atf: atf.into(),
            notes: notes.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    Parse(ParseError),
    Lemmatization(LemmatizationError),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Parse(error) => write!(f, "{}", error),
            UpdateError::Lemmatization(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for UpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UpdateError::Parse(error) => Some(error),
            UpdateError::Lemmatization(error) => Some(error),
        }
    }
}

impl From<ParseError> for UpdateError {
    fn from(error: ParseError) -> Self {
        UpdateError::Parse(error)
    }
}

impl From<LemmatizationError> for UpdateError {
    fn from(error: LemmatizationError) -> Self {
        UpdateError::Lemmatization(error)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub number: String,
    pub text: Text,
    pub notes: String,
    pub signs: String,
    pub record: Record,
}

impl Fragment {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    pub fn atf(&self) -> String {
        self.text.atf()
    }

    pub fn update_transliteration<R: SignRepository>(
        &self,
        update: &TransliterationUpdate,
        user: &str,
        date: &str,
        sign_list: &SignList<R>,
    ) -> Result<Fragment, UpdateError> {
        let parsed = parse_atf(&update.atf)?;
        let record = self.record.add_entry(&self.atf(), &parsed.atf(), user, date);
        let text = self.text.merge(&parsed);
        let signs = sign_list.signs_of(&clean_transliteration(&update.atf));
        tracing::debug!(
            number = %self.number,
            lines = text.lines.len(),
            entries = record.entries.len(),
            "transliteration updated"
        );
        Ok(Fragment {
            number: self.number.clone(),
            text,
            notes: update.notes.clone(),
            signs,
            record,
        })
    }

    /// Replace the lemmatization. Every lemma must fit the current text.
    pub fn update_lemmatization(&self, lemmatization: &Lemmatization) -> Result<Fragment, UpdateError> {
        Ok(Fragment {
            text: self.text.update_lemmatization(lemmatization)?,
            ..self.clone()
        })
    }

    /// Line ranges of the signs that match `query`.
    pub fn matching_lines(&self, query: &SignQuery) -> Vec<Range<usize>> {
        query.matching_lines(&self.signs)
    }

    pub fn to_record(&self) -> FragmentRecord {
        FragmentRecord {
            number: self.number.clone(),
            text: text_to_records(&self.text),
            notes: self.notes.clone(),
            signs: self.signs.clone(),
            record: self.record.clone(),
        }
    }
}

/// Stored form of a fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentRecord {
    #[serde(rename = "_id")]
    pub number: String,
    pub text: Vec<LineRecord>,
    pub notes: String,
    pub signs: String,
    pub record: Record,
}

impl TryFrom<FragmentRecord> for Fragment {
    type Error = RecordError;

    fn try_from(record: FragmentRecord) -> Result<Self, Self::Error> {
        Ok(Fragment {
            number: record.number,
            text: text_from_records(record.text)?,
            notes: record.notes,
            signs: record.signs,
            record: record.record,
        })
    }
}
