//! Error types for parsing and annotating ATF
//!
//!     Malformed input and incompatible annotations are distinct kinds so callers can tell
//!     "invalid ATF syntax" apart from "transliteration changed, re-lemmatize". A sign lookup
//!     miss is not an error at all; it degrades to an unknown-sign marker.

use std::fmt;

/// Why a single physical line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line matches none of the line productions (empty, control, at, text).
    InvalidLine,
    /// A field of a text line is not a valid token.
    InvalidToken(String),
    /// `°` and `\` do not form a complete `°…\…°` erasure.
    UnbalancedErasure,
    /// A `{(` document oriented gloss is not closed on the same line.
    UnclosedGloss,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::InvalidLine => write!(f, "no line production matches"),
            ParseErrorKind::InvalidToken(token) => write!(f, "invalid token \"{}\"", token),
            ParseErrorKind::UnbalancedErasure => write!(f, "unbalanced erasure"),
            ParseErrorKind::UnclosedGloss => write!(f, "unclosed document oriented gloss"),
        }
    }
}

/// Malformed input. The whole document parse fails on the first offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 1-based physical line number
    pub line_number: usize,
    /// The offending line, verbatim
    pub line: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(line_number: usize, line: &str, kind: ParseErrorKind) -> Self {
        Self {
            line_number,
            line: line.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid ATF at line {}: {}\n>> {:3} | {}",
            self.line_number, self.kind, self.line_number, self.line
        )
    }
}

impl std::error::Error for ParseError {}

/// A lemma could not be attached: the value changed or the token is not lemmatizable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmatizationError {
    pub message: String,
}

impl LemmatizationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LemmatizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid lemmatization: {}", self.message)
    }
}

impl std::error::Error for LemmatizationError {}

/// An alignment index could not be attached: the value changed or the token is not alignable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentError {
    pub message: String,
}

impl AlignmentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for AlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid alignment: {}", self.message)
    }
}

impl std::error::Error for AlignmentError {}

/// Invalid label text or an invalid combination of labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    InvalidLabel(String),
    InvalidCombination(String),
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelError::InvalidLabel(label) => write!(f, "Invalid label \"{}\"", label),
            LabelError::InvalidCombination(labels) => {
                write!(f, "Invalid label combination \"{}\"", labels)
            }
        }
    }
}

impl std::error::Error for LabelError {}

/// A serialized record that does not describe a valid token or line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordError {
    pub message: String,
}

impl RecordError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid record: {}", self.message)
    }
}

impl std::error::Error for RecordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_the_line() {
        let error = ParseError::new(3, "invalid", ParseErrorKind::InvalidLine);
        let message = error.to_string();

        assert!(message.contains("line 3"));
        assert!(message.contains(">>   3 | invalid"));
    }
}
