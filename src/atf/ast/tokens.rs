//! Token types
//!
//!     Tokens are the units of a text line's content. They form a closed sum type; every
//!     operation (value, key, lemmatizability, annotation, merge) is an exhaustive match over
//!     the variants instead of per-type overrides.
//!
//!     Tokens are immutable values. Annotating or merging never changes a token in place, it
//!     returns a new one:
//!
//!         let word = Word::new("kur");
//!         let annotated = Token::Word(word).set_unique_lemma(&lemma)?;
//!
//!     The `key` of a token identifies it structurally: its type name, its value and the keys
//!     of its parts. Two tokens with the same key are interchangeable for merging.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::annotation::{AlignmentToken, LemmatizationToken, WordId};
use super::error::{AlignmentError, LemmatizationError};
use super::language::{Language, DEFAULT_LANGUAGE, NORMALIZATION_SHIFT};
use super::symbols::{
    CommentaryProtocol, Side, ERASURE_BOUNDARY, ERASURE_DELIMITER, GLOSS_CLOSE, GLOSS_OPEN,
    JOINERS, LINE_CONTINUATION, TABULATION, UNCLEAR_SIGN, UNIDENTIFIED_SIGN,
    UNKNOWN_NUMBER_OF_SIGNS, VARIANT_SEPARATOR,
};

const KEY_DELIMITER: &str = "⁝";
const PART_KEY_DELIMITER: &str = "⁚";

/// Position of a word relative to an erasure `°erased\over erased°`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErasureState {
    #[default]
    None,
    Erased,
    OverErased,
}

/// Whether a word is broken off at its start and end (written with a leading/trailing joiner).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Partial {
    pub start: bool,
    pub end: bool,
}

impl Partial {
    pub fn new(start: bool, end: bool) -> Self {
        Self { start, end }
    }

    pub fn of_value(value: &str) -> Self {
        Self {
            start: value.starts_with(JOINERS),
            end: value.ends_with(JOINERS),
        }
    }

    pub fn any(&self) -> bool {
        self.start || self.end
    }
}

/// A lemmatizable sign group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub value: String,
    pub language: Language,
    pub normalized: bool,
    pub unique_lemma: Vec<WordId>,
    pub erasure: ErasureState,
    pub alignment: Option<u32>,
}

impl Word {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: DEFAULT_LANGUAGE,
            normalized: false,
            unique_lemma: Vec::new(),
            erasure: ErasureState::None,
            alignment: None,
        }
    }

    pub fn with_language(self, language: Language, normalized: bool) -> Self {
        Self {
            language,
            normalized,
            ..self
        }
    }

    pub fn with_erasure(self, erasure: ErasureState) -> Self {
        Self { erasure, ..self }
    }

    pub fn with_unique_lemma(self, unique_lemma: Vec<WordId>) -> Self {
        Self {
            unique_lemma,
            ..self
        }
    }

    pub fn with_alignment(self, alignment: Option<u32>) -> Self {
        Self { alignment, ..self }
    }

    pub fn partial(&self) -> Partial {
        Partial::of_value(&self.value)
    }

    pub fn lemmatizable(&self) -> bool {
        self.language.lemmatizable()
            && !self.normalized
            && self.erasure != ErasureState::Erased
            && !self
                .value
                .contains([VARIANT_SEPARATOR, UNCLEAR_SIGN, UNIDENTIFIED_SIGN])
            && !self.partial().any()
    }
}

/// A determinative standing alone, e.g. `{d}` or `-{ki}`. Never lemmatizable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoneDeterminative {
    pub word: Word,
    pub partial: Partial,
}

impl LoneDeterminative {
    pub fn new(word: Word, partial: Partial) -> Self {
        Self { word, partial }
    }

    /// Build from the field text, deriving partiality from the joiners around it.
    pub fn of_value(value: impl Into<String>, erasure: ErasureState) -> Self {
        let word = Word::new(value).with_erasure(erasure);
        let partial = word.partial();
        Self { word, partial }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Any field without a more specific meaning: dividers, broken-off spans, protocol text.
    Value(String),
    Word(Word),
    LoneDeterminative(LoneDeterminative),
    /// `%code`; the language and normalization it selects are derived from the code.
    LanguageShift(String),
    Column(Option<u32>),
    Variant(Vec<Token>),
    Tabulation,
    CommentaryProtocol(CommentaryProtocol),
    UnknownNumberOfSigns,
    LineContinuation,
    Erasure(Side),
    DocumentOrientedGloss(Side),
}

impl Token {
    pub fn value_token(value: impl Into<String>) -> Self {
        Token::Value(value.into())
    }

    pub fn word(value: impl Into<String>) -> Self {
        Token::Word(Word::new(value))
    }

    pub fn variant(first: Token, second: Token) -> Self {
        Token::Variant(vec![first, second])
    }

    /// ATF surface form.
    pub fn value(&self) -> String {
        match self {
            Token::Value(value) | Token::LanguageShift(value) => value.clone(),
            Token::Word(word) => word.value.clone(),
            Token::LoneDeterminative(determinative) => determinative.word.value.clone(),
            Token::Column(None) => "&".to_string(),
            Token::Column(Some(number)) => format!("&{}", number),
            Token::Variant(tokens) => tokens
                .iter()
                .map(Token::value)
                .collect::<Vec<_>>()
                .join(&VARIANT_SEPARATOR.to_string()),
            Token::Tabulation => TABULATION.to_string(),
            Token::CommentaryProtocol(protocol) => protocol.atf().to_string(),
            Token::UnknownNumberOfSigns => UNKNOWN_NUMBER_OF_SIGNS.to_string(),
            Token::LineContinuation => LINE_CONTINUATION.to_string(),
            Token::Erasure(Side::Center) => ERASURE_DELIMITER.to_string(),
            Token::Erasure(_) => ERASURE_BOUNDARY.to_string(),
            Token::DocumentOrientedGloss(Side::Left) => GLOSS_OPEN.to_string(),
            Token::DocumentOrientedGloss(_) => GLOSS_CLOSE.to_string(),
        }
    }

    /// Serialized type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Token::Value(_) => "Token",
            Token::Word(_) => "Word",
            Token::LoneDeterminative(_) => "LoneDeterminative",
            Token::LanguageShift(_) => "LanguageShift",
            Token::Column(_) => "Column",
            Token::Variant(_) => "Variant",
            Token::Tabulation => "Tabulation",
            Token::CommentaryProtocol(_) => "CommentaryProtocol",
            Token::UnknownNumberOfSigns => "UnknownNumberOfSigns",
            Token::LineContinuation => "LineContinuation",
            Token::Erasure(_) => "Erasure",
            Token::DocumentOrientedGloss(_) => "DocumentOrientedGloss",
        }
    }

    pub fn parts(&self) -> &[Token] {
        match self {
            Token::Variant(tokens) => tokens,
            _ => &[],
        }
    }

    pub fn key(&self) -> String {
        self.key_with(KEY_DELIMITER)
    }

    fn key_with(&self, delimiter: &str) -> String {
        let mut segments = vec![self.type_name().to_string(), self.value()];
        segments.extend(self.parts().iter().map(|part| part.key_with(PART_KEY_DELIMITER)));
        segments.join(delimiter)
    }

    pub fn lemmatizable(&self) -> bool {
        match self {
            Token::Word(word) => word.lemmatizable(),
            _ => false,
        }
    }

    pub fn alignable(&self) -> bool {
        self.lemmatizable()
    }

    /// Language selected by a shift token.
    pub fn shift_language(&self) -> Option<(Language, bool)> {
        match self {
            Token::LanguageShift(code) => {
                Some((Language::of_atf(code), code == NORMALIZATION_SHIFT))
            }
            _ => None,
        }
    }

    pub fn unique_lemma(&self) -> Option<&[WordId]> {
        match self {
            Token::Word(word) => Some(&word.unique_lemma),
            Token::LoneDeterminative(determinative) => Some(&determinative.word.unique_lemma),
            _ => None,
        }
    }

    pub fn alignment(&self) -> Option<u32> {
        match self {
            Token::Word(word) => word.alignment,
            Token::LoneDeterminative(determinative) => determinative.word.alignment,
            _ => None,
        }
    }

    pub fn lemmatization_token(&self) -> LemmatizationToken {
        LemmatizationToken::new(self.value(), self.unique_lemma().map(<[WordId]>::to_vec))
    }

    pub fn alignment_token(&self) -> AlignmentToken {
        AlignmentToken::new(self.value(), self.alignment())
    }

    /// Whether `lemma` can be attached: same value, and either nothing to attach or a
    /// lemmatizable token to attach it to.
    pub fn is_compatible(&self, lemma: &LemmatizationToken) -> bool {
        self.value() == lemma.value && (lemma.is_empty() || self.lemmatizable())
    }

    pub fn set_unique_lemma(&self, lemma: &LemmatizationToken) -> Result<Token, LemmatizationError> {
        if !self.is_compatible(lemma) {
            return Err(LemmatizationError::new(format!(
                "cannot set {:?} on {} \"{}\"",
                lemma.unique_lemma,
                self.type_name(),
                self.value()
            )));
        }
        match (self, &lemma.unique_lemma) {
            (Token::Word(word), Some(unique_lemma)) => Ok(Token::Word(
                word.clone().with_unique_lemma(unique_lemma.clone()),
            )),
            _ => Ok(self.clone()),
        }
    }

    pub fn set_alignment(&self, alignment: &AlignmentToken) -> Result<Token, AlignmentError> {
        let compatible = self.value() == alignment.value
            && (alignment.alignment.is_none() || self.alignable());
        if !compatible {
            return Err(AlignmentError::new(format!(
                "cannot align {} \"{}\" with \"{}\"",
                self.type_name(),
                self.value(),
                alignment.value
            )));
        }
        match self {
            Token::Word(word) => Ok(Token::Word(word.clone().with_alignment(alignment.alignment))),
            _ => Ok(self.clone()),
        }
    }

    pub fn strip_alignment(&self) -> Token {
        match self {
            Token::Word(word) => Token::Word(word.clone().with_alignment(None)),
            Token::Variant(tokens) => Token::Variant(tokens.iter().map(Token::strip_alignment).collect()),
            _ => self.clone(),
        }
    }

    /// Carry this token's annotations over to `new` when both have the same key and the new
    /// token can take them. Otherwise `new` is returned unannotated.
    pub fn merge(&self, new: &Token) -> Token {
        match (self, new) {
            (Token::Word(old), Token::Word(word)) if self.key() == new.key() => {
                let mut merged = word.clone();
                if new.lemmatizable() || old.unique_lemma.is_empty() {
                    merged.unique_lemma = old.unique_lemma.clone();
                }
                if new.alignable() {
                    merged.alignment = old.alignment;
                }
                tracing::trace!(value = %word.value, "kept annotations");
                Token::Word(merged)
            }
            _ => new.clone(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lemma(value: &str, unique_lemma: Option<&[&str]>) -> LemmatizationToken {
        LemmatizationToken::new(
            value,
            unique_lemma.map(|ids| ids.iter().map(|id| id.to_string()).collect()),
        )
    }

    #[rstest]
    #[case(Token::value_token("[...]"), "[...]")]
    #[case(Token::Column(None), "&")]
    #[case(Token::Column(Some(2)), "&2")]
    #[case(Token::Tabulation, "($___$)")]
    #[case(Token::UnknownNumberOfSigns, "...")]
    #[case(Token::LineContinuation, "→")]
    #[case(Token::Erasure(Side::Left), "°")]
    #[case(Token::Erasure(Side::Center), "\\")]
    #[case(Token::DocumentOrientedGloss(Side::Right), ")}")]
    #[case(Token::CommentaryProtocol(CommentaryProtocol::Quotation), "!qt")]
    #[case(Token::variant(Token::word("k[ur"), Token::value_token(":")), "k[ur/:")]
    fn test_value(#[case] token: Token, #[case] expected: &str) {
        assert_eq!(token.value(), expected);
    }

    #[test]
    fn test_key_includes_parts() {
        let variant = Token::variant(Token::word("kur"), Token::value_token("|"));

        assert_eq!(variant.key(), "Variant⁝kur/|⁝Word⁚kur⁝Token⁚|");
        assert_eq!(Token::word("kur").key(), "Word⁝kur");
    }

    #[rstest]
    #[case(Word::new("un"), true)]
    #[case(Word::new("un-"), false)]
    #[case(Word::new(".un"), false)]
    #[case(Word::new("ku/ra"), false)]
    #[case(Word::new("x"), false)]
    #[case(Word::new("X-ra"), false)]
    #[case(Word::new("un").with_language(Language::Sumerian, false), false)]
    #[case(Word::new("un").with_language(Language::Akkadian, true), false)]
    #[case(Word::new("un").with_erasure(ErasureState::Erased), false)]
    #[case(Word::new("un").with_erasure(ErasureState::OverErased), true)]
    fn test_word_lemmatizable(#[case] word: Word, #[case] expected: bool) {
        assert_eq!(Token::Word(word).lemmatizable(), expected);
    }

    #[test]
    fn test_lone_determinative_is_never_lemmatizable() {
        let determinative = LoneDeterminative::of_value("{d}-", ErasureState::None);

        assert_eq!(determinative.partial, Partial::new(false, true));
        assert!(!Token::LoneDeterminative(determinative).lemmatizable());
    }

    #[test]
    fn test_set_unique_lemma() {
        let token = Token::word("kur");
        let annotated = token
            .set_unique_lemma(&lemma("kur", Some(&["word1"])))
            .unwrap();

        assert_eq!(annotated.unique_lemma(), Some(&["word1".to_string()][..]));
        assert_eq!(token.unique_lemma(), Some(&[][..]));
    }

    #[rstest]
    #[case(Token::word("kur"), lemma("ra", Some(&["word1"])))]
    #[case(Token::word("kur-"), lemma("kur-", Some(&["word1"])))]
    #[case(Token::value_token("|"), lemma("|", Some(&["word1"])))]
    fn test_set_unique_lemma_rejects_incompatible(
        #[case] token: Token,
        #[case] lemma: LemmatizationToken,
    ) {
        assert!(token.set_unique_lemma(&lemma).is_err());
    }

    #[test]
    fn test_set_empty_lemma_on_any_token() {
        let token = Token::value_token("|");

        assert_eq!(token.set_unique_lemma(&lemma("|", None)), Ok(token.clone()));
    }

    #[test]
    fn test_set_alignment() {
        let token = Token::word("kur");
        let aligned = token
            .set_alignment(&AlignmentToken::new("kur", Some(1)))
            .unwrap();

        assert_eq!(aligned.alignment(), Some(1));
        assert_eq!(aligned.strip_alignment(), token);
        assert!(Token::value_token("|")
            .set_alignment(&AlignmentToken::new("|", Some(1)))
            .is_err());
    }

    #[test]
    fn test_merge_keeps_annotations_of_same_word() {
        let old = Token::Word(
            Word::new("kur")
                .with_unique_lemma(vec!["word1".to_string()])
                .with_alignment(Some(2)),
        );

        assert_eq!(old.merge(&Token::word("kur")), old);
        assert_eq!(old.merge(&Token::word("pa")), Token::word("pa"));
    }

    #[test]
    fn test_merge_drops_lemma_on_non_lemmatizable_word() {
        let old = Token::Word(Word::new("kur").with_unique_lemma(vec!["word1".to_string()]));
        let new = Token::Word(Word::new("kur").with_language(Language::Sumerian, false));

        assert_eq!(old.merge(&new), new);
    }
}
