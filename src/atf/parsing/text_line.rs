//! Text line tokenizer
//!
//!     Turns the content of a numbered line into tokens. Fields come from the logos base
//!     tokenizer; this module classifies each field and threads the per-line state:
//!
//!         - language and normalization, set by `%code` shifts, reset for every line
//!         - erasure position, advanced by `°` `\` `°`
//!         - whether a `{(` document oriented gloss is open
//!
//!     Field classification is ordered; the first matching rule wins:
//!
//!         ...                         UnknownNumberOfSigns
//!         [...  ...]  [(...)]         Token (broken off span)
//!         ($___$)                     Tabulation
//!         | : ; / :' :" :. :: ?       Token (divider)
//!         !qt !bs !cm !zz             CommentaryProtocol
//!         & &N                        Column
//!         %code                       LanguageShift
//!         →                           LineContinuation
//!         a/b                         Variant of the tokenized sides
//!         {d} -{ki}                   LoneDeterminative
//!         anything with a letter      Word
//!
//!     Anything else is an invalid token and fails the line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::atf::ast::error::ParseErrorKind;
use crate::atf::ast::language::{Language, DEFAULT_LANGUAGE};
use crate::atf::ast::symbols::{
    CommentaryProtocol, Side, DIVIDERS, GLOSS_CLOSE, GLOSS_OPEN, LINE_CONTINUATION, TABULATION,
    UNKNOWN_NUMBER_OF_SIGNS, VARIANT_SEPARATOR,
};
use crate::atf::ast::tokens::{ErasureState, LoneDeterminative, Token, Word};
use crate::atf::lexing::base_tokenization::{tokenize, RawToken};

static BROKEN_OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[?\(?\.\.\.\)?\]?$").unwrap());
static COLUMN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^&(\d*)$").unwrap());
static LANGUAGE_SHIFT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^%\w+$").unwrap());
static LONE_DETERMINATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+.:]?(?:\{\{?\+?[^{}]+\}\}?)+[-+.:]?$").unwrap());

#[derive(Debug, Clone, Copy)]
struct LineState {
    language: Language,
    normalized: bool,
    erasure: ErasureState,
    gloss_open: bool,
}

impl LineState {
    fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE,
            normalized: false,
            erasure: ErasureState::None,
            gloss_open: false,
        }
    }

    fn word(&self, value: &str) -> Word {
        Word::new(value)
            .with_language(self.language, self.normalized)
            .with_erasure(self.erasure)
    }
}

/// Tokenize the content of a text line.
pub fn parse_text_content(content: &str) -> Result<Vec<Token>, ParseErrorKind> {
    let mut state = LineState::new();
    let mut tokens = Vec::new();

    for (raw, _) in tokenize(content) {
        match raw {
            RawToken::Whitespace => {}
            RawToken::ErasureBoundary => {
                let (side, next) = match state.erasure {
                    ErasureState::None => (Side::Left, ErasureState::Erased),
                    ErasureState::OverErased => (Side::Right, ErasureState::None),
                    ErasureState::Erased => return Err(ParseErrorKind::UnbalancedErasure),
                };
                tokens.push(Token::Erasure(side));
                state.erasure = next;
            }
            RawToken::ErasureDelimiter => {
                if state.erasure != ErasureState::Erased {
                    return Err(ParseErrorKind::UnbalancedErasure);
                }
                tokens.push(Token::Erasure(Side::Center));
                state.erasure = ErasureState::OverErased;
            }
            RawToken::Field(field) => parse_field(&field, &mut state, &mut tokens)?,
        }
    }

    if state.erasure != ErasureState::None {
        return Err(ParseErrorKind::UnbalancedErasure);
    }
    if state.gloss_open {
        return Err(ParseErrorKind::UnclosedGloss);
    }
    Ok(tokens)
}

/// Split document oriented gloss markers off the edges of a field and classify the rest.
fn parse_field(
    field: &str,
    state: &mut LineState,
    tokens: &mut Vec<Token>,
) -> Result<(), ParseErrorKind> {
    let mut field = field;
    if let Some(rest) = field.strip_prefix(GLOSS_OPEN) {
        if state.gloss_open {
            return Err(ParseErrorKind::UnclosedGloss);
        }
        tokens.push(Token::DocumentOrientedGloss(Side::Left));
        state.gloss_open = true;
        field = rest;
    }
    let closes = match field.strip_suffix(GLOSS_CLOSE) {
        Some(rest) => {
            field = rest;
            true
        }
        None => false,
    };
    if !field.is_empty() {
        let token = classify_field(field, state)?;
        if let Some((language, normalized)) = token.shift_language() {
            state.language = language;
            state.normalized = normalized;
        }
        tokens.push(token);
    }
    if closes {
        if !state.gloss_open {
            return Err(ParseErrorKind::InvalidToken(GLOSS_CLOSE.to_string()));
        }
        tokens.push(Token::DocumentOrientedGloss(Side::Right));
        state.gloss_open = false;
    }
    Ok(())
}

fn classify_field(field: &str, state: &LineState) -> Result<Token, ParseErrorKind> {
    if field == UNKNOWN_NUMBER_OF_SIGNS {
        return Ok(Token::UnknownNumberOfSigns);
    }
    if BROKEN_OFF.is_match(field) || DIVIDERS.contains(&field) {
        return Ok(Token::value_token(field));
    }
    if field == TABULATION {
        return Ok(Token::Tabulation);
    }
    if let Some(protocol) = CommentaryProtocol::from_atf(field) {
        return Ok(Token::CommentaryProtocol(protocol));
    }
    if let Some(captures) = COLUMN.captures(field) {
        let number = match &captures[1] {
            "" => None,
            digits => Some(
                digits
                    .parse()
                    .map_err(|_| ParseErrorKind::InvalidToken(field.to_string()))?,
            ),
        };
        return Ok(Token::Column(number));
    }
    if LANGUAGE_SHIFT.is_match(field) {
        return Ok(Token::LanguageShift(field.to_string()));
    }
    if field == LINE_CONTINUATION {
        return Ok(Token::LineContinuation);
    }
    let trimmed = field.trim_matches(VARIANT_SEPARATOR);
    if trimmed.len() == field.len() && field.contains(VARIANT_SEPARATOR) {
        return field
            .split(VARIANT_SEPARATOR)
            .map(|part| classify_part(part, state))
            .collect::<Result<Vec<_>, _>>()
            .map(Token::Variant);
    }
    classify_word(field, state)
}

/// A side of a variant: a word or a divider.
fn classify_part(part: &str, state: &LineState) -> Result<Token, ParseErrorKind> {
    if part == UNKNOWN_NUMBER_OF_SIGNS {
        return Ok(Token::UnknownNumberOfSigns);
    }
    if DIVIDERS.contains(&part) || BROKEN_OFF.is_match(part) {
        return Ok(Token::value_token(part));
    }
    classify_word(part, state)
}

fn classify_word(field: &str, state: &LineState) -> Result<Token, ParseErrorKind> {
    if !field.chars().any(char::is_alphanumeric) {
        return Err(ParseErrorKind::InvalidToken(field.to_string()));
    }
    if LONE_DETERMINATIVE.is_match(field) {
        let mut determinative = LoneDeterminative::of_value(field, state.erasure);
        determinative.word = determinative
            .word
            .with_language(state.language, state.normalized);
        return Ok(Token::LoneDeterminative(determinative));
    }
    Ok(Token::Word(state.word(field)))
}
