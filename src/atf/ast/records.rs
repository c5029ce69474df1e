//! Serialized records
//!
//!     The storage and wire form of tokens and lines: tagged records `{"type": ..., "value":
//!     ..., ...}` with camelCase field names and SCREAMING_SNAKE enum spellings. Derived fields
//!     (`lemmatizable`, a shift's `language`) are written for consumers but recomputed when a
//!     record is read back.

use serde::{Deserialize, Serialize};

use super::error::RecordError;
use super::labels::{ColumnLabel, SurfaceLabel};
use super::language::Language;
use super::lines::{AtLine, ControlLine, Line, TextLine, AT_LINE_PREFIX};
use super::symbols::{
    CommentaryProtocol, Composite, Discourse, Object, Side, Status, GLOSS_CLOSE, GLOSS_OPEN,
};
use super::text::Text;
use super::tokens::{ErasureState, LoneDeterminative, Partial, Token, Word};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TokenRecord {
    Token {
        value: String,
    },
    #[serde(rename_all = "camelCase")]
    Word {
        value: String,
        unique_lemma: Vec<String>,
        normalized: bool,
        language: Language,
        lemmatizable: bool,
        erasure: ErasureState,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alignment: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    LoneDeterminative {
        value: String,
        unique_lemma: Vec<String>,
        normalized: bool,
        language: Language,
        lemmatizable: bool,
        erasure: ErasureState,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        alignment: Option<u32>,
        partial: [bool; 2],
    },
    LanguageShift {
        value: String,
        normalized: bool,
        language: Language,
    },
    Column {
        value: String,
        number: Option<u32>,
    },
    Variant {
        value: String,
        tokens: Vec<TokenRecord>,
    },
    Tabulation {
        value: String,
    },
    CommentaryProtocol {
        value: String,
    },
    UnknownNumberOfSigns {
        value: String,
    },
    LineContinuation {
        value: String,
    },
    Erasure {
        value: String,
        side: Side,
    },
    DocumentOrientedGloss {
        value: String,
    },
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        let value = token.value();
        match token {
            Token::Value(_) => TokenRecord::Token { value },
            Token::Word(word) => TokenRecord::Word {
                value,
                unique_lemma: word.unique_lemma.clone(),
                normalized: word.normalized,
                language: word.language,
                lemmatizable: word.lemmatizable(),
                erasure: word.erasure,
                alignment: word.alignment,
            },
            Token::LoneDeterminative(determinative) => TokenRecord::LoneDeterminative {
                value,
                unique_lemma: determinative.word.unique_lemma.clone(),
                normalized: determinative.word.normalized,
                language: determinative.word.language,
                lemmatizable: false,
                erasure: determinative.word.erasure,
                alignment: determinative.word.alignment,
                partial: [determinative.partial.start, determinative.partial.end],
            },
            Token::LanguageShift(_) => {
                let (language, normalized) = token.shift_language().unwrap_or_default();
                TokenRecord::LanguageShift {
                    value,
                    normalized,
                    language,
                }
            }
            Token::Column(number) => TokenRecord::Column {
                value,
                number: *number,
            },
            Token::Variant(tokens) => TokenRecord::Variant {
                value,
                tokens: tokens.iter().map(TokenRecord::from).collect(),
            },
            Token::Tabulation => TokenRecord::Tabulation { value },
            Token::CommentaryProtocol(_) => TokenRecord::CommentaryProtocol { value },
            Token::UnknownNumberOfSigns => TokenRecord::UnknownNumberOfSigns { value },
            Token::LineContinuation => TokenRecord::LineContinuation { value },
            Token::Erasure(side) => TokenRecord::Erasure { value, side: *side },
            Token::DocumentOrientedGloss(_) => TokenRecord::DocumentOrientedGloss { value },
        }
    }
}

impl TryFrom<TokenRecord> for Token {
    type Error = RecordError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        let token = match record {
            TokenRecord::Token { value } => Token::Value(value),
            TokenRecord::Word {
                value,
                unique_lemma,
                normalized,
                language,
                erasure,
                alignment,
                ..
            } => Token::Word(Word {
                value,
                language,
                normalized,
                unique_lemma,
                erasure,
                alignment,
            }),
            TokenRecord::LoneDeterminative {
                value,
                unique_lemma,
                normalized,
                language,
                erasure,
                alignment,
                partial: [start, end],
                ..
            } => Token::LoneDeterminative(LoneDeterminative::new(
                Word {
                    value,
                    language,
                    normalized,
                    unique_lemma,
                    erasure,
                    alignment,
                },
                Partial::new(start, end),
            )),
            TokenRecord::LanguageShift { value, .. } => Token::LanguageShift(value),
            TokenRecord::Column { number, .. } => Token::Column(number),
            TokenRecord::Variant { tokens, .. } => Token::Variant(
                tokens
                    .into_iter()
                    .map(Token::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            TokenRecord::Tabulation { .. } => Token::Tabulation,
            TokenRecord::CommentaryProtocol { value } => Token::CommentaryProtocol(
                CommentaryProtocol::from_atf(&value)
                    .ok_or_else(|| RecordError::new(format!("unknown protocol {}", value)))?,
            ),
            TokenRecord::UnknownNumberOfSigns { .. } => Token::UnknownNumberOfSigns,
            TokenRecord::LineContinuation { .. } => Token::LineContinuation,
            TokenRecord::Erasure { side, .. } => Token::Erasure(side),
            TokenRecord::DocumentOrientedGloss { value } => match value.as_str() {
                GLOSS_OPEN => Token::DocumentOrientedGloss(Side::Left),
                GLOSS_CLOSE => Token::DocumentOrientedGloss(Side::Right),
                _ => return Err(RecordError::new(format!("unknown gloss {}", value))),
            },
        };
        Ok(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LineRecord {
    TextLine {
        prefix: String,
        content: Vec<TokenRecord>,
    },
    ControlLine {
        prefix: String,
        content: Vec<TokenRecord>,
    },
    EmptyLine {
        prefix: String,
        content: Vec<TokenRecord>,
    },
    #[serde(rename_all = "camelCase")]
    SurfaceAtLine {
        prefix: String,
        display_value: String,
        surface_label: SurfaceLabel,
    },
    #[serde(rename_all = "camelCase")]
    ColumnAtLine {
        prefix: String,
        display_value: String,
        column_label: ColumnLabel,
    },
    #[serde(rename_all = "camelCase")]
    ObjectAtLine {
        prefix: String,
        display_value: String,
        status: Vec<Status>,
        object: Object,
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    CompositeAtLine {
        prefix: String,
        display_value: String,
        composite: Composite,
        text: String,
        number: Option<u32>,
    },
    #[serde(rename_all = "camelCase")]
    DiscourseAtLine {
        prefix: String,
        display_value: String,
        discourse_label: Discourse,
    },
    #[serde(rename_all = "camelCase")]
    HeadingAtLine {
        prefix: String,
        display_value: String,
        number: u32,
    },
    #[serde(rename_all = "camelCase")]
    SealAtLine {
        prefix: String,
        display_value: String,
        number: u32,
    },
    #[serde(rename_all = "camelCase")]
    DivisionAtLine {
        prefix: String,
        display_value: String,
        text: String,
        number: Option<u32>,
    },
}

fn content_records(content: &[Token]) -> Vec<TokenRecord> {
    content.iter().map(TokenRecord::from).collect()
}

fn content_tokens(content: Vec<TokenRecord>) -> Result<Vec<Token>, RecordError> {
    content.into_iter().map(Token::try_from).collect()
}

impl From<&Line> for LineRecord {
    fn from(line: &Line) -> Self {
        let at_line = |at_line: &AtLine| (AT_LINE_PREFIX.to_string(), at_line.display_value());
        match line {
            Line::Text(line) => LineRecord::TextLine {
                prefix: line.prefix.clone(),
                content: content_records(&line.content),
            },
            Line::Control(line) => LineRecord::ControlLine {
                prefix: line.prefix.clone(),
                content: content_records(&line.content),
            },
            Line::Empty => LineRecord::EmptyLine {
                prefix: String::new(),
                content: Vec::new(),
            },
            Line::At(line) => {
                let (prefix, display_value) = at_line(line);
                match line {
                    AtLine::Surface(label) => LineRecord::SurfaceAtLine {
                        prefix,
                        display_value,
                        surface_label: label.clone(),
                    },
                    AtLine::Column(label) => LineRecord::ColumnAtLine {
                        prefix,
                        display_value,
                        column_label: label.clone(),
                    },
                    AtLine::Object {
                        object,
                        text,
                        status,
                    } => LineRecord::ObjectAtLine {
                        prefix,
                        display_value,
                        status: status.clone(),
                        object: *object,
                        text: text.clone(),
                    },
                    AtLine::Composite {
                        composite,
                        text,
                        number,
                    } => LineRecord::CompositeAtLine {
                        prefix,
                        display_value,
                        composite: *composite,
                        text: text.clone(),
                        number: *number,
                    },
                    AtLine::Discourse(discourse) => LineRecord::DiscourseAtLine {
                        prefix,
                        display_value,
                        discourse_label: *discourse,
                    },
                    AtLine::Heading(number) => LineRecord::HeadingAtLine {
                        prefix,
                        display_value,
                        number: *number,
                    },
                    AtLine::Seal(number) => LineRecord::SealAtLine {
                        prefix,
                        display_value,
                        number: *number,
                    },
                    AtLine::Division { text, number } => LineRecord::DivisionAtLine {
                        prefix,
                        display_value,
                        text: text.clone(),
                        number: *number,
                    },
                }
            }
        }
    }
}

impl TryFrom<LineRecord> for Line {
    type Error = RecordError;

    fn try_from(record: LineRecord) -> Result<Self, Self::Error> {
        let line = match record {
            LineRecord::TextLine { prefix, content } => {
                Line::Text(TextLine::new(prefix, content_tokens(content)?))
            }
            LineRecord::ControlLine { prefix, content } => Line::Control(ControlLine {
                prefix,
                content: content_tokens(content)?,
            }),
            LineRecord::EmptyLine { .. } => Line::Empty,
            LineRecord::SurfaceAtLine { surface_label, .. } => {
                Line::At(AtLine::Surface(surface_label))
            }
            LineRecord::ColumnAtLine { column_label, .. } => Line::At(AtLine::Column(column_label)),
            LineRecord::ObjectAtLine {
                status,
                object,
                text,
                ..
            } => Line::At(AtLine::Object {
                object,
                text,
                status,
            }),
            LineRecord::CompositeAtLine {
                composite,
                text,
                number,
                ..
            } => Line::At(AtLine::Composite {
                composite,
                text,
                number,
            }),
            LineRecord::DiscourseAtLine {
                discourse_label, ..
            } => Line::At(AtLine::Discourse(discourse_label)),
            LineRecord::HeadingAtLine { number, .. } => Line::At(AtLine::Heading(number)),
            LineRecord::SealAtLine { number, .. } => Line::At(AtLine::Seal(number)),
            LineRecord::DivisionAtLine { text, number, .. } => {
                Line::At(AtLine::Division { text, number })
            }
        };
        Ok(line)
    }
}

pub fn text_to_records(text: &Text) -> Vec<LineRecord> {
    text.lines.iter().map(LineRecord::from).collect()
}

pub fn text_from_records(records: Vec<LineRecord>) -> Result<Text, RecordError> {
    records
        .into_iter()
        .map(Line::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map(Text::new)
}
