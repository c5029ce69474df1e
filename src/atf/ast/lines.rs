//! Line types
//!
//!     Every physical line of a document is exactly one `Line`: text, control, empty or one of
//!     the structural at-lines. Lines re-serialize to ATF with `atf()`.

use super::labels::{ColumnLabel, SurfaceLabel};
use super::symbols::{Composite, Discourse, Object, Side, Status};
use super::tokens::Token;

pub const AT_LINE_PREFIX: &str = "@";

/// A numbered line of transliteration, e.g. `1. ku-ra`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Verbatim line number including the final `.`, e.g. `a+1.a+2.` or `2'.`
    pub prefix: String,
    pub content: Vec<Token>,
}

impl TextLine {
    pub fn new(prefix: impl Into<String>, content: Vec<Token>) -> Self {
        Self {
            prefix: prefix.into(),
            content,
        }
    }
}

/// A line starting with a control sigil. The content is the verbatim rest of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLine {
    pub prefix: String,
    pub content: Vec<Token>,
}

impl ControlLine {
    pub fn of_single(prefix: impl Into<String>, content: Token) -> Self {
        Self {
            prefix: prefix.into(),
            content: vec![content],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtLine {
    Surface(SurfaceLabel),
    Column(ColumnLabel),
    Object {
        object: Object,
        text: String,
        status: Vec<Status>,
    },
    Composite {
        composite: Composite,
        text: String,
        number: Option<u32>,
    },
    Discourse(Discourse),
    Heading(u32),
    Seal(u32),
    Division {
        text: String,
        number: Option<u32>,
    },
}

fn with_number(keyword: &str, text: &str, number: Option<u32>) -> String {
    [
        Some(keyword.to_string()),
        (!text.is_empty()).then(|| text.to_string()),
        number.map(|number| number.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

impl AtLine {
    /// Spelling after the `@` prefix.
    pub fn display_value(&self) -> String {
        match self {
            AtLine::Surface(label) => label.atf(),
            AtLine::Column(label) => label.atf(),
            AtLine::Object {
                object,
                text,
                status,
            } => {
                let mut value = with_number(object.atf(), text, None);
                value.push_str(&Status::to_atf(status));
                value
            }
            AtLine::Composite {
                composite,
                text,
                number,
            } => with_number(composite.atf(), text, *number),
            AtLine::Discourse(discourse) => discourse.atf().to_string(),
            AtLine::Heading(number) => format!("h{}", number),
            AtLine::Seal(number) => format!("seal {}", number),
            AtLine::Division { text, number } => with_number("m=division", text, *number),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            AtLine::Surface(_) => "SurfaceAtLine",
            AtLine::Column(_) => "ColumnAtLine",
            AtLine::Object { .. } => "ObjectAtLine",
            AtLine::Composite { .. } => "CompositeAtLine",
            AtLine::Discourse(_) => "DiscourseAtLine",
            AtLine::Heading(_) => "HeadingAtLine",
            AtLine::Seal(_) => "SealAtLine",
            AtLine::Division { .. } => "DivisionAtLine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(TextLine),
    Control(ControlLine),
    Empty,
    At(AtLine),
}

impl Line {
    pub fn prefix(&self) -> &str {
        match self {
            Line::Text(line) => &line.prefix,
            Line::Control(line) => &line.prefix,
            Line::Empty => "",
            Line::At(_) => AT_LINE_PREFIX,
        }
    }

    /// Tokens of the line. At-lines and empty lines have none.
    pub fn content(&self) -> &[Token] {
        match self {
            Line::Text(line) => &line.content,
            Line::Control(line) => &line.content,
            Line::Empty | Line::At(_) => &[],
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Line::Text(_) => "TextLine",
            Line::Control(_) => "ControlLine",
            Line::Empty => "EmptyLine",
            Line::At(line) => line.type_name(),
        }
    }

    /// Re-serialize the line.
    pub fn atf(&self) -> String {
        match self {
            Line::Text(line) => format!("{} {}", line.prefix, content_atf(&line.content)),
            Line::Control(line) => {
                let content: String = line.content.iter().map(Token::value).collect();
                format!("{}{}", line.prefix, content)
            }
            Line::Empty => String::new(),
            Line::At(line) => format!("{}{}", AT_LINE_PREFIX, line.display_value()),
        }
    }
}

fn binds_right(token: &Token) -> bool {
    matches!(
        token,
        Token::Erasure(Side::Left | Side::Center) | Token::DocumentOrientedGloss(Side::Left)
    )
}

fn binds_left(token: &Token) -> bool {
    matches!(
        token,
        Token::Erasure(Side::Center | Side::Right) | Token::DocumentOrientedGloss(Side::Right)
    )
}

/// Join tokens with spaces, except around erasure and gloss markers which attach to their
/// neighbours.
fn content_atf(content: &[Token]) -> String {
    let mut atf = String::new();
    let mut previous: Option<&Token> = None;
    for token in content {
        if let Some(previous) = previous {
            if !binds_right(previous) && !binds_left(token) {
                atf.push(' ');
            }
        }
        atf.push_str(&token.value());
        previous = Some(token);
    }
    atf
}
