//! Reconstructed lines
//!
//!     The idealized (normalized Akkadian) line of a corpus chapter, e.g.
//!
//!         ibnû? [...] | [(...)] || ...
//!
//!     Fields are words, lacunae (`...` in optional broken-off brackets), caesurae (`||`) and
//!     metrical foot separators (`|`); the last two are uncertain when parenthesized. Words are
//!     runs of text and broken-off brackets followed by modifiers (`#` broken, `?` uncertain).
//!     Modifiers always serialize before a final closing bracket: `ib[nû?]`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::atf::ast::error::{ParseError, ParseErrorKind};

static LACUNA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<open>\[\(|\[|\()?\.\.\.(?P<close>\)\]|\]|\))?$").unwrap()
});
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<body>.+?)(?P<modifiers>[#?]*)(?P<close>\)\]|\]|\))?$").unwrap()
});
static PART: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\(|\[|\(|\)\]|\]|\)|[^\[\]()]+").unwrap());
static TEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}ʾ\-]+$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modifier {
    Broken,
    Uncertain,
}

impl Modifier {
    pub fn atf(&self) -> char {
        match self {
            Modifier::Broken => '#',
            Modifier::Uncertain => '?',
        }
    }

    fn from_atf(c: char) -> Option<Modifier> {
        match c {
            '#' => Some(Modifier::Broken),
            '?' => Some(Modifier::Uncertain),
            _ => None,
        }
    }
}

/// Which brackets a broken-off marker uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrokenOff {
    /// `[(` or `)]`
    Both,
    /// `[` or `]`
    Broken,
    /// `(` or `)`
    Maybe,
}

impl BrokenOff {
    fn open(&self) -> &'static str {
        match self {
            BrokenOff::Both => "[(",
            BrokenOff::Broken => "[",
            BrokenOff::Maybe => "(",
        }
    }

    fn close(&self) -> &'static str {
        match self {
            BrokenOff::Both => ")]",
            BrokenOff::Broken => "]",
            BrokenOff::Maybe => ")",
        }
    }

    fn of_open(open: &str) -> Option<BrokenOff> {
        [BrokenOff::Both, BrokenOff::Broken, BrokenOff::Maybe]
            .into_iter()
            .find(|broken_off| broken_off.open() == open)
    }

    fn of_close(close: &str) -> Option<BrokenOff> {
        [BrokenOff::Both, BrokenOff::Broken, BrokenOff::Maybe]
            .into_iter()
            .find(|broken_off| broken_off.close() == close)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Part {
    StringPart { value: String },
    BrokenOffOpen { value: BrokenOff },
    BrokenOffClose { value: BrokenOff },
}

impl Part {
    pub fn is_text(&self) -> bool {
        matches!(self, Part::StringPart { .. })
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::StringPart { value } => write!(f, "{}", value),
            Part::BrokenOffOpen { value } => write!(f, "{}", value.open()),
            Part::BrokenOffClose { value } => write!(f, "{}", value.close()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReconstructionToken {
    AkkadianWord {
        parts: Vec<Part>,
        modifiers: Vec<Modifier>,
    },
    Lacuna {
        open: Option<BrokenOff>,
        close: Option<BrokenOff>,
    },
    Caesura {
        uncertain: bool,
    },
    MetricalFootSeparator {
        uncertain: bool,
    },
}

fn write_break(f: &mut fmt::Formatter<'_>, value: &str, uncertain: bool) -> fmt::Result {
    if uncertain {
        write!(f, "({})", value)
    } else {
        write!(f, "{}", value)
    }
}

impl fmt::Display for ReconstructionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconstructionToken::AkkadianWord { parts, modifiers } => {
                let modifiers: String = modifiers.iter().map(Modifier::atf).collect();
                let (body, last) = match parts.split_last() {
                    Some((last, body)) if !last.is_text() => (body, Some(last)),
                    _ => (&parts[..], None),
                };
                for part in body {
                    write!(f, "{}", part)?;
                }
                write!(f, "{}", modifiers)?;
                match last {
                    Some(last) => write!(f, "{}", last),
                    None => Ok(()),
                }
            }
            ReconstructionToken::Lacuna { open, close } => {
                let open = open.map_or("", |open| open.open());
                let close = close.map_or("", |close| close.close());
                write!(f, "{}...{}", open, close)
            }
            ReconstructionToken::Caesura { uncertain } => write_break(f, "||", *uncertain),
            ReconstructionToken::MetricalFootSeparator { uncertain } => {
                write_break(f, "|", *uncertain)
            }
        }
    }
}

/// Parse a reconstructed line into its fields.
pub fn parse_reconstructed_line(line: &str) -> Result<Vec<ReconstructionToken>, ParseError> {
    line.split_whitespace()
        .map(|field| {
            parse_field(field).ok_or_else(|| {
                ParseError::new(1, line, ParseErrorKind::InvalidToken(field.to_string()))
            })
        })
        .collect()
}

fn parse_field(field: &str) -> Option<ReconstructionToken> {
    match field {
        "||" => return Some(ReconstructionToken::Caesura { uncertain: false }),
        "(||)" => return Some(ReconstructionToken::Caesura { uncertain: true }),
        "|" => return Some(ReconstructionToken::MetricalFootSeparator { uncertain: false }),
        "(|)" => return Some(ReconstructionToken::MetricalFootSeparator { uncertain: true }),
        _ => {}
    }
    if let Some(captures) = LACUNA.captures(field) {
        return Some(ReconstructionToken::Lacuna {
            open: captures
                .name("open")
                .and_then(|open| BrokenOff::of_open(open.as_str())),
            close: captures
                .name("close")
                .and_then(|close| BrokenOff::of_close(close.as_str())),
        });
    }
    parse_word(field)
}

fn parse_word(field: &str) -> Option<ReconstructionToken> {
    let captures = WORD.captures(field)?;
    let mut parts = PART
        .find_iter(captures.name("body")?.as_str())
        .map(|part| parse_part(part.as_str()))
        .collect::<Option<Vec<_>>>()?;
    if let Some(close) = captures.name("close") {
        parts.push(Part::BrokenOffClose {
            value: BrokenOff::of_close(close.as_str())?,
        });
    }
    if !parts.iter().any(Part::is_text) {
        return None;
    }
    let modifiers = captures
        .name("modifiers")
        .map_or("", |modifiers| modifiers.as_str())
        .chars()
        .map(Modifier::from_atf)
        .collect::<Option<Vec<_>>>()?;
    Some(ReconstructionToken::AkkadianWord { parts, modifiers })
}

fn parse_part(part: &str) -> Option<Part> {
    if let Some(value) = BrokenOff::of_open(part) {
        Some(Part::BrokenOffOpen { value })
    } else if let Some(value) = BrokenOff::of_close(part) {
        Some(Part::BrokenOffClose { value })
    } else if TEXT.is_match(part) {
        Some(Part::StringPart {
            value: part.to_string(),
        })
    } else {
        None
    }
}
