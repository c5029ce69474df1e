//! ATF symbols
//!
//!     Fixed vocabularies of the format: reserved characters, surfaces, objects, statuses,
//!     composite markers, discourse keywords and commentary protocols. Each enum knows its
//!     ATF spelling; the serialized spelling is the SCREAMING_SNAKE variant name.

use serde::{Deserialize, Serialize};

pub const VARIANT_SEPARATOR: char = '/';
pub const UNCLEAR_SIGN: char = 'x';
pub const UNIDENTIFIED_SIGN: char = 'X';
pub const UNKNOWN_NUMBER_OF_SIGNS: &str = "...";
pub const LINE_CONTINUATION: &str = "→";
pub const TABULATION: &str = "($___$)";
pub const ERASURE_BOUNDARY: &str = "°";
pub const ERASURE_DELIMITER: &str = "\\";
pub const GLOSS_OPEN: &str = "{(";
pub const GLOSS_CLOSE: &str = ")}";

/// Characters that join signs inside a word. A word starting or ending with one is partial.
pub const JOINERS: &[char] = &['-', '+', '.', ':'];

/// Word dividers and other reserved fields that tokenize as plain values.
pub const DIVIDERS: &[&str] = &["|", ":", ";", "/", ":'", ":\"", ":.", "::", "?"];

/// Physical line prefixes of control lines. `=:` must be tried before the single sigils.
pub const CONTROL_SIGILS: &[&str] = &["=:", "&", "@", "$", "#"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Surface {
    Obverse,
    Reverse,
    Bottom,
    Edge,
    Left,
    Right,
    Top,
    Surface,
    Face,
}

impl Surface {
    /// Keyword used after `@` in at-lines.
    pub fn atf(&self) -> &'static str {
        match self {
            Surface::Obverse => "obverse",
            Surface::Reverse => "reverse",
            Surface::Bottom => "bottom",
            Surface::Edge => "edge",
            Surface::Left => "left",
            Surface::Right => "right",
            Surface::Top => "top",
            Surface::Surface => "surface",
            Surface::Face => "face",
        }
    }

    /// Abbreviation used in manuscript labels. Empty when the surface is only named by text.
    pub fn label(&self) -> &'static str {
        match self {
            Surface::Obverse => "o",
            Surface::Reverse => "r",
            Surface::Bottom => "b.e.",
            Surface::Edge => "e.",
            Surface::Left => "l.e.",
            Surface::Right => "r.e.",
            Surface::Top => "t.e.",
            Surface::Surface | Surface::Face => "",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Surface> {
        ALL_SURFACES.iter().copied().find(|s| s.atf() == keyword)
    }

    pub fn from_label(abbreviation: &str) -> Option<Surface> {
        ALL_SURFACES
            .iter()
            .copied()
            .find(|s| !s.label().is_empty() && s.label() == abbreviation)
    }
}

const ALL_SURFACES: &[Surface] = &[
    Surface::Obverse,
    Surface::Reverse,
    Surface::Bottom,
    Surface::Edge,
    Surface::Left,
    Surface::Right,
    Surface::Top,
    Surface::Surface,
    Surface::Face,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Prime,
    Uncertain,
    Correction,
    Collation,
}

impl Status {
    pub fn atf(&self) -> char {
        match self {
            Status::Prime => '\'',
            Status::Uncertain => '?',
            Status::Correction => '!',
            Status::Collation => '*',
        }
    }

    pub fn from_atf(c: char) -> Option<Status> {
        match c {
            '\'' => Some(Status::Prime),
            '?' => Some(Status::Uncertain),
            '!' => Some(Status::Correction),
            '*' => Some(Status::Collation),
            _ => None,
        }
    }

    /// Parse a run of status characters, preserving source order.
    pub fn parse_all(statuses: &str) -> Option<Vec<Status>> {
        statuses.chars().map(Status::from_atf).collect()
    }

    pub fn to_atf(statuses: &[Status]) -> String {
        statuses.iter().map(Status::atf).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Object {
    Tablet,
    Envelope,
    Prism,
    Bulla,
    Fragment,
    Object,
}

impl Object {
    pub fn atf(&self) -> &'static str {
        match self {
            Object::Tablet => "tablet",
            Object::Envelope => "envelope",
            Object::Prism => "prism",
            Object::Bulla => "bulla",
            Object::Fragment => "fragment",
            Object::Object => "object",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Object> {
        [
            Object::Tablet,
            Object::Envelope,
            Object::Prism,
            Object::Bulla,
            Object::Fragment,
            Object::Object,
        ]
        .into_iter()
        .find(|o| o.atf() == keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Composite {
    Div,
    End,
    Composite,
    Milestone,
}

impl Composite {
    pub fn atf(&self) -> &'static str {
        match self {
            Composite::Div => "div",
            Composite::End => "end",
            Composite::Composite => "composite",
            Composite::Milestone => "m=locator",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discourse {
    Catchline,
    Colophon,
    Date,
    Signature,
    Signatures,
    Summary,
    Witnesses,
}

impl Discourse {
    pub fn atf(&self) -> &'static str {
        match self {
            Discourse::Catchline => "catchline",
            Discourse::Colophon => "colophon",
            Discourse::Date => "date",
            Discourse::Signature => "signature",
            Discourse::Signatures => "signatures",
            Discourse::Summary => "summary",
            Discourse::Witnesses => "witnesses",
        }
    }

    pub fn from_atf(keyword: &str) -> Option<Discourse> {
        [
            Discourse::Catchline,
            Discourse::Colophon,
            Discourse::Date,
            Discourse::Signature,
            Discourse::Signatures,
            Discourse::Summary,
            Discourse::Witnesses,
        ]
        .into_iter()
        .find(|d| d.atf() == keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentaryProtocol {
    Quotation,
    BaseText,
    Commentary,
    Uncertain,
}

impl CommentaryProtocol {
    pub fn atf(&self) -> &'static str {
        match self {
            CommentaryProtocol::Quotation => "!qt",
            CommentaryProtocol::BaseText => "!bs",
            CommentaryProtocol::Commentary => "!cm",
            CommentaryProtocol::Uncertain => "!zz",
        }
    }

    pub fn from_atf(code: &str) -> Option<CommentaryProtocol> {
        match code {
            "!qt" => Some(CommentaryProtocol::Quotation),
            "!bs" => Some(CommentaryProtocol::BaseText),
            "!cm" => Some(CommentaryProtocol::Commentary),
            "!zz" => Some(CommentaryProtocol::Uncertain),
            _ => None,
        }
    }
}

/// Which side of a paired marker a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Left,
    Center,
    Right,
}
