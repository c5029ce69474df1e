//! Parser
//!
//!     The document parser maps every physical line to exactly one [`Line`]. Lines are
//!     independent of each other: no state carries over from one line to the next, and the
//!     first malformed line fails the whole document.
//!
//!     For each line:
//!         1. [classify_line](crate::atf::lexing::line_classification::classify_line) picks
//!            the production from the line prefix.
//!         2. `@` lines are tried against the [at_line] grammar. A `@` line that is not a
//!            structural marker stays a control line.
//!         3. Text line content is tokenized by [text_line].

pub mod at_line;
pub mod text_line;

use crate::atf::ast::error::{ParseError, ParseErrorKind};
use crate::atf::ast::lines::{ControlLine, Line, TextLine, AT_LINE_PREFIX};
use crate::atf::ast::text::Text;
use crate::atf::ast::tokens::Token;
use crate::atf::lexing::line_classification::{classify_line, LineKind};

/// Parse a whole ATF document.
pub fn parse_atf(atf: &str) -> Result<Text, ParseError> {
    atf.lines()
        .enumerate()
        .map(|(index, line)| parse_line(line, index + 1))
        .collect::<Result<Vec<_>, _>>()
        .map(Text::new)
}

/// Parse one physical line. `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Line, ParseError> {
    let fail = |kind: ParseErrorKind| {
        tracing::debug!(line_number, %kind, "invalid ATF line");
        ParseError::new(line_number, line, kind)
    };

    match classify_line(line) {
        LineKind::Empty => Ok(Line::Empty),
        LineKind::Control { sigil, rest } => {
            if sigil == AT_LINE_PREFIX {
                if let Some(at_line) = at_line::parse_at_line(rest) {
                    return Ok(Line::At(at_line));
                }
                tracing::trace!(line_number, "not a structural at-line, kept as control line");
            }
            Ok(Line::Control(ControlLine::of_single(
                sigil,
                Token::value_token(rest),
            )))
        }
        LineKind::Text { prefix, content } => text_line::parse_text_content(content)
            .map(|content| Line::Text(TextLine::new(prefix, content)))
            .map_err(fail),
        LineKind::Invalid => Err(fail(ParseErrorKind::InvalidLine)),
    }
}
