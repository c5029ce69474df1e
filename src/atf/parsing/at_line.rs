//! Structural `@` lines
//!
//!     Parsing is split in two like the rest of the grammar: [grammar](grammar) holds the
//!     ordered rules as data, [transformer](transformer) turns a rule's captures into an
//!     [`AtLine`]. A line that matches no rule is not an at-line; the caller keeps it as a
//!     control line.

pub mod grammar;
pub mod transformer;

use crate::atf::ast::lines::AtLine;

/// Parse the text after `@`.
pub fn parse_at_line(text: &str) -> Option<AtLine> {
    let (name, captures) = grammar::match_rule(text)?;
    let line = transformer::transform(name, &captures);
    if line.is_none() {
        tracing::trace!(rule = name, text, "at-line rule matched but did not transform");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::ast::labels::{ColumnLabel, SurfaceLabel};
    use crate::atf::ast::symbols::{Composite, Discourse, Object, Status, Surface};
    use rstest::rstest;

    #[rstest]
    #[case("seal 1", AtLine::Seal(1))]
    #[case("h2", AtLine::Heading(2))]
    #[case("colophon", AtLine::Discourse(Discourse::Colophon))]
    #[case(
        "column 3*'",
        AtLine::Column(ColumnLabel::new(3, vec![Status::Collation, Status::Prime]))
    )]
    #[case(
        "reverse!",
        AtLine::Surface(SurfaceLabel::new(Surface::Reverse, vec![Status::Correction], ""))
    )]
    #[case("edge a", AtLine::Surface(SurfaceLabel::new(Surface::Edge, vec![], "a")))]
    #[case("edge", AtLine::Surface(SurfaceLabel::new(Surface::Edge, vec![], "")))]
    #[case("face c?", AtLine::Surface(SurfaceLabel::new(Surface::Face, vec![Status::Uncertain], "c")))]
    #[case(
        "surface stone",
        AtLine::Surface(SurfaceLabel::new(Surface::Surface, vec![], "stone"))
    )]
    #[case(
        "envelope'",
        AtLine::Object { object: Object::Envelope, text: String::new(), status: vec![Status::Prime] }
    )]
    #[case(
        "object stone",
        AtLine::Object { object: Object::Object, text: "stone".to_string(), status: vec![] }
    )]
    #[case(
        "fragment a",
        AtLine::Object { object: Object::Fragment, text: "a".to_string(), status: vec![] }
    )]
    #[case(
        "m=division paragraph 5",
        AtLine::Division { text: "paragraph".to_string(), number: Some(5) }
    )]
    #[case(
        "div part-names 1",
        AtLine::Composite { composite: Composite::Div, text: "part-names".to_string(), number: Some(1) }
    )]
    #[case(
        "div part-names",
        AtLine::Composite { composite: Composite::Div, text: "part-names".to_string(), number: None }
    )]
    #[case(
        "end part-names",
        AtLine::Composite { composite: Composite::End, text: "part-names".to_string(), number: None }
    )]
    #[case(
        "composite",
        AtLine::Composite { composite: Composite::Composite, text: String::new(), number: None }
    )]
    fn test_parse_at_line(#[case] text: &str, #[case] expected: AtLine) {
        assert_eq!(parse_at_line(text), Some(expected));
    }

    #[rstest]
    #[case("foo")]
    #[case("seal 99999999999")]
    fn test_not_an_at_line(#[case] text: &str) {
        assert_eq!(parse_at_line(text), None);
    }

    #[rstest]
    #[case("obverse'?")]
    #[case("column 1!")]
    #[case("surface thing*")]
    #[case("div part 1")]
    #[case("m=division paragraph")]
    #[case("signatures")]
    fn test_display_value_reverses_parse(#[case] text: &str) {
        assert_eq!(parse_at_line(text).map(|line| line.display_value()), Some(text.to_string()));
    }
}
