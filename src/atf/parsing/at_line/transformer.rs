//! At-line transformer
//!
//! Builds the typed at-line for a matched grammar rule from its named captures.

use regex::Captures;

use crate::atf::ast::labels::{ColumnLabel, SurfaceLabel};
use crate::atf::ast::lines::AtLine;
use crate::atf::ast::symbols::{Composite, Discourse, Object, Status, Surface};

fn text(captures: &Captures<'_>) -> String {
    captures
        .name("text")
        .map(|text| text.as_str().to_string())
        .unwrap_or_default()
}

fn status(captures: &Captures<'_>) -> Option<Vec<Status>> {
    Status::parse_all(captures.name("status").map_or("", |status| status.as_str()))
}

/// `None` when a required number is missing or does not fit.
fn number(captures: &Captures<'_>) -> Option<u32> {
    captures.name("number")?.as_str().parse().ok()
}

/// An optional trailing number. A present but unparsable number fails the rule.
fn optional_number(captures: &Captures<'_>) -> Option<Option<u32>> {
    match captures.name("number") {
        Some(number) => number.as_str().parse().ok().map(Some),
        None => Some(None),
    }
}

fn surface(surface: Surface, captures: &Captures<'_>) -> Option<AtLine> {
    Some(AtLine::Surface(SurfaceLabel::new(
        surface,
        status(captures)?,
        text(captures),
    )))
}

fn object(object: Object, captures: &Captures<'_>) -> Option<AtLine> {
    Some(AtLine::Object {
        object,
        text: text(captures),
        status: status(captures)?,
    })
}

fn composite(composite: Composite, captures: &Captures<'_>) -> Option<AtLine> {
    Some(AtLine::Composite {
        composite,
        text: text(captures),
        number: optional_number(captures)?,
    })
}

/// Build the at-line for the rule `name`.
pub fn transform(name: &str, captures: &Captures<'_>) -> Option<AtLine> {
    match name {
        "seal" => Some(AtLine::Seal(number(captures)?)),
        "column" => Some(AtLine::Column(ColumnLabel::new(
            number(captures)?,
            status(captures)?,
        ))),
        "heading" => Some(AtLine::Heading(number(captures)?)),
        "discourse" => Some(AtLine::Discourse(Discourse::from_atf(
            captures.name("discourse")?.as_str(),
        )?)),
        "surface" => surface(Surface::from_atf(captures.name("surface")?.as_str())?, captures),
        "edge" => surface(Surface::Edge, captures),
        "face" => surface(Surface::Face, captures),
        "generic_surface" => surface(Surface::Surface, captures),
        "object" => object(Object::from_atf(captures.name("object")?.as_str())?, captures),
        "generic_object" => object(Object::Object, captures),
        "fragment" => object(Object::Fragment, captures),
        "division" => Some(AtLine::Division {
            text: text(captures),
            number: optional_number(captures)?,
        }),
        "composite_start" => composite(Composite::Div, captures),
        "composite_end" => composite(Composite::End, captures),
        "composite" => composite(Composite::Composite, captures),
        "milestone" => composite(Composite::Milestone, captures),
        _ => None,
    }
}
