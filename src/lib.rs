//! # ebl-atf
//!
//! A parser for the Akkadian Transliteration Format (ATF).
//!
//! File Layout
//!
//! Everything lives under [atf](atf). The pipeline runs leaves first:
//!
//! src/atf
//!   ├── lexing          Raw tokens, line classification and the line cleaner
//!   ├── parsing         Text-line tokenizer, at-line grammar and the document parser
//!   ├── ast             Tokens, lines, labels, annotations and their serialized records
//!   ├── signs           Lexical pattern matcher, sign resolver and sign-line search
//!   ├── reconstruction  Reconstructed (idealized) corpus lines
//!   ├── corpus          Manuscript lines and their labels
//!   ├── fragment        The transliteration update workflow
//!   └── config          Layered configuration for the command-line tool
//!
//! The core is synchronous and pure: every operation maps an input string or tree to a new
//! tree or a typed error. Sign catalog lookups go through the
//! [SignRepository](atf::signs::SignRepository) trait and are the only collaborator.

#![allow(rustdoc::invalid_html_tags)]

pub mod atf;
