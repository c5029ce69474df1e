//! Lexer
//!
//!     This module holds the character level stages of ATF processing. Parsing builds on top of
//!     them; nothing here knows about tokens' meaning.
//!
//! The Stages
//!
//!     1. Line classification. See [line_classification](line_classification).
//!        A physical line is sorted into one production (empty, control, text) by its prefix
//!        alone. At-lines are control lines at this point; the parser tries the at-line
//!        grammar on them.
//!
//!     2. Base tokenization using logos. See [base_tokenization](base_tokenization).
//!        The content of a text line becomes whitespace separated fields, with the erasure
//!        markers `°` and `\` split out as their own tokens since they may touch words.
//!
//!     3. Cleaning. See [cleaning](cleaning).
//!        Independent of the two above: strips all ATF decoration from a transliteration and
//!        leaves the bare readings that sign lookup works on.

pub mod base_tokenization;
pub mod cleaning;
pub mod line_classification;

pub use base_tokenization::{tokenize, RawToken};
pub use cleaning::{clean_line, clean_transliteration};
pub use line_classification::{classify_line, LineKind};
