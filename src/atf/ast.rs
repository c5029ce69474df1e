//! AST types for ATF documents
//!
//! A parsed document is a [`Text`]: an ordered list of [`Line`]s. Text and control lines hold
//! [`Token`]s; at-lines hold typed labels. Everything here is an immutable value; annotating
//! or merging returns new values.

pub mod annotation;
pub mod error;
pub mod labels;
pub mod language;
pub mod lines;
pub mod records;
pub mod symbols;
pub mod text;
pub mod tokens;

pub use annotation::{
    Alignment, AlignmentToken, Lemmatization, LemmatizationToken, WordId,
};
pub use error::{
    AlignmentError, LabelError, LemmatizationError, ParseError, ParseErrorKind, RecordError,
};
pub use labels::{parse_labels, ColumnLabel, Label, LineNumberLabel, SurfaceLabel};
pub use language::Language;
pub use lines::{AtLine, ControlLine, Line, TextLine};
pub use records::{text_from_records, text_to_records, LineRecord, TokenRecord};
pub use symbols::{
    CommentaryProtocol, Composite, Discourse, Object, Side, Status, Surface,
};
pub use text::Text;
pub use tokens::{ErasureState, LoneDeterminative, Partial, Token, Word};
