//! Sign lookup
//!
//!     From cleaned transliteration values to canonical sign ids, and searching documents by
//!     their signs.
//!
//!     - [patterns]: shape of a value (broken, explicit sign, number, grapheme, reading,
//!       variant), first match wins
//!     - [resolver]: looks readings up in a [repository] and degrades misses to a marker
//!     - [search]: matches a query's sign lines against a signs document

pub mod patterns;
pub mod repository;
pub mod resolver;
pub mod search;

pub use repository::{MemorySignRepository, Sign, SignRepository, SignValue};
pub use resolver::{transliteration_to_signs, SignList, UNIDENTIFIED_SIGN, UNKNOWN_SIGN};
pub use search::SignQuery;
