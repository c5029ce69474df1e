//! Sign line search
//!
//!     Finds where a query occurs in a signs document (rows of space separated sign ids, one
//!     row per line). A query is a sequence of lines; a match is a window of consecutive
//!     document lines where the signs of each query line occur as a contiguous run of whole
//!     signs in the corresponding document line. `?` and `X` in the query match any sign.

use std::ops::Range;

use super::resolver::{SignList, UNIDENTIFIED_SIGN, UNKNOWN_SIGN};
use super::repository::SignRepository;
use crate::atf::lexing::cleaning::clean_transliteration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignQuery {
    lines: Vec<Vec<String>>,
}

impl SignQuery {
    /// Build from one signs string per query line.
    pub fn new(lines: &[String]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| line.split_whitespace().map(str::to_string).collect())
                .collect(),
        }
    }

    /// Build from an ATF transliteration by cleaning it and mapping it to signs.
    pub fn from_transliteration<R: SignRepository>(atf: &str, sign_list: &SignList<R>) -> Self {
        let rows = sign_list.map_transliteration(&clean_transliteration(atf));
        Self {
            lines: rows
                .into_iter()
                .map(|row| row.into_iter().filter(|sign| !sign.is_empty()).collect())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Vec::is_empty)
    }

    /// Line ranges of the document that match the query, in document order.
    pub fn matching_lines(&self, signs: &str) -> Vec<Range<usize>> {
        if self.is_empty() {
            return Vec::new();
        }
        let document: Vec<Vec<&str>> = signs
            .split('\n')
            .map(|line| line.split_whitespace().collect())
            .collect();
        let length = self.lines.len();
        if document.len() < length {
            return Vec::new();
        }
        (0..=document.len() - length)
            .filter(|start| {
                self.lines
                    .iter()
                    .zip(&document[*start..*start + length])
                    .all(|(query, line)| contains_run(line, query))
            })
            .map(|start| start..start + length)
            .collect()
    }
}

fn sign_matches(query: &str, sign: &str) -> bool {
    query == UNKNOWN_SIGN || query == UNIDENTIFIED_SIGN || query == sign
}

fn contains_run(line: &[&str], query: &[String]) -> bool {
    query.is_empty()
        || line.windows(query.len()).any(|window| {
            window
                .iter()
                .zip(query)
                .all(|(sign, query)| sign_matches(query, sign))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(lines: &[&str]) -> SignQuery {
        SignQuery::new(&lines.iter().map(|line| line.to_string()).collect::<Vec<_>>())
    }

    const SIGNS: &str = "KU NU IGI\nMI DIŠ UD ŠU\nKI DU U BA MA TI\nX MU TA MA UD\nŠU/|BI×IS|";

    #[test]
    fn test_single_line() {
        assert_eq!(query(&["DIŠ UD"]).matching_lines(SIGNS), vec![1..2]);
        assert_eq!(query(&["UD"]).matching_lines(SIGNS), vec![1..2, 3..4]);
    }

    #[test]
    fn test_whole_signs_only() {
        assert_eq!(query(&["U"]).matching_lines(SIGNS), vec![2..3]);
        assert!(query(&["IŠ"]).matching_lines(SIGNS).is_empty());
    }

    #[test]
    fn test_consecutive_lines() {
        assert_eq!(
            query(&["IGI", "MI DIŠ"]).matching_lines(SIGNS),
            vec![0..2]
        );
        assert!(query(&["IGI", "KI"]).matching_lines(SIGNS).is_empty());
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(query(&["MA X"]).matching_lines(SIGNS), vec![2..3, 3..4]);
        assert_eq!(query(&["? MU"]).matching_lines(SIGNS), vec![3..4]);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        assert!(query(&[]).matching_lines(SIGNS).is_empty());
        assert!(query(&[""]).matching_lines(SIGNS).is_empty());
    }

    #[test]
    fn test_query_longer_than_document() {
        assert!(query(&["KU", "MI", "KI"]).matching_lines("KU\nMI").is_empty());
    }
}
