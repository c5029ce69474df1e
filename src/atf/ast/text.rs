//! A parsed document
//!
//!     `Text` owns the lines of one document. Lemmatization and alignment are read and written
//!     as rows parallel to the lines; writing is strict and rejects the whole update on the
//!     first incompatible token. Merging with a newer parse is positional and never fails.

use super::annotation::{Alignment, AlignmentToken, Lemmatization, LemmatizationToken};
use super::error::{AlignmentError, LemmatizationError};
use super::lines::{ControlLine, Line, TextLine};
use super::tokens::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub lines: Vec<Line>,
}

impl Text {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn atf(&self) -> String {
        self.lines
            .iter()
            .map(Line::atf)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn lemmatization(&self) -> Lemmatization {
        Lemmatization::new(
            self.lines
                .iter()
                .map(|line| line.content().iter().map(Token::lemmatization_token).collect())
                .collect(),
        )
    }

    pub fn alignment(&self) -> Alignment {
        Alignment::new(
            self.lines
                .iter()
                .map(|line| line.content().iter().map(Token::alignment_token).collect())
                .collect(),
        )
    }

    pub fn update_lemmatization(&self, lemmatization: &Lemmatization) -> Result<Text, LemmatizationError> {
        let lines = annotate(
            &self.lines,
            &lemmatization.tokens,
            |token, lemma: &LemmatizationToken| token.set_unique_lemma(lemma),
            || LemmatizationError::new("lemmatization does not match the lines of the text"),
        )?;
        Ok(Text::new(lines))
    }

    pub fn update_alignment(&self, alignment: &Alignment) -> Result<Text, AlignmentError> {
        let lines = annotate(
            &self.lines,
            &alignment.tokens,
            |token, alignment: &AlignmentToken| token.set_alignment(alignment),
            || AlignmentError::new("alignment does not match the lines of the text"),
        )?;
        Ok(Text::new(lines))
    }

    /// Carry annotations of this text over to `new`, line by line and token by token.
    /// Lines are paired by index; a text line only merges with a text line.
    pub fn merge(&self, new: &Text) -> Text {
        let lines = new
            .lines
            .iter()
            .enumerate()
            .map(|(index, new_line)| match (self.lines.get(index), new_line) {
                (Some(Line::Text(old)), Line::Text(line)) => Line::Text(TextLine::new(
                    line.prefix.clone(),
                    merge_tokens(&old.content, &line.content),
                )),
                _ => new_line.clone(),
            })
            .collect();
        Text::new(lines)
    }

    pub fn strip_alignment(&self) -> Text {
        Text::new(
            self.lines
                .iter()
                .map(|line| map_content(line, |content| content.iter().map(Token::strip_alignment).collect()))
                .collect(),
        )
    }
}

fn merge_tokens(old: &[Token], new: &[Token]) -> Vec<Token> {
    new.iter()
        .enumerate()
        .map(|(index, token)| match old.get(index) {
            Some(old_token) => old_token.merge(token),
            None => token.clone(),
        })
        .collect()
}

fn map_content(line: &Line, f: impl FnOnce(&[Token]) -> Vec<Token>) -> Line {
    match line {
        Line::Text(text) => Line::Text(TextLine::new(text.prefix.clone(), f(&text.content))),
        Line::Control(control) => Line::Control(ControlLine {
            prefix: control.prefix.clone(),
            content: f(&control.content),
        }),
        Line::Empty | Line::At(_) => line.clone(),
    }
}

/// Apply one annotation row per line. Row and content lengths must match exactly.
fn annotate<A, E>(
    lines: &[Line],
    rows: &[Vec<A>],
    set: impl Fn(&Token, &A) -> Result<Token, E>,
    mismatch: impl Fn() -> E,
) -> Result<Vec<Line>, E> {
    if lines.len() != rows.len() {
        return Err(mismatch());
    }
    lines
        .iter()
        .zip(rows)
        .map(|(line, row)| {
            if line.content().len() != row.len() {
                return Err(mismatch());
            }
            let content = line
                .content()
                .iter()
                .zip(row)
                .map(|(token, annotation)| set(token, annotation))
                .collect::<Result<Vec<_>, E>>()?;
            Ok(map_content(line, |_| content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atf::ast::tokens::Word;

    fn text_line(prefix: &str, content: Vec<Token>) -> Line {
        Line::Text(TextLine::new(prefix, content))
    }

    fn lemmatized(value: &str, lemma: &str) -> Token {
        Token::Word(Word::new(value).with_unique_lemma(vec![lemma.to_string()]))
    }

    #[test]
    fn test_lemmatization_round_trip() {
        let text = Text::new(vec![
            text_line("1.", vec![lemmatized("kur", "word1"), Token::value_token("|")]),
            Line::Empty,
        ]);
        let lemmatization = text.lemmatization();

        assert_eq!(
            lemmatization.tokens,
            vec![
                vec![
                    LemmatizationToken::new("kur", Some(vec!["word1".to_string()])),
                    LemmatizationToken::new("|", None),
                ],
                vec![],
            ]
        );
        let stripped = Text::new(vec![
            text_line("1.", vec![Token::word("kur"), Token::value_token("|")]),
            Line::Empty,
        ]);
        assert_eq!(stripped.update_lemmatization(&lemmatization), Ok(text));
    }

    #[test]
    fn test_update_lemmatization_rejects_shape_mismatch() {
        let text = Text::new(vec![text_line("1.", vec![Token::word("kur")])]);
        let lemmatization = Lemmatization::new(vec![vec![], vec![]]);

        assert!(text.update_lemmatization(&lemmatization).is_err());
    }

    #[test]
    fn test_update_alignment() {
        let text = Text::new(vec![text_line("1.", vec![Token::word("kur")])]);
        let alignment = Alignment::new(vec![vec![AlignmentToken::new("kur", Some(0))]]);
        let aligned = text.update_alignment(&alignment).unwrap();

        assert_eq!(aligned.alignment(), alignment);
        assert_eq!(aligned.strip_alignment(), text);
    }

    #[test]
    fn test_merge_is_positional() {
        let old = Text::new(vec![
            text_line("1.", vec![lemmatized("kur", "word1"), lemmatized("ra", "word2")]),
            text_line("2.", vec![lemmatized("mu", "word3")]),
        ]);
        let new = Text::new(vec![
            text_line("1.", vec![Token::word("kur"), Token::word("pa")]),
            Line::Empty,
            text_line("3.", vec![Token::word("mu")]),
        ]);

        assert_eq!(
            old.merge(&new),
            Text::new(vec![
                text_line("1.", vec![lemmatized("kur", "word1"), Token::word("pa")]),
                Line::Empty,
                text_line("3.", vec![Token::word("mu")]),
            ])
        );
    }
}
