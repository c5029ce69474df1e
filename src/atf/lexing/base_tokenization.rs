//! Base tokenization of text line content
//!
//! Raw tokenization using the logos lexer library. Fields are maximal runs of anything but
//! whitespace and erasure markers, so every input tokenizes without errors.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    #[regex(r"\s+")]
    Whitespace,

    #[token("°")]
    ErasureBoundary,

    #[token("\\")]
    ErasureDelimiter,

    #[regex(r"[^\s°\\]+", |lex| lex.slice().to_string())]
    Field(String),
}

/// Tokenize line content with location information.
pub fn tokenize(source: &str) -> Vec<(RawToken, logos::Span)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
