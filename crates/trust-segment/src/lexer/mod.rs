//! Boundary scanner for Structured Text units.
//!
//! The [`Lexer`] produces raw tokens; the [`Scanner`] reduces them to the
//! ordered [`Delimiter`] sequence that the tree builder consumes. Comments,
//! pragmas and literals are matched in the same pass and dropped, so
//! keyword-like text inside them never becomes a boundary.

mod line_index;
mod scanner;
mod tokens;

pub use line_index::LineIndex;
pub use scanner::{detect_kind, scan, Delimiter, Scanner};
pub use tokens::TokenKind;

use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The byte range of the token in the source text.
    pub range: TextRange,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    /// Returns the text of the token.
    #[must_use]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.range]
    }
}

/// Tokenizer over one source text.
///
/// Unrecognized characters are returned as [`TokenKind::Error`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: TokenKind::lexer(source),
        }
    }

    /// Returns the source text being lexed.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.inner.source()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let kind = self.inner.next()?.unwrap_or(TokenKind::Error);
        let span = self.inner.span();
        let range = TextRange::new(
            TextSize::from(span.start as u32),
            TextSize::from(span.end as u32),
        );
        Some(Token::new(kind, range))
    }
}

/// Lex the entire source and return all tokens.
#[must_use]
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
