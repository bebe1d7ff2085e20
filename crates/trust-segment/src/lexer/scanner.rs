use std::iter::Peekable;

use smol_str::SmolStr;
use text_size::TextSize;

use super::{Lexer, LineIndex, Token, TokenKind};
use crate::kind::{DelimiterKind, ElementKind};
use crate::segment::LineSegment;

/// An opening or closing keyword occurrence with the lines it claims.
///
/// The segment starts on the line after the previous delimiter ended, so
/// comments and blank lines in front of a keyword belong to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    /// Opening or closing keyword.
    pub kind: DelimiterKind,
    /// Element name, present for named openers only.
    pub name: Option<SmolStr>,
    /// Lines claimed by this delimiter.
    pub segment: LineSegment,
}

impl Delimiter {
    /// Returns the opened kind, or `None` for a closing delimiter.
    #[must_use]
    pub fn opens(&self) -> Option<ElementKind> {
        match self.kind {
            DelimiterKind::Open(kind) => Some(kind),
            DelimiterKind::Close(_) => None,
        }
    }
}

/// Iterator over the delimiters of one source text.
pub struct Scanner<'src> {
    source: &'src str,
    tokens: Peekable<Lexer<'src>>,
    index: LineIndex,
    last_line: u32,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::new(source).peekable(),
            index: LineIndex::new(source),
            last_line: 0,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        self.tokens.find(|token| !token.kind.is_trivia())
    }

    fn peek_token(&mut self) -> Option<Token> {
        while let Some(token) = self.tokens.peek() {
            if !token.kind.is_trivia() {
                return Some(*token);
            }
            self.tokens.next();
        }
        None
    }

    /// Reads the name that follows a named opener, skipping modifiers.
    ///
    /// A modifier spelled in place of the name (`METHOD Final`) is taken as
    /// the name. Returns the name and the offset where it ends.
    fn element_name(&mut self, kind: ElementKind) -> Option<(SmolStr, TextSize)> {
        let allows_modifiers = matches!(kind, ElementKind::FunctionBlock | ElementKind::Method);
        let mut last_modifier = None;
        while let Some(token) = self.peek_token() {
            if token.kind == TokenKind::Ident {
                self.tokens.next();
                return Some((SmolStr::new(token.text(self.source)), token.range.end()));
            }
            if !(allows_modifiers && token.kind.is_modifier()) {
                break;
            }
            self.tokens.next();
            last_modifier = Some(token);
        }
        last_modifier.map(|token| (SmolStr::new(token.text(self.source)), token.range.end()))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Delimiter;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.next_token()?;
            let Some(kind) = token.kind.delimiter() else {
                continue;
            };
            let (name, end) = match kind {
                DelimiterKind::Open(open) if open.is_named() => {
                    match self.element_name(open) {
                        Some((name, end)) => (Some(name), end),
                        // a bare keyword (`fb.Method()`) is body text
                        None => continue,
                    }
                }
                _ => (None, token.range.end()),
            };
            let end_line = self.index.line_of(end);
            let segment = LineSegment::new(self.last_line + 1, end_line);
            self.last_line = end_line;
            return Some(Delimiter {
                kind,
                name,
                segment,
            });
        }
    }
}

/// Scans `source` into its ordered delimiter sequence.
///
/// Returns an empty vector when the text holds no boundary keyword.
#[must_use]
pub fn scan(source: &str) -> Vec<Delimiter> {
    Scanner::new(source).collect()
}

/// Returns the kind of the first element opened in `text`.
///
/// Used to derive the closing keyword of a stored declaration.
#[must_use]
pub fn detect_kind(text: &str) -> Option<ElementKind> {
    Scanner::new(text).find_map(|delimiter| delimiter.opens())
}
