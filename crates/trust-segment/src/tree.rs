//! Element tree built from a delimiter sequence.
//!
//! Elements only hold line ranges; text is sliced from the unit's lines on
//! demand by the extractor.

use smol_str::SmolStr;
use tracing::trace;

use crate::error::ParseError;
use crate::kind::{DelimiterKind, ElementKind};
use crate::lexer::Delimiter;
use crate::segment::LineSegment;

/// A parsed element with the lines it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name, if the opening keyword carries one.
    pub name: Option<SmolStr>,
    /// Opening keyword that created the element.
    pub kind: ElementKind,
    /// Leading trivia and the header, extended over merged variable sections.
    pub start_segment: LineSegment,
    /// Nested elements in source order.
    pub sub_elements: Vec<Element>,
    /// Lines after the last child (or the header) through the closing keyword.
    pub body_segment: LineSegment,
}

impl Element {
    /// Lines covered by the whole element.
    #[must_use]
    pub fn span(&self) -> LineSegment {
        LineSegment::new(self.start_segment.start_line, self.body_segment.end_line)
    }
}

/// Matches opening and closing delimiters into a tree.
pub struct TreeBuilder<'a> {
    delimiters: &'a [Delimiter],
}

impl<'a> TreeBuilder<'a> {
    /// Creates a builder over an immutable delimiter slice.
    #[must_use]
    pub fn new(delimiters: &'a [Delimiter]) -> Self {
        Self { delimiters }
    }

    /// Builds the element opened at `index`.
    ///
    /// Returns the element and the index just past its closing delimiter.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `index` holds a closing delimiter or the
    /// nesting below it is unbalanced.
    pub fn element(&self, index: usize) -> Result<(Element, usize), ParseError> {
        let Some(open) = self.delimiters.get(index) else {
            return Err(ParseError::NoElements);
        };
        let kind = match open.kind {
            DelimiterKind::Open(kind) => kind,
            DelimiterKind::Close(found) => {
                return Err(ParseError::UnexpectedClosing {
                    found,
                    line: open.segment.end_line,
                })
            }
        };
        let expected = kind.closing();

        let mut sub_elements = Vec::new();
        let mut cursor = index + 1;
        let close = loop {
            let Some(next) = self.delimiters.get(cursor) else {
                return Err(ParseError::Unbalanced {
                    kind,
                    name: open.name.clone(),
                    expected,
                    line: open.segment.end_line,
                });
            };
            match next.kind {
                DelimiterKind::Close(found) if found == expected => break next,
                DelimiterKind::Close(found) => {
                    return Err(ParseError::MismatchedClosing {
                        found,
                        expected,
                        line: next.segment.end_line,
                    })
                }
                DelimiterKind::Open(_) => {
                    let (child, after) = self.element(cursor)?;
                    sub_elements.push(child);
                    cursor = after;
                }
            }
        };

        let body_start = sub_elements
            .last()
            .map_or(open.segment.end_line, |child: &Element| {
                child.body_segment.end_line
            })
            + 1;
        let element = Element {
            name: open.name.clone(),
            kind,
            start_segment: open.segment,
            sub_elements,
            body_segment: LineSegment::new(body_start, close.segment.end_line),
        };
        trace!(
            kind = %element.kind,
            name = element.name.as_deref().unwrap_or_default(),
            start = %element.start_segment,
            body = %element.body_segment,
            "built element"
        );
        Ok((element, cursor + 1))
    }
}

/// Builds the tree rooted at the first delimiter.
///
/// Returns `Ok(None)` for an empty sequence.
///
/// # Errors
///
/// Returns a [`ParseError`] if the nesting is unbalanced or delimiters
/// follow the root's closing keyword.
pub fn build_tree(delimiters: &[Delimiter]) -> Result<Option<Element>, ParseError> {
    if delimiters.is_empty() {
        return Ok(None);
    }
    let (root, next) = TreeBuilder::new(delimiters).element(0)?;
    if let Some(extra) = delimiters.get(next) {
        return Err(ParseError::TrailingElement {
            found: extra.kind,
            line: extra.segment.end_line,
        });
    }
    Ok(Some(root))
}
