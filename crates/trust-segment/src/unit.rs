//! One-call entry points over a single source unit.

use tracing::debug;

use crate::error::ParseError;
use crate::extract::Extractor;
use crate::kind::ElementKind;
use crate::lexer::{scan, Delimiter};
use crate::merge::merge_var_sections;
use crate::model::ElementNode;
use crate::tree::{build_tree, Element};

/// A scanned, built and merged source unit.
///
/// Keeps the unit's lines so parts of any element can be sliced on demand.
#[derive(Debug, Clone)]
pub struct SourceUnit<'src> {
    source: &'src str,
    lines: Vec<&'src str>,
    delimiters: Vec<Delimiter>,
    root: Element,
}

impl<'src> SourceUnit<'src> {
    /// Parses one unit.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::NoElements`] for text without any element, or
    /// the tree builder's error for unbalanced nesting.
    pub fn parse(source: &'src str) -> Result<Self, ParseError> {
        let delimiters = scan(source);
        let root = build_tree(&delimiters)?.ok_or(ParseError::NoElements)?;
        let root = merge_var_sections(root);
        let lines: Vec<_> = source.split_inclusive('\n').collect();
        debug!(
            kind = %root.kind,
            name = root.name.as_deref().unwrap_or_default(),
            delimiters = delimiters.len(),
            lines = lines.len(),
            "parsed unit"
        );
        Ok(Self {
            source,
            lines,
            delimiters,
            root,
        })
    }

    /// Parses one unit from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Encoding`] if `bytes` is not UTF-8, otherwise
    /// as [`SourceUnit::parse`].
    pub fn from_bytes(bytes: &'src [u8]) -> Result<Self, ParseError> {
        Self::parse(std::str::from_utf8(bytes)?)
    }

    /// Parses one unit whose root must be of kind `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedRoot`] on a kind mismatch, otherwise
    /// as [`SourceUnit::parse`].
    pub fn parse_expecting(source: &'src str, expected: ElementKind) -> Result<Self, ParseError> {
        let unit = Self::parse(source)?;
        if unit.root.kind != expected {
            return Err(ParseError::UnexpectedRoot {
                expected,
                found: unit.root.kind,
            });
        }
        Ok(unit)
    }

    /// The unit's text.
    #[must_use]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The unit's lines, each with its terminator.
    #[must_use]
    pub fn lines(&self) -> &[&'src str] {
        &self.lines
    }

    /// The scanned delimiters.
    #[must_use]
    pub fn delimiters(&self) -> &[Delimiter] {
        &self.delimiters
    }

    /// The merged root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// An extractor over this unit's lines.
    #[must_use]
    pub fn extractor(&self) -> Extractor<'_, 'src> {
        Extractor::new(&self.lines)
    }

    /// Extracts the whole element model.
    #[must_use]
    pub fn to_model(&self) -> ElementNode {
        self.extractor().unit(&self.root)
    }
}

/// Parses `source` and extracts its element model.
///
/// # Errors
///
/// See [`SourceUnit::parse`].
pub fn split(source: &str) -> Result<ElementNode, ParseError> {
    Ok(SourceUnit::parse(source)?.to_model())
}

/// Parses `source` into its raw element tree without merging variable
/// sections.
///
/// # Errors
///
/// See [`build_tree`].
pub fn parse_element(source: &str) -> Result<Option<Element>, ParseError> {
    build_tree(&scan(source))
}
