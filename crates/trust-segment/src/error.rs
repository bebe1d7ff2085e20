//! Error types for parsing and serialization.

use smol_str::SmolStr;
use thiserror::Error;

use crate::kind::{DelimiterKind, ElementKind, EndKind};

/// Errors that abort the parse of a unit. No partial tree is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// An opening keyword has no matching closing keyword.
    #[error("no matching {expected} found for {kind}{} opened on line {line}", named(.name.as_ref()))]
    Unbalanced {
        /// Kind of the unclosed element.
        kind: ElementKind,
        /// Name of the unclosed element.
        name: Option<SmolStr>,
        /// Closing keyword that was required.
        expected: EndKind,
        /// Line of the opening keyword.
        line: u32,
    },

    /// A closing keyword of the wrong kind appeared inside an element.
    #[error("unexpected {found} on line {line}, expected {expected}")]
    MismatchedClosing {
        /// Closing keyword found.
        found: EndKind,
        /// Closing keyword required by the innermost open element.
        expected: EndKind,
        /// Line of the closing keyword.
        line: u32,
    },

    /// The unit starts with a closing keyword.
    #[error("unit starts with {found} on line {line}")]
    UnexpectedClosing {
        /// Closing keyword found.
        found: EndKind,
        /// Line of the closing keyword.
        line: u32,
    },

    /// Delimiters follow the closing keyword of the root element.
    #[error("unexpected {found} on line {line} after the end of the unit")]
    TrailingElement {
        /// Delimiter found after the root.
        found: DelimiterKind,
        /// Line of the delimiter.
        line: u32,
    },

    /// The text holds no element.
    #[error("no element found")]
    NoElements,

    /// The root element is not of the requested kind.
    #[error("expected {expected}, found {found}")]
    UnexpectedRoot {
        /// Requested root kind.
        expected: ElementKind,
        /// Root kind found.
        found: ElementKind,
    },

    /// The unit is not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Errors raised while rebuilding text from an element tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializeError {
    /// Neither the declaration nor the recorded kind yields a closing keyword.
    #[error("cannot derive a closing keyword for element{}", named(.name.as_ref()))]
    MissingClosingKeyword {
        /// Name of the offending element.
        name: Option<SmolStr>,
    },

    /// A synthesized header needs a name the element does not have.
    #[error("{kind} without declaration needs a name")]
    MissingName {
        /// Kind of the offending element.
        kind: ElementKind,
    },
}

fn named(name: Option<&SmolStr>) -> String {
    name.map(|name| format!(" '{name}'")).unwrap_or_default()
}
