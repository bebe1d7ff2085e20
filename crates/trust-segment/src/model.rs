//! Element model shared by the export and import directions.
//!
//! [`ElementNode`] is what extraction produces and what the serializer
//! consumes. Host-side adapters that wrap live project objects implement
//! the same capability traits and serialize through the same code path.

use std::fmt;

use smol_str::SmolStr;

use crate::kind::{ElementKind, ObjectKind};

/// A replaceable text buffer.
///
/// Text extracted from an under-indented source line remembers how many
/// columns of its expected indentation were missing, so it reindents to the
/// original column. Replacing the text drops that record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextDocument {
    text: String,
    shortfall: Vec<usize>,
}

impl TextDocument {
    /// Creates a document holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shortfall: Vec::new(),
        }
    }

    /// Creates a document whose lines lacked `shortfall[i]` columns of
    /// indentation in the source.
    #[must_use]
    pub fn with_shortfall(text: impl Into<String>, shortfall: Vec<usize>) -> Self {
        let shortfall = if shortfall.iter().all(|&missing| missing == 0) {
            Vec::new()
        } else {
            shortfall
        };
        Self {
            text: text.into(),
            shortfall,
        }
    }

    /// Returns the current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Missing indentation per line; empty when every line was fully
    /// indented or the text was replaced.
    #[must_use]
    pub fn shortfall(&self) -> &[usize] {
        &self.shortfall
    }

    /// Replaces the whole text.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.shortfall.clear();
    }

    /// Returns `true` if the document holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for TextDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// How the serializer lays out the text around an element's parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Separator lines, action headers and the `END_*` footer are generated.
    #[default]
    Canonical,
    /// Trivia captured from source is emitted verbatim.
    Preserved {
        /// Whitespace-only line between the children and the implementation.
        separator: Option<String>,
        /// Closing-keyword line, deindented to the element's level, plus any
        /// lines that trailed the root element.
        closing: Option<TextDocument>,
    },
}

pub(crate) static CANONICAL_LAYOUT: Layout = Layout::Canonical;

/// Objects that may carry declaration text.
pub trait HasDeclaration {
    /// Declaration text at a depth-0 baseline.
    fn declaration_text(&self) -> &str;

    /// Columns of indentation each declaration line lacked in its source.
    fn declaration_shortfall(&self) -> &[usize] {
        &[]
    }

    /// Returns `true` if the object has a declaration.
    fn has_declaration(&self) -> bool {
        !self.declaration_text().is_empty()
    }
}

/// Objects that may carry implementation text.
pub trait HasImplementation {
    /// Implementation text at a depth-0 baseline.
    fn implementation_text(&self) -> &str;

    /// Columns of indentation each implementation line lacked in its source.
    fn implementation_shortfall(&self) -> &[usize] {
        &[]
    }

    /// Returns `true` if the object has an implementation part, even an
    /// empty one.
    fn has_implementation(&self) -> bool {
        !self.implementation_text().is_empty()
    }
}

/// Objects with ordered children.
pub trait HasChildren {
    /// Child object type.
    type Child: SourceObject;

    /// Children in source order.
    fn children(&self) -> &[Self::Child];
}

/// An object the serializer can render.
pub trait SourceObject: HasDeclaration + HasImplementation + HasChildren {
    /// Object name, if any.
    fn name(&self) -> Option<&str>;

    /// Recorded element kind, if known.
    fn kind(&self) -> Option<ElementKind>;

    /// Layout to render with.
    fn layout(&self) -> &Layout {
        &CANONICAL_LAYOUT
    }
}

/// One node of the element model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Element kind, `None` for objects of unknown kind.
    pub kind: Option<ElementKind>,
    /// Element name.
    pub name: Option<SmolStr>,
    /// Declaration text at a depth-0 baseline.
    pub declaration: TextDocument,
    /// Implementation text at a depth-0 baseline.
    pub implementation: TextDocument,
    /// Nested elements in source order.
    pub children: Vec<ElementNode>,
    /// Serialization layout.
    pub layout: Layout,
}

impl ElementNode {
    /// Creates a node with canonical layout.
    #[must_use]
    pub fn new(
        kind: Option<ElementKind>,
        name: Option<&str>,
        declaration: impl Into<TextDocument>,
        implementation: impl Into<TextDocument>,
    ) -> Self {
        Self {
            kind,
            name: name.map(SmolStr::new),
            declaration: declaration.into(),
            implementation: implementation.into(),
            children: Vec::new(),
            layout: Layout::Canonical,
        }
    }

    /// Appends a child and returns `self`.
    #[must_use]
    pub fn with_child(mut self, child: ElementNode) -> Self {
        self.children.push(child);
        self
    }

    /// Host artifact kind of this node.
    #[must_use]
    pub fn object_kind(&self) -> Option<ObjectKind> {
        self.kind.and_then(ElementKind::object_kind)
    }

    /// Finds a descendant by dotted path of names, ignoring case.
    ///
    /// The empty path addresses `self`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&ElementNode> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, name| {
            node.children.iter().find(|child| child.is_named(name))
        })
    }

    /// Mutable variant of [`ElementNode::find`].
    pub fn find_mut(&mut self, path: &str) -> Option<&mut ElementNode> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.').try_fold(self, |node, name| {
            node.children.iter_mut().find(|child| child.is_named(name))
        })
    }

    fn is_named(&self, name: &str) -> bool {
        self.name
            .as_ref()
            .is_some_and(|own| own.eq_ignore_ascii_case(name))
    }

    /// Iterates over the node and its descendants depth-first, with depths.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self)],
        }
    }
}

impl HasDeclaration for ElementNode {
    fn declaration_text(&self) -> &str {
        self.declaration.text()
    }

    fn declaration_shortfall(&self) -> &[usize] {
        self.declaration.shortfall()
    }
}

impl HasImplementation for ElementNode {
    fn implementation_text(&self) -> &str {
        self.implementation.text()
    }

    fn implementation_shortfall(&self) -> &[usize] {
        self.implementation.shortfall()
    }

    fn has_implementation(&self) -> bool {
        self.kind.is_some_and(ElementKind::has_footer) || !self.implementation.is_empty()
    }
}

impl HasChildren for ElementNode {
    type Child = ElementNode;

    fn children(&self) -> &[ElementNode] {
        &self.children
    }
}

impl SourceObject for ElementNode {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<ElementKind> {
        self.kind
    }

    fn layout(&self) -> &Layout {
        &self.layout
    }
}

/// Depth-first pre-order iterator returned by [`ElementNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a ElementNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ElementNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
