//! Rebuilds unit text from an element tree.
//!
//! Parts are stored at a depth-0 baseline; the serializer indents every
//! non-blank line by four spaces per nesting level (one more level for
//! implementations) and concatenates declarations, children and
//! implementations in source order.
//!
//! Objects with [`Layout::Preserved`] re-emit the separator and closing
//! lines captured at extraction and give under-indented lines back the
//! columns they lacked, which makes `dumps(&unit.to_model())` reproduce the
//! original text exactly. Objects with [`Layout::Canonical`] get a blank
//! line after the declaration, blank lines between children, an
//! `ACTION`/`TRANSITION` header when they have no declaration, and a
//! generated `END_*` footer.

use smol_str::SmolStr;

use crate::error::SerializeError;
use crate::extract::{is_blank, INDENT_WIDTH};
use crate::kind::ElementKind;
use crate::lexer::detect_kind;
use crate::model::{Layout, SourceObject, TextDocument};

/// Serializes `object` as a top-level unit.
///
/// # Errors
///
/// Returns a [`SerializeError`] if a footer or header cannot be derived for
/// a canonically laid out object.
pub fn dumps<T: SourceObject>(object: &T) -> Result<String, SerializeError> {
    dumps_at(object, 0)
}

/// Serializes `object` nested `level` levels deep.
///
/// # Errors
///
/// See [`dumps`].
pub fn dumps_at<T: SourceObject>(object: &T, level: usize) -> Result<String, SerializeError> {
    let mut serializer = Serializer::with_capacity(estimate(object, level));
    serializer.object(object, level)?;
    Ok(serializer.finish())
}

/// Incremental writer over a single output buffer.
#[derive(Debug, Default)]
pub struct Serializer {
    out: String,
}

impl Serializer {
    /// Creates an empty serializer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a serializer with a pre-sized buffer.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
        }
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    /// Appends `object` and its subtree at `level`.
    ///
    /// # Errors
    ///
    /// See [`dumps`].
    pub fn object<T: SourceObject>(&mut self, object: &T, level: usize) -> Result<(), SerializeError> {
        match object.layout() {
            Layout::Canonical => self.canonical(object, level),
            Layout::Preserved { separator, closing } => {
                self.preserved(object, level, separator.as_deref(), closing.as_ref())
            }
        }
    }

    fn preserved<T: SourceObject>(
        &mut self,
        object: &T,
        level: usize,
        separator: Option<&str>,
        closing: Option<&TextDocument>,
    ) -> Result<(), SerializeError> {
        self.indented(
            object.declaration_text(),
            level,
            object.declaration_shortfall(),
        );
        for child in object.children() {
            self.object(child, level + 1)?;
        }
        if let Some(separator) = separator {
            self.indented(separator, 0, &[]);
        }
        self.indented(
            object.implementation_text(),
            level + 1,
            object.implementation_shortfall(),
        );
        if let Some(closing) = closing {
            self.indented(closing.text(), level, closing.shortfall());
        }
        Ok(())
    }

    fn canonical<T: SourceObject>(&mut self, object: &T, level: usize) -> Result<(), SerializeError> {
        let declaration = object.declaration_text();
        if object.has_declaration() {
            self.indented(declaration, level, &[]);
            self.begin_line();
        }

        let children = object.children();
        let has_implementation = object.has_implementation();
        if object.has_declaration() && (has_implementation || !children.is_empty()) {
            self.blank_line();
        }
        for (index, child) in children.iter().enumerate() {
            if index > 0 {
                self.blank_line();
            }
            self.object(child, level + 1)?;
        }

        if !has_implementation {
            return Ok(());
        }
        let kind = object.kind();
        if !object.has_declaration() {
            if let Some(kind @ (ElementKind::Action | ElementKind::Transition)) = kind {
                let name = object.name().ok_or(SerializeError::MissingName { kind })?;
                self.line(level, &format!("{kind} {name}"));
            }
        }
        self.indented(object.implementation_text(), level + 1, &[]);

        let ending = if object.has_declaration() {
            detect_kind(declaration).or(kind)
        } else {
            kind
        };
        let ending = ending.ok_or_else(|| SerializeError::MissingClosingKeyword {
            name: object.name().map(SmolStr::new),
        })?;
        self.line(level, ending.closing().keyword());
        Ok(())
    }

    /// Appends `text`, indenting its non-blank lines by `level` levels less
    /// the columns `shortfall` records for each line.
    fn indented(&mut self, text: &str, level: usize, shortfall: &[usize]) {
        if text.is_empty() {
            return;
        }
        self.begin_line();
        for (index, line) in text.split_inclusive('\n').enumerate() {
            if !is_blank(line) {
                let missing = shortfall.get(index).copied().unwrap_or_default();
                self.pad((INDENT_WIDTH * level).saturating_sub(missing));
            }
            self.out.push_str(line);
        }
    }

    fn line(&mut self, level: usize, text: &str) {
        self.begin_line();
        self.indent(level);
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank_line(&mut self) {
        self.begin_line();
        self.out.push('\n');
    }

    /// Terminates a partial last line before more text is appended.
    fn begin_line(&mut self) {
        if !self.out.is_empty() && !self.out.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn indent(&mut self, level: usize) {
        self.pad(INDENT_WIDTH * level);
    }

    fn pad(&mut self, columns: usize) {
        self.out.extend(std::iter::repeat(' ').take(columns));
    }
}

fn estimate<T: SourceObject>(object: &T, level: usize) -> usize {
    let mut parts = vec![object.declaration_text(), object.implementation_text()];
    if let Layout::Preserved { separator, closing } = object.layout() {
        parts.extend(separator.as_deref());
        parts.extend(closing.as_ref().map(TextDocument::text));
    }
    let bytes: usize = parts.iter().map(|part| part.len()).sum();
    let lines: usize = parts.iter().map(|part| part.lines().count()).sum::<usize>() + 2;
    let own = bytes + lines * INDENT_WIDTH * (level + 1) + 2 * INDENT_WIDTH;
    own + object
        .children()
        .iter()
        .map(|child| estimate(child, level + 1))
        .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementNode;

    #[test]
    fn canonical_function_block_gets_footer_and_separators() {
        let node = ElementNode::new(
            Some(ElementKind::FunctionBlock),
            Some("FB_Lamp"),
            "FUNCTION_BLOCK FB_Lamp\nVAR\n    on : BOOL;\nEND_VAR",
            "on := NOT on;\n",
        )
        .with_child(ElementNode::new(
            Some(ElementKind::Method),
            Some("Off"),
            "METHOD Off\n",
            "on := FALSE;\n",
        ))
        .with_child(ElementNode::new(
            Some(ElementKind::Action),
            Some("Blink"),
            "",
            "on := TRUE;\n",
        ));

        assert_eq!(
            dumps(&node).unwrap(),
            "\
FUNCTION_BLOCK FB_Lamp
VAR
    on : BOOL;
END_VAR

    METHOD Off

        on := FALSE;
    END_METHOD

    ACTION Blink
        on := TRUE;
    END_ACTION
    on := NOT on;
END_FUNCTION_BLOCK
"
        );
    }

    #[test]
    fn footer_follows_declaration_over_recorded_kind() {
        let node = ElementNode::new(
            Some(ElementKind::Function),
            Some("F"),
            "PROGRAM P\n",
            "x := 1;\n",
        );
        assert!(dumps(&node).unwrap().ends_with("END_PROGRAM\n"));
    }

    #[test]
    fn missing_closing_keyword_is_an_error() {
        let node = ElementNode::new(None, Some("Orphan"), "", "x := 1;\n");
        assert_eq!(
            dumps(&node),
            Err(SerializeError::MissingClosingKeyword {
                name: Some(SmolStr::new("Orphan"))
            })
        );
    }

    #[test]
    fn nameless_action_without_declaration_is_an_error() {
        let node = ElementNode::new(Some(ElementKind::Transition), None, "", "TRUE\n");
        assert_eq!(
            dumps(&node),
            Err(SerializeError::MissingName {
                kind: ElementKind::Transition
            })
        );
    }

    #[test]
    fn declaration_only_node_has_no_footer() {
        let node = ElementNode::new(
            Some(ElementKind::VarGlobal),
            None,
            "VAR_GLOBAL\n    g : INT;\nEND_VAR\n",
            "",
        );
        assert_eq!(dumps_at(&node, 1).unwrap(), "    VAR_GLOBAL\n        g : INT;\n    END_VAR\n");
    }

    #[test]
    fn preserved_lines_return_to_their_source_column() {
        let node = ElementNode {
            layout: Layout::Preserved {
                separator: None,
                closing: Some(TextDocument::with_shortfall("\tEND_METHOD\n", vec![4])),
            },
            ..ElementNode::new(
                Some(ElementKind::Method),
                Some("M"),
                TextDocument::with_shortfall("\tMETHOD M\n", vec![4]),
                TextDocument::with_shortfall("\t\tx := 1;\ny := 2;\n", vec![8, 6]),
            )
        };
        assert_eq!(
            dumps_at(&node, 1).unwrap(),
            "\tMETHOD M\n\t\tx := 1;\n  y := 2;\n\tEND_METHOD\n"
        );
        assert_eq!(
            dumps(&node).unwrap(),
            "\tMETHOD M\n\t\tx := 1;\ny := 2;\n\tEND_METHOD\n"
        );
    }

    #[test]
    fn canonical_layout_ignores_recorded_shortfall() {
        let node = ElementNode::new(
            Some(ElementKind::Program),
            Some("Main"),
            "PROGRAM Main\n",
            TextDocument::with_shortfall("x := 1;\n", vec![4]),
        );
        assert_eq!(
            dumps(&node).unwrap(),
            "PROGRAM Main\n\n    x := 1;\nEND_PROGRAM\n"
        );
    }
}
