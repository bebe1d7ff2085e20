//! Declaration and implementation text of parsed elements.
//!
//! Text of an element nested `d` levels deep is deindented by `4*d` spaces
//! (declaration) and `4*(d+1)` spaces (implementation) so every extracted
//! part reads as a depth-0 unit. Whitespace-only lines are kept verbatim.
//! Lines carrying less indentation than their depth calls for record the
//! missing columns so they serialize back to their original column.

use tracing::trace;

use crate::model::{ElementNode, Layout, TextDocument};
use crate::tree::Element;

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 4;

/// The literal parts of one element, borrowed from the unit's lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments<'src> {
    /// Declaration lines, deindented.
    pub declaration: Vec<&'src str>,
    /// Implementation lines without separator and closing line, deindented.
    pub implementation: Vec<&'src str>,
    /// Whitespace-only line dropped from the head of the implementation.
    pub separator: Option<&'src str>,
    /// Closing-keyword line, deindented to the element's own level.
    pub closing: Option<&'src str>,
    /// Missing indentation per declaration line.
    pub declaration_shortfall: Vec<usize>,
    /// Missing indentation per implementation line.
    pub implementation_shortfall: Vec<usize>,
    /// Missing indentation of the closing line.
    pub closing_shortfall: usize,
}

impl Segments<'_> {
    /// Declaration text.
    #[must_use]
    pub fn declaration_text(&self) -> String {
        self.declaration.concat()
    }

    /// Implementation text.
    #[must_use]
    pub fn implementation_text(&self) -> String {
        self.implementation.concat()
    }

    /// Declaration as a document that remembers its source indentation.
    #[must_use]
    pub fn declaration_document(&self) -> TextDocument {
        TextDocument::with_shortfall(self.declaration_text(), self.declaration_shortfall.clone())
    }

    /// Implementation as a document that remembers its source indentation.
    #[must_use]
    pub fn implementation_document(&self) -> TextDocument {
        TextDocument::with_shortfall(
            self.implementation_text(),
            self.implementation_shortfall.clone(),
        )
    }

    /// Closing line as a document that remembers its source indentation.
    #[must_use]
    pub fn closing_document(&self) -> Option<TextDocument> {
        self.closing
            .map(|closing| TextDocument::with_shortfall(closing, vec![self.closing_shortfall]))
    }
}

/// Slices element parts out of a unit's lines.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a, 'src> {
    lines: &'a [&'src str],
}

impl<'a, 'src> Extractor<'a, 'src> {
    /// Creates an extractor over lines that keep their terminators.
    #[must_use]
    pub fn new(lines: &'a [&'src str]) -> Self {
        Self { lines }
    }

    /// Returns the parts of `element`, nested `depth` levels deep.
    #[must_use]
    pub fn segments(&self, element: &Element, depth: usize) -> Segments<'src> {
        let own = INDENT_WIDTH * depth;
        let inner = own + INDENT_WIDTH;

        if element.kind.is_declaration_only() && element.sub_elements.is_empty() {
            let span = element.span().lines(self.lines);
            return Segments {
                declaration: dedent_all(span, own),
                declaration_shortfall: shortfall_all(span, own),
                ..Segments::default()
            };
        }

        let mut body = element.body_segment.lines(self.lines);
        let mut separator = None;
        let mut closing = None;
        let mut closing_shortfall = 0;
        if element.kind.has_footer() {
            if let Some((first, rest)) = body.split_first() {
                if is_blank(first) {
                    separator = Some(*first);
                    body = rest;
                }
            }
            if let Some((last, rest)) = body.split_last() {
                closing = Some(dedent(*last, own));
                closing_shortfall = shortfall(last, own);
                body = rest;
            }
        }

        let header = element.start_segment.lines(self.lines);
        Segments {
            declaration: dedent_all(header, own),
            implementation: dedent_all(body, inner),
            separator,
            closing,
            declaration_shortfall: shortfall_all(header, own),
            implementation_shortfall: shortfall_all(body, inner),
            closing_shortfall,
        }
    }

    /// Builds the model subtree for `element`, nested `depth` levels deep.
    #[must_use]
    pub fn node(&self, element: &Element, depth: usize) -> ElementNode {
        let segments = self.segments(element, depth);
        trace!(
            kind = %element.kind,
            depth,
            declaration = segments.declaration.len(),
            implementation = segments.implementation.len(),
            "extracted element"
        );
        let children = element
            .sub_elements
            .iter()
            .map(|child| self.node(child, depth + 1))
            .collect();
        ElementNode {
            kind: Some(element.kind),
            name: element.name.clone(),
            declaration: segments.declaration_document(),
            implementation: segments.implementation_document(),
            children,
            layout: Layout::Preserved {
                separator: segments.separator.map(str::to_owned),
                closing: segments.closing_document(),
            },
        }
    }

    /// Builds the model tree for a unit's root element.
    ///
    /// Lines after the root's closing keyword are kept with the root so the
    /// unit serializes back to the full text.
    #[must_use]
    pub fn unit(&self, root: &Element) -> ElementNode {
        let mut node = self.node(root, 0);
        let tail = self
            .lines
            .get(root.span().end_line as usize..)
            .unwrap_or_default()
            .concat();
        if tail.is_empty() {
            return node;
        }

        if root.kind.is_declaration_only() && root.sub_elements.is_empty() {
            let declaration = format!("{}{tail}", node.declaration.text());
            node.declaration.replace(declaration);
        } else if let Layout::Preserved { closing, .. } = &mut node.layout {
            // the root's closing line sits at column 0 and never falls short
            let text = closing.as_ref().map_or("", TextDocument::text);
            *closing = Some(TextDocument::from(format!("{text}{tail}")));
        }
        node
    }
}

/// Returns the parts of `element` nested `depth` levels deep in `lines`.
#[must_use]
pub fn extract<'src>(element: &Element, lines: &[&'src str], depth: usize) -> Segments<'src> {
    Extractor::new(lines).segments(element, depth)
}

/// Strips up to `width` leading spaces from a non-blank line.
#[must_use]
pub fn dedent(line: &str, width: usize) -> &str {
    if is_blank(line) {
        return line;
    }
    let strip = line.bytes().take(width).take_while(|&b| b == b' ').count();
    &line[strip..]
}

/// Columns of a `width`-wide indentation that a non-blank line lacks.
#[must_use]
pub fn shortfall(line: &str, width: usize) -> usize {
    width - (line.len() - dedent(line, width).len())
}

fn dedent_all<'src>(lines: &[&'src str], width: usize) -> Vec<&'src str> {
    lines.iter().map(|&line| dedent(line, width)).collect()
}

fn shortfall_all(lines: &[&str], width: usize) -> Vec<usize> {
    lines
        .iter()
        .map(|line| if is_blank(line) { 0 } else { shortfall(line, width) })
        .collect()
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scan;
    use crate::merge::merge_var_sections;
    use crate::tree::build_tree;

    const SOURCE: &str = "\
FUNCTION_BLOCK FB_Valve
VAR
    open : BOOL;
END_VAR

    METHOD Toggle
    VAR_INPUT
        force : BOOL;
    END_VAR

        open := NOT open OR force;
    END_METHOD

    open := FALSE;
END_FUNCTION_BLOCK
";

    fn root() -> Element {
        merge_var_sections(build_tree(&scan(SOURCE)).unwrap().unwrap())
    }

    #[test]
    fn nested_method_is_deindented() {
        let lines: Vec<_> = SOURCE.split_inclusive('\n').collect();
        let segments = extract(&root().sub_elements[0], &lines, 1);
        assert_eq!(
            segments.declaration_text(),
            "\nMETHOD Toggle\nVAR_INPUT\n    force : BOOL;\nEND_VAR\n"
        );
        assert_eq!(segments.separator, Some("\n"));
        assert_eq!(segments.implementation_text(), "open := NOT open OR force;\n");
        assert_eq!(segments.closing, Some("END_METHOD\n"));
    }

    #[test]
    fn root_body_keeps_trailing_statements() {
        let lines: Vec<_> = SOURCE.split_inclusive('\n').collect();
        let segments = extract(&root(), &lines, 0);
        assert_eq!(
            segments.declaration_text(),
            "FUNCTION_BLOCK FB_Valve\nVAR\n    open : BOOL;\nEND_VAR\n"
        );
        assert_eq!(segments.separator, Some("\n"));
        assert_eq!(segments.implementation_text(), "open := FALSE;\n");
        assert_eq!(segments.closing, Some("END_FUNCTION_BLOCK\n"));
    }

    #[test]
    fn type_is_declaration_only() {
        let source = "TYPE E_Mode :\n(\n    Auto,\n    Manual\n);\nEND_TYPE\n\n";
        let lines: Vec<_> = source.split_inclusive('\n').collect();
        let root = build_tree(&scan(source)).unwrap().unwrap();
        let node = Extractor::new(&lines).unit(&root);
        assert_eq!(node.declaration.text(), source);
        assert!(node.implementation.is_empty());
    }

    #[test]
    fn dedent_strips_at_most_width_spaces() {
        assert_eq!(dedent("        x;\n", 4), "    x;\n");
        assert_eq!(dedent("  x;\n", 4), "x;\n");
        assert_eq!(dedent("\tx;\n", 4), "\tx;\n");
        assert_eq!(dedent("      \n", 4), "      \n");
    }

    #[test]
    fn shortfall_counts_missing_columns() {
        assert_eq!(shortfall("        x;\n", 4), 0);
        assert_eq!(shortfall("  x;\n", 4), 2);
        assert_eq!(shortfall("\tx;\n", 8), 8);
    }

    #[test]
    fn column_zero_body_records_its_shortfall() {
        let source = "PROGRAM Main\nx := 1;\n    y := 2;\nEND_PROGRAM\n";
        let lines: Vec<_> = source.split_inclusive('\n').collect();
        let root = build_tree(&scan(source)).unwrap().unwrap();
        let segments = extract(&root, &lines, 0);
        assert_eq!(segments.implementation_text(), "x := 1;\ny := 2;\n");
        assert_eq!(segments.implementation_shortfall, vec![4, 0]);
        assert_eq!(
            segments.implementation_document().shortfall(),
            &[4, 0]
        );
    }
}
