//! Folding of variable sections into their parent's declaration.

use crate::tree::Element;

/// Folds the variable sections that directly follow an element's header
/// into its `start_segment`, recursively.
///
/// Only the leading run of variable-section children is folded; a section
/// that follows a method or action stays a child so the declaration range
/// never overlaps another child. Applying the merge twice is the same as
/// applying it once.
#[must_use]
pub fn merge_var_sections(element: Element) -> Element {
    let Element {
        name,
        kind,
        start_segment,
        sub_elements,
        body_segment,
    } = element;

    let folded = sub_elements
        .iter()
        .take_while(|child| child.kind.is_var_section())
        .count();
    let start_segment = sub_elements[..folded]
        .iter()
        .map(|section| section.body_segment.end_line)
        .max()
        .map_or(start_segment, |end| start_segment.with_end(end));
    let sub_elements = sub_elements
        .into_iter()
        .skip(folded)
        .map(merge_var_sections)
        .collect();

    Element {
        name,
        kind,
        start_segment,
        sub_elements,
        body_segment,
    }
}
