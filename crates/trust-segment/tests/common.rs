//! Shared helpers for segmentation tests.
#![allow(dead_code, unused_imports)]

use std::fmt::Write;

pub use trust_segment::{
    dumps, dumps_at, merge_var_sections, parse_element, scan, split, Element, ElementKind,
    ElementNode, LineSegment, SourceUnit,
};

/// Formats the delimiter sequence of `source`, one per line.
pub fn delimiters(source: &str) -> String {
    let mut out = String::new();
    for delimiter in scan(source) {
        let name = delimiter
            .name
            .as_ref()
            .map(|name| format!(" {name}"))
            .unwrap_or_default();
        writeln!(out, "{}{name} {}", delimiter.kind, delimiter.segment).unwrap();
    }
    out
}

/// Formats an element tree with its segments, children indented.
pub fn outline(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, 0, &mut out);
    out
}

fn write_element(element: &Element, depth: usize, out: &mut String) {
    let name = element
        .name
        .as_ref()
        .map(|name| format!(" {name}"))
        .unwrap_or_default();
    writeln!(
        out,
        "{}{}{name} start={} body={}",
        "  ".repeat(depth),
        element.kind,
        element.start_segment,
        element.body_segment
    )
    .unwrap();
    for child in &element.sub_elements {
        write_element(child, depth + 1, out);
    }
}

/// Parses and merges `source`, panicking on parse errors.
pub fn merged(source: &str) -> Element {
    SourceUnit::parse(source).unwrap().root().clone()
}

/// Asserts that `source` survives parse, extract and serialize unchanged.
pub fn assert_round_trip(source: &str) {
    let model = split(source).unwrap();
    assert_eq!(dumps(&model).unwrap(), source);
}

/// Asserts the nesting invariant on every element of the tree.
pub fn assert_nesting(element: &Element) {
    assert!(element.start_segment.start_line <= element.start_segment.end_line + 1);
    assert!(element.body_segment.start_line <= element.body_segment.end_line + 1);
    if let Some(last) = element.sub_elements.last() {
        assert_eq!(
            last.body_segment.end_line + 1,
            element.body_segment.start_line,
            "{} {:?}",
            element.kind,
            element.name
        );
    } else {
        assert_eq!(
            element.start_segment.end_line + 1,
            element.body_segment.start_line
        );
    }
    let mut next = element.start_segment.end_line + 1;
    for child in &element.sub_elements {
        assert_eq!(child.start_segment.start_line, next);
        next = child.body_segment.end_line + 1;
        assert_nesting(child);
    }
}
