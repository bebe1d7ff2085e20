//! `tree` command: outline of a unit's elements.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use serde_json::{json, Value};
use trust_segment::{Element, ElementNode, SourceUnit};

use crate::source;
use crate::style;

pub fn run_tree(path: &Path, as_json: bool) -> anyhow::Result<()> {
    let text = source::read(path)?;
    let unit =
        SourceUnit::parse(&text).with_context(|| format!("failed to split {}", path.display()))?;
    if as_json {
        let rendered = serde_json::to_string_pretty(&node_json(&unit.to_model()))?;
        println!("{rendered}");
    } else {
        print!("{}", outline(unit.root()));
    }
    Ok(())
}

fn outline(root: &Element) -> String {
    let mut output = String::new();
    write_element(&mut output, root, 0);
    output
}

fn write_element(output: &mut String, element: &Element, depth: usize) {
    let name = element
        .name
        .as_deref()
        .map(|name| format!(" {}", style::accent(name)))
        .unwrap_or_default();
    let object = element
        .kind
        .object_kind()
        .map(|object| format!(" [{object}]"))
        .unwrap_or_default();
    let _ = writeln!(
        output,
        "{:indent$}{}{name}{object} {}",
        "",
        element.kind,
        element.span(),
        indent = depth * 2
    );
    for child in &element.sub_elements {
        write_element(output, child, depth + 1);
    }
}

fn node_json(node: &ElementNode) -> Value {
    json!({
        "type": node.kind.map(|kind| kind.keyword()),
        "name": node.name.as_deref(),
        "object": node.object_kind().map(|object| object.suffix()),
        "leaf": node.object_kind().map(|object| object.is_leaf()),
        "declaration": node.declaration.text(),
        "implementation": node.implementation.text(),
        "children": node.children.iter().map(node_json).collect::<Vec<_>>(),
    })
}
