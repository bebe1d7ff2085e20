//! Reading and splitting source files.

use anyhow::Context;
use std::path::Path;
use trust_segment::{ElementNode, SourceUnit};

pub fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn model(path: &Path, text: &str) -> anyhow::Result<ElementNode> {
    let unit =
        SourceUnit::parse(text).with_context(|| format!("failed to split {}", path.display()))?;
    Ok(unit.to_model())
}
