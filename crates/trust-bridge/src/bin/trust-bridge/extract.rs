//! `extract` command: print one element's text.

use std::path::Path;

use anyhow::anyhow;
use trust_segment::dumps;

use crate::cli::Part;
use crate::source;

pub fn run_extract(path: &Path, element: &str, part: Part) -> anyhow::Result<()> {
    let text = source::read(path)?;
    let model = source::model(path, &text)?;
    let node = model
        .find(element)
        .ok_or_else(|| anyhow!("element '{element}' not found in {}", path.display()))?;
    let output = match part {
        Part::Declaration => node.declaration.text().to_string(),
        Part::Implementation => node.implementation.text().to_string(),
        Part::Full => dumps(node)?,
    };
    print!("{output}");
    Ok(())
}
