//! `replace` command: swap one element's text and rebuild the unit.

use std::path::Path;

use anyhow::{anyhow, bail, Context};
use tracing::info;
use trust_segment::dumps;

use crate::source;
use crate::style;

pub fn run_replace(
    path: &Path,
    element: &str,
    declaration: Option<&Path>,
    implementation: Option<&Path>,
    write: bool,
) -> anyhow::Result<()> {
    if declaration.is_none() && implementation.is_none() {
        bail!("nothing to replace: pass --declaration and/or --implementation");
    }
    let text = source::read(path)?;
    let mut model = source::model(path, &text)?;
    let node = model
        .find_mut(element)
        .ok_or_else(|| anyhow!("element '{element}' not found in {}", path.display()))?;
    if let Some(file) = declaration {
        node.declaration.replace(source::read(file)?);
    }
    if let Some(file) = implementation {
        node.implementation.replace(source::read(file)?);
    }

    let rebuilt = dumps(&model)?;
    if !write {
        print!("{rebuilt}");
        return Ok(());
    }
    std::fs::write(path, &rebuilt)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), element, "replaced element text");
    println!(
        "{} {} in {}",
        style::success("Updated"),
        style::accent(element),
        path.display()
    );
    Ok(())
}
