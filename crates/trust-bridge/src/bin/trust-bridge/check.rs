//! `check` command: split and rebuild every unit, report any drift.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use crossbeam_channel::unbounded;
use tracing::debug;
use trust_segment::{dumps, ParseError, SourceUnit};

use crate::config::CheckConfig;
use crate::style;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Identical,
    /// First 1-based line where the rebuilt text differs.
    Mismatch(usize),
    /// No elements in the file.
    Skipped,
    Failed(String),
}

impl Outcome {
    fn is_failure(&self) -> bool {
        matches!(self, Self::Mismatch(_) | Self::Failed(_))
    }
}

pub fn run_check(
    root: &Path,
    paths: &[PathBuf],
    jobs: Option<usize>,
    config: &CheckConfig,
) -> anyhow::Result<()> {
    let files = discover(root, paths, config)?;
    if files.is_empty() {
        println!("{}", style::warning("No Structured Text files found"));
        return Ok(());
    }
    let workers = jobs
        .or(config.jobs)
        .filter(|&jobs| jobs > 0)
        .unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, NonZeroUsize::get)
        })
        .min(files.len());
    debug!(files = files.len(), workers, "checking round trips");

    let outcomes = check_all(&files, workers);
    let mut output = String::new();
    let (mut passed, mut failed, mut skipped) = (0usize, 0usize, 0usize);
    for (path, outcome) in files.iter().zip(&outcomes) {
        let display = path.strip_prefix(root).unwrap_or(path).display();
        match outcome {
            Outcome::Identical => {
                passed += 1;
                let _ = writeln!(output, "{} {display}", style::success("PASS"));
            }
            Outcome::Mismatch(line) => {
                failed += 1;
                let _ = writeln!(
                    output,
                    "{} {display}: rebuilt text differs at line {line}",
                    style::error("FAIL")
                );
            }
            Outcome::Skipped => {
                skipped += 1;
                let _ = writeln!(output, "{} {display}: no elements", style::warning("SKIP"));
            }
            Outcome::Failed(message) => {
                failed += 1;
                let _ = writeln!(output, "{} {display}: {message}", style::error("FAIL"));
            }
        }
    }
    let _ = writeln!(
        output,
        "{}",
        style::accent(format!(
            "{passed} passed, {failed} failed, {skipped} skipped"
        ))
    );
    print!("{output}");

    if outcomes.iter().any(Outcome::is_failure) {
        bail!("{failed} unit(s) failed the round-trip check");
    }
    Ok(())
}

fn discover(root: &Path, paths: &[PathBuf], config: &CheckConfig) -> anyhow::Result<Vec<PathBuf>> {
    let exclude = config
        .exclude
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern)
                .with_context(|| format!("invalid exclude pattern '{pattern}'"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let default_root = [root.to_path_buf()];
    let inputs = if paths.is_empty() { &default_root[..] } else { paths };
    let mut files = BTreeSet::new();
    for input in inputs {
        if input.is_file() {
            files.insert(input.clone());
            continue;
        }
        if !input.is_dir() {
            bail!("no such file or directory: {}", input.display());
        }
        for pattern in &config.patterns {
            for entry in glob::glob(&format!("{}/{}", input.display(), pattern))
                .with_context(|| format!("invalid glob pattern '{pattern}'"))?
            {
                let path = entry?;
                let relative = path.strip_prefix(input).unwrap_or(&path);
                if exclude.iter().any(|pattern| pattern.matches_path(relative)) {
                    continue;
                }
                files.insert(path);
            }
        }
    }
    Ok(files.into_iter().collect())
}

fn check_all(files: &[PathBuf], workers: usize) -> Vec<Outcome> {
    let (job_tx, job_rx) = unbounded::<usize>();
    let (result_tx, result_rx) = unbounded::<(usize, Outcome)>();
    for index in 0..files.len() {
        let _ = job_tx.send(index);
    }
    drop(job_tx);

    std::thread::scope(|scope| {
        for _ in 0..workers.max(1) {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                for index in job_rx {
                    let _ = result_tx.send((index, check_file(&files[index])));
                }
            });
        }
    });
    drop(result_tx);

    let mut outcomes = vec![Outcome::Skipped; files.len()];
    for (index, outcome) in result_rx {
        outcomes[index] = outcome;
    }
    outcomes
}

fn check_file(path: &Path) -> Outcome {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => return Outcome::Failed(format!("failed to read: {err}")),
    };
    let unit = match SourceUnit::parse(&text) {
        Ok(unit) => unit,
        Err(ParseError::NoElements) => return Outcome::Skipped,
        Err(err) => return Outcome::Failed(err.to_string()),
    };
    match dumps(&unit.to_model()) {
        Ok(rebuilt) if rebuilt == text => Outcome::Identical,
        Ok(rebuilt) => Outcome::Mismatch(first_difference(&text, &rebuilt)),
        Err(err) => Outcome::Failed(err.to_string()),
    }
}

fn first_difference(expected: &str, actual: &str) -> usize {
    let mut left = expected.split_inclusive('\n');
    let mut right = actual.split_inclusive('\n');
    let mut line = 1;
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if a == b => line += 1,
            _ => return line,
        }
    }
}
