//! CLI entrypoint for the Structured Text segmentation bridge.

#[path = "trust-bridge/check.rs"]
mod check;
#[path = "trust-bridge/cli.rs"]
mod cli;
#[path = "trust-bridge/config.rs"]
mod config;
#[path = "trust-bridge/extract.rs"]
mod extract;
#[path = "trust-bridge/replace.rs"]
mod replace;
#[path = "trust-bridge/source.rs"]
mod source;
#[path = "trust-bridge/style.rs"]
mod style;
#[path = "trust-bridge/tree.rs"]
mod tree;

use clap::Parser;
use tracing::{warn, Level};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::BridgeConfig;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", style::error(format!("Error: {err:#}")));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir()?;
    let config = BridgeConfig::load(&root);
    init_logging(cli.verbose, config.log.level.as_deref());
    for message in &config.warnings {
        warn!("{message}");
    }

    match cli.command {
        Command::Tree { file, json } => tree::run_tree(&file, json),
        Command::Extract {
            file,
            element,
            part,
        } => extract::run_extract(&file, element.as_deref().unwrap_or_default(), part),
        Command::Replace {
            file,
            element,
            declaration,
            implementation,
            write,
        } => replace::run_replace(
            &file,
            &element,
            declaration.as_deref(),
            implementation.as_deref(),
            write,
        ),
        Command::Check { paths, jobs } => check::run_check(&root, &paths, jobs, &config.check),
    }
}

fn init_logging(verbose: bool, configured: Option<&str>) {
    let level = if verbose {
        Level::DEBUG
    } else {
        configured
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::WARN)
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}
