//! CLI definitions for trust-bridge.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "trust-bridge",
    version,
    about = "Split Structured Text units into elements and put them back together",
    after_help = "Examples:\n  trust-bridge tree FB_Pump.st\n  trust-bridge extract FB_Pump.st --element SetSpeed --part implementation\n  trust-bridge replace FB_Pump.st --element SetSpeed --implementation body.st --write\n  trust-bridge check src/"
)]
pub struct Cli {
    /// Show debug logging on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the element tree of a unit.
    Tree {
        /// Source unit (.st).
        file: PathBuf,
        /// Print the extracted model as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the deindented text of one element.
    #[command(
        after_help = "Examples:\n  trust-bridge extract FB_Pump.st\n  trust-bridge extract FB_Pump.st --element SetSpeed\n  trust-bridge extract FB_Pump.st --element SetSpeed --part declaration"
    )]
    Extract {
        /// Source unit (.st).
        file: PathBuf,
        /// Dotted element path below the root (defaults to the root).
        #[arg(long)]
        element: Option<String>,
        /// Which part of the element to print.
        #[arg(long, value_enum, default_value_t = Part::Full)]
        part: Part,
    },
    /// Replace the text of one element and print the rebuilt unit.
    Replace {
        /// Source unit (.st).
        file: PathBuf,
        /// Dotted element path below the root.
        #[arg(long)]
        element: String,
        /// File holding the new declaration text.
        #[arg(long)]
        declaration: Option<PathBuf>,
        /// File holding the new implementation text.
        #[arg(long)]
        implementation: Option<PathBuf>,
        /// Write the result back to FILE instead of printing it.
        #[arg(long)]
        write: bool,
    },
    /// Verify that units survive split and rebuild unchanged.
    Check {
        /// Files or directories (defaults to the current directory).
        paths: Vec<PathBuf>,
        /// Number of worker threads.
        #[arg(long, short)]
        jobs: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Part {
    /// Declaration text only.
    Declaration,
    /// Implementation text only.
    Implementation,
    /// The element as a self-contained unit.
    Full,
}
