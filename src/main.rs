//! # Docs Merge CLI
//!
//! Binary entry point for the `docs-merge` command-line tool. Parses the
//! arguments with `clap` and hands off to the matching command; all merge
//! logic lives in the library crate.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
