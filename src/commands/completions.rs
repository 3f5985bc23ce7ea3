//! # Completions Command Implementation
//!
//! Writes a shell completion script for `docs-merge` to stdout.
//!
//! ```bash
//! docs-merge completions bash > ~/.local/share/bash-completion/completions/docs-merge
//! docs-merge completions zsh > ~/.zfunc/_docs-merge
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "docs-merge", &mut io::stdout());
    Ok(())
}
