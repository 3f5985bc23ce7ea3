//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use docs_merge::output::{ColorChoice, OutputConfig};

use crate::commands;

/// Docs Merge - Merge satellite documentation into a central docs site
#[derive(Parser, Debug)]
#[command(name = "docs-merge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Colorize output
    #[arg(long, global = true, value_name = "WHEN", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Set log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "info",
        env = "DOCS_MERGE_LOG_LEVEL"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pull every source repository, merge the navigation, commit and push
    Sync(commands::sync::SyncArgs),

    /// Merge already checked-out source directories into a docs config
    Nav(commands::nav::NavArgs),

    /// Show the navigation of a docs config as a tree
    Tree(commands::tree::TreeArgs),

    /// Check a repository list and, optionally, a docs config
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);
        let out = OutputConfig::new(self.color);

        match self.command {
            Commands::Sync(args) => commands::sync::execute(args, &out),
            Commands::Nav(args) => commands::nav::execute(args),
            Commands::Tree(args) => commands::tree::execute(args, &out),
            Commands::Validate(args) => commands::validate::execute(args, &out),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when running under a test harness.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
