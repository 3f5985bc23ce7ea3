//! # Validate Command Implementation
//!
//! Checks a repository list (names, subdirectories, duplicate repos) and,
//! when `--config` is given, that a docs config parses and has a well-formed
//! navigation. Nothing is cloned or written.

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;

use docs_merge::document::DocsConfig;
use docs_merge::output::{emoji, OutputConfig};

use super::RepoListArgs;

/// Check a repository list and, optionally, a docs config
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub repos: RepoListArgs,

    /// Docs config to check as well.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Execute the `validate` command.
pub fn execute(args: ValidateArgs, out: &OutputConfig) -> Result<()> {
    let mut failures = 0;

    if args.repos.is_provided() || args.config.is_none() {
        println!("{} Validating repository list", emoji(out, "🔍", "[SCAN]"));
        match args.repos.load() {
            Ok(repos) => {
                println!(
                    "{} {} repositories, merged in this order:",
                    emoji(out, "✅", "[OK]"),
                    repos.len()
                );
                for repo in &repos {
                    let mut line = format!("   {} -> {}/", repo.slug(), repo.prefix());
                    if let Some(r) = &repo.r#ref {
                        line.push_str(&format!(" @ {}", r));
                    }
                    if let Some(subdirectory) = &repo.subdirectory {
                        line.push_str(&format!(" (from {})", subdirectory));
                    }
                    println!("{}", line);
                }
            }
            Err(e) => {
                failures += 1;
                println!("{} {:#}", out.error_label(emoji(out, "❌", "[ERR]")), e);
            }
        }
    }

    if let Some(path) = &args.config {
        println!(
            "{} Validating docs config: {}",
            emoji(out, "🔍", "[SCAN]"),
            path.display()
        );
        match DocsConfig::from_file(path) {
            Ok(document) => println!(
                "{} {} navigation groups, {} pages",
                emoji(out, "✅", "[OK]"),
                document.navigation().len(),
                document.page_count()
            ),
            Err(e) => {
                failures += 1;
                println!("{} {}", out.error_label(emoji(out, "❌", "[ERR]")), e);
            }
        }
    }

    if failures > 0 {
        bail!("Validation failed with {} error(s)", failures);
    }
    Ok(())
}
