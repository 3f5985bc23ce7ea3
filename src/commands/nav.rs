//! # Nav Command Implementation
//!
//! Merges source directories that are already on disk into a docs config,
//! without any git operations. Useful for previewing a merge locally, or for
//! monorepos where the "source repositories" are plain subdirectories.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::{Path, PathBuf};

use docs_merge::defaults::DOCS_CONFIG_FILE;
use docs_merge::document::DocsConfig;
use docs_merge::driver::drive;
use docs_merge::source::{DocumentSink, FileSink, LocalSource};
use docs_merge::suggestions;

use super::RepoListArgs;

/// Merge checked-out source directories into a docs config
#[derive(Args, Debug)]
pub struct NavArgs {
    /// The docs config to merge into.
    #[arg(long, value_name = "FILE", default_value = DOCS_CONFIG_FILE)]
    pub base: PathBuf,

    /// Directory holding one `<repo>/mint.json` per repository.
    ///
    /// Defaults to the directory of the base docs config.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub repos: RepoListArgs,

    /// Overwrite the base docs config instead of printing the result.
    #[arg(long)]
    pub write: bool,
}

/// Execute the `nav` command.
pub fn execute(args: NavArgs) -> Result<()> {
    let merged = merge(&args)?;

    if args.write {
        FileSink::new(&args.base)
            .store(&merged)
            .with_context(|| format!("Failed to write {}", args.base.display()))?;
    } else {
        print!("{}", merged.to_pretty_string()?);
    }
    Ok(())
}

fn merge(args: &NavArgs) -> Result<DocsConfig> {
    if !args.base.is_file() {
        return Err(suggestions::docs_config_not_found(&args.base));
    }
    let base = DocsConfig::from_file(&args.base)?;
    let repos = args.repos.load()?;

    let root = match &args.root {
        Some(root) => root.clone(),
        None => args
            .base
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };
    info!("Reading {} repositories from {}", repos.len(), root.display());

    let merged = drive(base, &repos, &LocalSource::new(root))?;
    Ok(merged)
}
