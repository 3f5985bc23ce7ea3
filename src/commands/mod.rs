//! # CLI Command Implementations
//!
//! One module per subcommand of `docs-merge`. Each holds an `Args` struct
//! derived with `clap` and an `execute` function that calls into the
//! `docs_merge` library.

pub mod completions;
pub mod nav;
pub mod sync;
pub mod tree;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use docs_merge::repos::{self, RepoDescriptor};
use docs_merge::suggestions;

/// Where the repository list comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct RepoListArgs {
    /// Repository list as inline YAML or JSON, e.g. '[{owner: acme, repo: api}]'.
    #[arg(long, value_name = "YAML", env = "DOCS_MERGE_REPOS", conflicts_with = "repos_file")]
    pub repos: Option<String>,

    /// File holding the repository list.
    #[arg(long, value_name = "FILE", env = "DOCS_MERGE_REPOS_FILE")]
    pub repos_file: Option<PathBuf>,
}

impl RepoListArgs {
    /// Whether either source of a repository list was given.
    pub fn is_provided(&self) -> bool {
        self.repos.is_some() || self.repos_file.is_some()
    }

    /// Parses and validates the repository list.
    pub fn load(&self) -> Result<Vec<RepoDescriptor>> {
        match (&self.repos, &self.repos_file) {
            (Some(inline), _) => repos::parse(inline).context("Invalid --repos value"),
            (None, Some(path)) => repos::from_file(path)
                .with_context(|| format!("Failed to load repository list {}", path.display())),
            (None, None) => Err(suggestions::repos_not_provided()),
        }
    }
}
