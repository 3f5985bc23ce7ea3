//! Orchestrator for the complete sync operation
//!
//! Runs the whole pipeline in the docs repository checkout:
//! 1. Point `HEAD` at the target branch (created when missing)
//! 2. Read the base docs config
//! 3. Pull every source repository and merge its navigation
//! 4. Write the merged docs config
//! 5. Commit and push, if anything changed

use std::path::PathBuf;

use log::info;
use url::Url;

use crate::defaults::{default_git_base_url, DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
use crate::defaults::{DEFAULT_COMMIT_MESSAGE, DOCS_CONFIG_FILE};
use crate::document::DocsConfig;
use crate::driver::drive;
use crate::error::Result;
use crate::git::CommitIdentity;
use crate::repos::RepoDescriptor;
use crate::repository::{CloneSource, GitOperations};
use crate::source::{DocumentSink, FileSink};

/// Everything a sync run needs to know.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Checkout of the docs repository; sources are pulled into it.
    pub docs_dir: PathBuf,
    /// Branch the merged docs are committed to.
    pub target_branch: String,
    pub repos: Vec<RepoDescriptor>,
    /// Access token used to clone source repositories.
    pub token: Option<String>,
    pub base_url: Url,
    /// Push with `--force`.
    pub force: bool,
    /// Merge without checking out, writing, committing or pushing.
    pub dry_run: bool,
    pub message: String,
    pub identity: CommitIdentity,
}

impl SyncOptions {
    /// Options with defaults for everything but the essentials.
    pub fn new(docs_dir: impl Into<PathBuf>, target_branch: impl Into<String>) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            target_branch: target_branch.into(),
            repos: Vec::new(),
            token: None,
            base_url: default_git_base_url(),
            force: false,
            dry_run: false,
            message: DEFAULT_COMMIT_MESSAGE.to_string(),
            identity: CommitIdentity {
                name: DEFAULT_AUTHOR_NAME.to_string(),
                email: DEFAULT_AUTHOR_EMAIL.to_string(),
            },
        }
    }
}

/// What a sync run did.
#[derive(Debug, Clone)]
pub struct SyncReport {
    /// The merged docs config.
    pub merged: DocsConfig,
    pub repos_merged: usize,
    /// Top-level navigation groups after the merge.
    pub groups: usize,
    /// Whether a commit was created and pushed.
    pub committed: bool,
}

/// Execute the complete sync operation
pub fn execute_sync(options: &SyncOptions, git: &dyn GitOperations) -> Result<SyncReport> {
    let docs_dir = &options.docs_dir;

    if !options.dry_run {
        git.checkout_branch(docs_dir, &options.target_branch)?;
    }

    let base = DocsConfig::from_file(docs_dir.join(DOCS_CONFIG_FILE))?;
    let source = CloneSource::new(
        docs_dir,
        git,
        options.base_url.clone(),
        options.token.clone(),
    );
    let merged = drive(base, &options.repos, &source)?;

    let mut report = SyncReport {
        repos_merged: options.repos.len(),
        groups: merged.navigation().len(),
        merged,
        committed: false,
    };

    if options.dry_run {
        info!("Dry run, leaving {} untouched", options.docs_dir.display());
        return Ok(report);
    }

    FileSink::new(docs_dir.join(DOCS_CONFIG_FILE)).store(&report.merged)?;

    git.stage_all(docs_dir)?;
    if !git.has_staged_changes(docs_dir)? {
        info!("No changes detected, skipping...");
        return Ok(report);
    }

    git.commit(docs_dir, &options.message, &options.identity)?;
    git.push(docs_dir, &options.target_branch, options.force)?;
    info!("Pushed merged docs to '{}'", options.target_branch);
    report.committed = true;

    Ok(report)
}
