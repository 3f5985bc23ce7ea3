//! # Source Repository Checkout
//!
//! This module pulls source repositories into the docs directory and reads
//! their docs config. It is built around the `GitOperations` trait, which
//! separates what the pipeline needs from git (clone, branch, stage, commit,
//! push) from how it is done. `SystemGit` shells out to the `git` binary; tests
//! substitute an implementation that writes fixture files instead.
//!
//! ## Pulling a repository
//!
//! [`CloneSource`] implements [`DocumentSource`] by:
//!
//! 1. Shallow cloning `owner/repo` into `<docs dir>/<repo>`, replacing any
//!    previous copy.
//! 2. If a subdirectory is configured, keeping only that directory: it is moved
//!    aside, the clone is deleted, and the directory is moved back in under the
//!    repository's name.
//! 3. Otherwise deleting the clone's `.git` directory so the content is
//!    committed as plain files.
//! 4. Parsing `<docs dir>/<repo>/mint.json`.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use url::Url;

use crate::defaults::{DOCS_CONFIG_FILE, EXTRACTION_DIR_NAME};
use crate::document::DocsConfig;
use crate::error::{Error, Result};
use crate::git::{self, CommitIdentity};
use crate::repos::RepoDescriptor;
use crate::source::DocumentSource;

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clones `url` at `ref_name` (or the default branch) into `target_dir`
    /// with history depth 1.
    fn clone_shallow(&self, url: &str, ref_name: Option<&str>, target_dir: &Path) -> Result<()>;

    /// Makes `branch` the current branch of the repository at `dir`, creating
    /// it when `origin` does not have it.
    fn checkout_branch(&self, dir: &Path, branch: &str) -> Result<()>;

    /// Stages every change under `dir`.
    fn stage_all(&self, dir: &Path) -> Result<()>;

    /// Whether anything is staged.
    fn has_staged_changes(&self, dir: &Path) -> Result<bool>;

    /// Commits the staged changes.
    fn commit(&self, dir: &Path, message: &str, identity: &CommitIdentity) -> Result<()>;

    /// Pushes `branch` to `origin`.
    fn push(&self, dir: &Path, branch: &str, force: bool) -> Result<()>;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGit;

impl GitOperations for SystemGit {
    fn clone_shallow(&self, url: &str, ref_name: Option<&str>, target_dir: &Path) -> Result<()> {
        git::clone_shallow(url, ref_name, target_dir)
    }

    fn checkout_branch(&self, dir: &Path, branch: &str) -> Result<()> {
        git::checkout_branch(dir, branch)
    }

    fn stage_all(&self, dir: &Path) -> Result<()> {
        git::stage_all(dir)
    }

    fn has_staged_changes(&self, dir: &Path) -> Result<bool> {
        git::has_staged_changes(dir)
    }

    fn commit(&self, dir: &Path, message: &str, identity: &CommitIdentity) -> Result<()> {
        git::commit(dir, message, identity)
    }

    fn push(&self, dir: &Path, branch: &str, force: bool) -> Result<()> {
        git::push(dir, branch, force)
    }
}

/// A [`DocumentSource`] that clones each repository into the docs directory.
pub struct CloneSource<'a> {
    docs_dir: PathBuf,
    git: &'a dyn GitOperations,
    base_url: Url,
    token: Option<String>,
}

impl<'a> CloneSource<'a> {
    pub fn new(
        docs_dir: impl Into<PathBuf>,
        git: &'a dyn GitOperations,
        base_url: Url,
        token: Option<String>,
    ) -> Self {
        Self {
            docs_dir: docs_dir.into(),
            git,
            base_url,
            token,
        }
    }

    /// Directory the content of `repo` ends up in.
    pub fn checkout_dir(&self, repo: &RepoDescriptor) -> PathBuf {
        self.docs_dir.join(&repo.repo)
    }

    fn pull(&self, repo: &RepoDescriptor) -> Result<PathBuf> {
        repo.validate()?;
        let target = self.checkout_dir(repo);
        let url = repo.clone_url(&self.base_url, self.token.as_deref())?;

        info!(
            "Pulling {}{}",
            repo.slug(),
            repo.r#ref
                .as_deref()
                .map(|r| format!(" @ {}", r))
                .unwrap_or_default()
        );
        self.git
            .clone_shallow(url.as_str(), repo.r#ref.as_deref(), &target)?;

        match &repo.subdirectory {
            Some(subdirectory) => self.keep_only(&target, subdirectory)?,
            None => remove_git_metadata(&target)?,
        }
        Ok(target)
    }

    fn keep_only(&self, target: &Path, subdirectory: &str) -> Result<()> {
        let nested = target.join(subdirectory);
        if !nested.is_dir() {
            return Err(Error::Filesystem {
                message: format!(
                    "Subdirectory '{}' not found in {}",
                    subdirectory,
                    target.display()
                ),
            });
        }

        let staging = self.docs_dir.join(EXTRACTION_DIR_NAME);
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        move_dir(&nested, &staging)?;
        fs::remove_dir_all(target)?;
        move_dir(&staging, target)
    }
}

impl DocumentSource for CloneSource<'_> {
    fn load(&self, repo: &RepoDescriptor) -> Result<DocsConfig> {
        let checkout = self.pull(repo)?;
        DocsConfig::from_file(checkout.join(DOCS_CONFIG_FILE))
    }
}

fn move_dir(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to move '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ),
    })
}

fn remove_git_metadata(checkout: &Path) -> Result<()> {
    let git_dir = checkout.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir)?;
    }
    Ok(())
}
