//! # Document Sources and Sinks
//!
//! The merge driver never touches the disk or the network itself. It asks a
//! [`DocumentSource`] for each repository's docs config and hands the merged
//! result to a [`DocumentSink`]. This module defines both seams and the
//! implementations that work on local directories:
//!
//! - [`LocalSource`] reads `<root>/<repo>/mint.json` for content that is
//!   already on disk (a previous clone, a monorepo checkout, a test fixture).
//! - [`FileSink`] writes the merged config back to a file.
//!
//! The cloning source lives in [`crate::repository`].

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::defaults::DOCS_CONFIG_FILE;
use crate::document::DocsConfig;
use crate::error::Result;
use crate::repos::RepoDescriptor;

/// Supplies the docs config of a source repository.
pub trait DocumentSource {
    /// Loads the docs config for `repo`.
    ///
    /// A missing or malformed document is an error; callers treat it as fatal.
    fn load(&self, repo: &RepoDescriptor) -> Result<DocsConfig>;
}

/// Persists a merged docs config.
pub trait DocumentSink {
    fn store(&self, document: &DocsConfig) -> Result<()>;
}

/// Reads docs configs from directories that already exist under `root`.
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// Where the docs config of `repo` is expected.
    pub fn config_path(&self, repo: &RepoDescriptor) -> PathBuf {
        self.root.join(&repo.repo).join(DOCS_CONFIG_FILE)
    }
}

impl DocumentSource for LocalSource {
    fn load(&self, repo: &RepoDescriptor) -> Result<DocsConfig> {
        DocsConfig::from_file(self.config_path(repo))
    }
}

/// Writes the merged docs config to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSink for FileSink {
    fn store(&self, document: &DocsConfig) -> Result<()> {
        let rendered = document.to_pretty_string()?;
        fs::write(&self.path, rendered)?;
        info!("Wrote {}", self.path.display());
        Ok(())
    }
}
