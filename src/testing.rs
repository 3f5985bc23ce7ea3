//! Test doubles shared by unit tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::git::CommitIdentity;
use crate::repository::GitOperations;

/// Mock git operations that "clone" by writing fixture files.
///
/// Repositories are looked up by the last path segment of the clone URL, so
/// `https://github.com/acme/api.git` serves the fixture registered as `api`.
/// Every call is recorded for assertions.
#[derive(Default)]
pub struct FixtureGit {
    repos: HashMap<String, Vec<(String, String)>>,
    staged_changes: bool,
    clone_calls: Arc<Mutex<Vec<(String, Option<String>)>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FixtureGit {
    pub fn new() -> Self {
        Self {
            staged_changes: true,
            ..Self::default()
        }
    }

    pub fn with_repo(mut self, name: &str, files: &[(&str, &str)]) -> Self {
        self.repos.insert(
            name.to_string(),
            files
                .iter()
                .map(|(path, content)| (path.to_string(), content.to_string()))
                .collect(),
        );
        self
    }

    pub fn with_staged_changes(mut self, staged: bool) -> Self {
        self.staged_changes = staged;
        self
    }

    /// `(url, ref)` of every clone, in call order.
    pub fn clones(&self) -> Vec<(String, Option<String>)> {
        self.clone_calls.lock().unwrap().clone()
    }

    /// Every non-clone call, rendered like `commit update`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GitOperations for FixtureGit {
    fn clone_shallow(&self, url: &str, ref_name: Option<&str>, target_dir: &Path) -> Result<()> {
        self.clone_calls
            .lock()
            .unwrap()
            .push((url.to_string(), ref_name.map(str::to_string)));

        let name = url
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .trim_end_matches(".git");
        let files = self.repos.get(name).ok_or_else(|| Error::GitClone {
            url: url.to_string(),
            r#ref: ref_name.unwrap_or("HEAD").to_string(),
            message: "Repository not found".to_string(),
            hint: None,
        })?;

        if target_dir.exists() {
            fs::remove_dir_all(target_dir)?;
        }
        fs::create_dir_all(target_dir.join(".git"))?;
        fs::write(target_dir.join(".git/HEAD"), "ref: refs/heads/main\n")?;
        for (path, content) in files {
            let file = target_dir.join(path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file, content)?;
        }
        Ok(())
    }

    fn checkout_branch(&self, _dir: &Path, branch: &str) -> Result<()> {
        self.record(format!("checkout {}", branch));
        Ok(())
    }

    fn stage_all(&self, _dir: &Path) -> Result<()> {
        self.record("add".to_string());
        Ok(())
    }

    fn has_staged_changes(&self, _dir: &Path) -> Result<bool> {
        self.record("diff-index".to_string());
        Ok(self.staged_changes)
    }

    fn commit(&self, _dir: &Path, message: &str, identity: &CommitIdentity) -> Result<()> {
        self.record(format!("commit {} <{}> {}", identity.name, identity.email, message));
        Ok(())
    }

    fn push(&self, _dir: &Path, branch: &str, force: bool) -> Result<()> {
        self.record(if force {
            format!("push --force {}", branch)
        } else {
            format!("push {}", branch)
        });
        Ok(())
    }
}
