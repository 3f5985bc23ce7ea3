//! # Repository List
//!
//! The list of source repositories to merge, supplied as YAML (JSON works as
//! well, being a subset of YAML):
//!
//! ```yaml
//! - owner: acme
//!   repo: api
//! - owner: acme
//!   repo: sdk
//!   ref: v2
//!   subdirectory: docs
//! ```
//!
//! `repo` does double duty: it is the directory the content is pulled into and
//! the prefix every page of that repository gets in the merged navigation.
//! List order is the processing order, and therefore decides which repository
//! wins when two of them contribute a group with the same name: the later one.

use std::collections::HashSet;
use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults::{DOCS_CONFIG_FILE, EXTRACTION_DIR_NAME};
use crate::error::{Error, Result};

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("name pattern is a valid regex"));

const LIST_HINT: &str =
    "Expected a list of entries like `- owner: acme` / `  repo: api` (optional: ref, subdirectory)";

/// One source repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoDescriptor {
    /// Owner or organization on the git host.
    pub owner: String,
    /// Repository name; also the checkout directory and the navigation prefix.
    pub repo: String,
    /// Branch or tag to clone. The remote default branch when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
    /// Only this directory of the repository is pulled in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdirectory: Option<String>,
}

impl RepoDescriptor {
    /// Creates a descriptor for `owner/repo` at the default branch.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            r#ref: None,
            subdirectory: None,
        }
    }

    /// The path prefix used for this repository's pages.
    pub fn prefix(&self) -> &str {
        &self.repo
    }

    /// `owner/repo`, for messages.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Checks names and the subdirectory for values that would escape the
    /// docs directory or produce unusable URLs.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("owner", &self.owner), ("repo", &self.repo)] {
            if !NAME_PATTERN.is_match(value) || value == "." || value == ".." {
                return Err(Error::ConfigParse {
                    message: format!("Invalid {} '{}'", field, value),
                    hint: Some(format!(
                        "'{}' may only contain letters, digits, '.', '-' and '_'",
                        field
                    )),
                });
            }
        }

        // The repo name is a directory inside the docs checkout, which is
        // replaced wholesale on every pull.
        let reserved = [".git", DOCS_CONFIG_FILE, EXTRACTION_DIR_NAME]
            .iter()
            .any(|name| self.repo.eq_ignore_ascii_case(name));
        if reserved {
            return Err(Error::ConfigParse {
                message: format!("Repository name '{}' is reserved", self.repo),
                hint: Some(format!(
                    "'.git', '{}' and '{}' already live in the docs directory",
                    DOCS_CONFIG_FILE, EXTRACTION_DIR_NAME
                )),
            });
        }

        if let Some(subdirectory) = &self.subdirectory {
            let path = Path::new(subdirectory);
            let well_formed = !subdirectory.is_empty()
                && path
                    .components()
                    .all(|component| matches!(component, Component::Normal(_)));
            if !well_formed {
                return Err(Error::ConfigParse {
                    message: format!(
                        "Invalid subdirectory '{}' for {}",
                        subdirectory,
                        self.slug()
                    ),
                    hint: Some(
                        "Use a relative path inside the repository, without '.' or '..'"
                            .to_string(),
                    ),
                });
            }
        }

        Ok(())
    }

    /// Builds the clone URL `{base}/{owner}/{repo}.git`.
    ///
    /// For http(s) bases a non-empty `token` is embedded as
    /// `x-access-token:{token}` credentials.
    pub fn clone_url(&self, base: &Url, token: Option<&str>) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| Error::ConfigParse {
                message: format!("Git base URL '{}' cannot hold a path", base),
                hint: None,
            })?
            .pop_if_empty()
            .push(&self.owner)
            .push(&format!("{}.git", self.repo));

        if let Some(token) = token.filter(|t| !t.is_empty()) {
            if matches!(url.scheme(), "http" | "https") {
                let credentials_rejected = |()| Error::ConfigParse {
                    message: format!("Cannot attach credentials to '{}'", base),
                    hint: None,
                };
                url.set_username("x-access-token")
                    .map_err(credentials_rejected)?;
                url.set_password(Some(token))
                    .map_err(credentials_rejected)?;
            }
        }

        Ok(url)
    }
}

/// Parses and validates a repository list.
pub fn parse(yaml_content: &str) -> Result<Vec<RepoDescriptor>> {
    if yaml_content.trim().is_empty() {
        return Err(Error::ConfigParse {
            message: "Repository list is empty".to_string(),
            hint: Some("Use `[]` to merge no repositories".to_string()),
        });
    }

    let repos: Vec<RepoDescriptor> =
        serde_yaml::from_str(yaml_content).map_err(|e| Error::ConfigParse {
            message: e.to_string(),
            hint: Some(LIST_HINT.to_string()),
        })?;

    let mut seen = HashSet::new();
    for repo in &repos {
        repo.validate()?;
        if !seen.insert(repo.repo.as_str()) {
            return Err(Error::ConfigParse {
                message: format!("Repository name '{}' is listed more than once", repo.repo),
                hint: Some(
                    "Each repo name is a directory and a page prefix, so it must be unique"
                        .to_string(),
                ),
            });
        }
    }

    Ok(repos)
}

/// Reads and parses a repository list from a file.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RepoDescriptor>> {
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    parse(&content)
}
