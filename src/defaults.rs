//! Default values for docs-merge.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use url::Url;

/// File name of the docs config in a documentation directory.
pub const DOCS_CONFIG_FILE: &str = "mint.json";

/// Name of the sibling directory used while extracting a subdirectory of a
/// freshly cloned source repository.
pub const EXTRACTION_DIR_NAME: &str = "temporary-docs-dir";

/// Base URL source repositories are cloned from.
pub const DEFAULT_GIT_BASE_URL: &str = "https://github.com";

/// Commit message used for merge commits.
pub const DEFAULT_COMMIT_MESSAGE: &str = "update";

/// Author name used for merge commits.
pub const DEFAULT_AUTHOR_NAME: &str = "docs-merge[bot]";

/// Author email used for merge commits.
pub const DEFAULT_AUTHOR_EMAIL: &str = "docs-merge[bot]@users.noreply.github.com";

/// Returns [`DEFAULT_GIT_BASE_URL`] parsed as a URL.
///
/// This can be overridden by the `--git-base-url` CLI flag or the
/// `DOCS_MERGE_GIT_BASE_URL` environment variable.
pub fn default_git_base_url() -> Url {
    Url::parse(DEFAULT_GIT_BASE_URL).expect("default git base URL is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_git_base_url_is_https_github() {
        let url = default_git_base_url();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("github.com"));
    }
}
