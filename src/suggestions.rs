//! # Error Suggestions
//!
//! Helpers that build CLI errors with hints, so a failure says what went wrong
//! and what to try next.

use std::path::Path;

/// The docs config was not found where a command expected it.
pub fn docs_config_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Docs config not found: {path}\n\n\
         hint: Run inside the docs repository, or pass --docs-dir / --base\n\
         hint: The docs config must be named mint.json",
        path = path.display()
    )
}

/// Neither an inline repository list nor a list file was given.
pub fn repos_not_provided() -> anyhow::Error {
    anyhow::anyhow!(
        "No repository list given\n\n\
         hint: Pass --repos '<yaml>' or --repos-file <FILE>\n\
         hint: Set DOCS_MERGE_REPOS or DOCS_MERGE_REPOS_FILE\n\
         hint: Use --repos '[]' to merge nothing"
    )
}

/// The `--git-base-url` value is not a URL.
pub fn invalid_git_base_url(value: &str, error: &url::ParseError) -> anyhow::Error {
    anyhow::anyhow!(
        "Invalid git base URL: {value}\n\
         error: {error}\n\n\
         hint: Use a full URL such as https://github.com or file:///srv/git"
    )
}
