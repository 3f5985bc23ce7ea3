//! # Error Handling
//!
//! This module defines the error type shared by every part of the
//! `docs-merge` library. It uses `thiserror` to derive a single `Error` enum
//! whose variants map onto the ways a merge run can fail:
//!
//! - Parsing the repository list (`ConfigParse`).
//! - Reading a docs config that does not have the expected shape
//!   (`MalformedDocument`, `DocumentNotFound`).
//! - Running `git` (`GitClone`, `GitCommand`).
//! - Moving pulled content around on disk (`Filesystem`).
//! - Wrapped errors from the standard library and serialization crates.
//!
//! The binary turns these into `anyhow` errors at the command boundary.

use thiserror::Error;

/// Main error type for docs-merge operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository list could not be parsed or failed validation.
    ///
    /// Carries an optional hint about how to fix the input.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A docs config was found but does not have the expected shape
    /// (missing `navigation`, a group without `group` or `pages`, and so on).
    #[error("Malformed docs config {path}: {message}")]
    MalformedDocument { path: String, message: String },

    /// A docs config was expected at a location that does not contain one.
    #[error("Docs config not found: {path}")]
    DocumentNotFound { path: String },

    /// An error occurred while cloning a source repository.
    #[error("Git clone error for {url}@{r#ref}: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    GitClone {
        url: String,
        r#ref: String,
        message: String,
        /// Optional hint for how to resolve the clone issue
        hint: Option<String>,
    },

    /// A `git` invocation exited unsuccessfully.
    #[error("Git command failed in {dir}: git {command} - {stderr}")]
    GitCommand {
        command: String,
        dir: String,
        stderr: String,
    },

    /// Moving or deleting pulled content failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
