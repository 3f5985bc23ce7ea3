//! Thin wrappers around the system `git` binary.
//!
//! Every function takes the directory to run in explicitly; nothing here
//! changes the process working directory. Using the system binary means SSH
//! keys, credential helpers and `~/.gitconfig` settings all apply as usual.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use log::debug;
use url::Url;

use crate::error::{Error, Result};

/// Name and email recorded on merge commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitIdentity {
    pub name: String,
    pub email: String,
}

/// Replaces any credentials in `url` with `***`.
pub fn redact_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(mut parsed) if !parsed.username().is_empty() || parsed.password().is_some() => {
            let _ = parsed.set_password(None);
            let _ = parsed.set_username("***");
            parsed.to_string()
        }
        _ => url.to_string(),
    }
}

fn redact_secret(text: &str, url: &str) -> String {
    match Url::parse(url).ok().and_then(|u| u.password().map(str::to_string)) {
        Some(secret) if !secret.is_empty() => text.replace(&secret, "***"),
        _ => text.to_string(),
    }
}

fn run_git(dir: &Path, args: &[&str]) -> Result<Output> {
    debug!("git {} (in {})", args.join(" "), dir.display());
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            dir: dir.display().to_string(),
            stderr: e.to_string(),
        })
}

fn run_git_checked(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = run_git(dir, args)?;
    if !output.status.success() {
        return Err(Error::GitCommand {
            command: args.join(" "),
            dir: dir.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(output)
}

/// Clone a repository with `--depth=1` into `target_dir`
///
/// An existing `target_dir` is removed first, since git refuses to clone into
/// a non-empty directory. Without `ref_name` the remote's default branch is
/// cloned.
pub fn clone_shallow(url: &str, ref_name: Option<&str>, target_dir: &Path) -> Result<()> {
    let display_url = redact_url(url);
    let display_ref = ref_name.unwrap_or("HEAD").to_string();

    if target_dir.exists() {
        fs::remove_dir_all(target_dir)?;
    }
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut command = Command::new("git");
    command.args(["clone", "--depth=1"]);
    if let Some(ref_name) = ref_name {
        command.args(["--branch", ref_name]);
    }
    command.arg(url).arg(target_dir);

    debug!("git clone --depth=1 {} {}", display_url, target_dir.display());
    let output = command.output().map_err(|e| Error::GitClone {
        url: display_url.clone(),
        r#ref: display_ref.clone(),
        message: e.to_string(),
        hint: Some("Make sure git is installed and on PATH".to_string()),
    })?;

    if !output.status.success() {
        let stderr = redact_secret(String::from_utf8_lossy(&output.stderr).trim(), url);

        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("could not read Username")
            || stderr.contains("Permission denied")
            || stderr.contains("Repository not found")
        {
            Some("Check that the token has read access to this repository".to_string())
        } else if stderr.contains("Remote branch") && stderr.contains("not found") {
            Some(format!("Check that '{}' exists in the repository", display_ref))
        } else {
            None
        };

        return Err(Error::GitClone {
            url: display_url,
            r#ref: display_ref,
            message: stderr,
            hint,
        });
    }

    Ok(())
}

/// Point `HEAD` of the repository at `dir` to `branch`.
///
/// When `origin` already has the branch it is fetched and `HEAD` is moved to it
/// without touching the working tree, so the next commit records the current
/// tree on top of the remote branch. Otherwise the branch is created from the
/// current `HEAD`.
pub fn checkout_branch(dir: &Path, branch: &str) -> Result<()> {
    let on_remote = run_git(dir, &["ls-remote", "--heads", "--exit-code", "origin", branch])?
        .status
        .success();

    if on_remote {
        debug!("branch '{}' exists on origin", branch);
        let refspec = format!("{}:{}", branch, branch);
        run_git_checked(dir, &["fetch", "-u", "origin", &refspec])?;
        let head = format!("refs/heads/{}", branch);
        run_git_checked(dir, &["symbolic-ref", "HEAD", &head])?;
    } else {
        debug!("branch '{}' not on origin, creating it", branch);
        run_git_checked(dir, &["checkout", "-b", branch])?;
    }
    Ok(())
}

/// `git add .`
pub fn stage_all(dir: &Path) -> Result<()> {
    run_git_checked(dir, &["add", "."]).map(|_| ())
}

/// Whether the index differs from `HEAD`.
pub fn has_staged_changes(dir: &Path) -> Result<bool> {
    let args = ["diff-index", "--quiet", "--cached", "HEAD", "--"];
    let output = run_git(dir, &args)?;
    match output.status.code() {
        Some(0) => Ok(false),
        Some(1) => Ok(true),
        _ => Err(Error::GitCommand {
            command: args.join(" "),
            dir: dir.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }),
    }
}

/// Commit the index with `message`, authored by `identity`.
pub fn commit(dir: &Path, message: &str, identity: &CommitIdentity) -> Result<()> {
    let name = format!("user.name={}", identity.name);
    let email = format!("user.email={}", identity.email);
    run_git_checked(dir, &["-c", &name, "-c", &email, "commit", "-m", message]).map(|_| ())
}

/// Push `branch` to `origin`, with `--force` when asked to.
pub fn push(dir: &Path, branch: &str, force: bool) -> Result<()> {
    let mut args = vec!["push"];
    if force {
        args.push("--force");
    }
    args.extend(["origin", branch]);
    run_git_checked(dir, &args).map(|_| ())
}
