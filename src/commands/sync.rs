//! # Sync Command Implementation
//!
//! Runs the whole pipeline inside a checkout of the docs repository: switch to
//! the target branch, pull every source repository into a directory named
//! after it, merge their navigation into `mint.json`, then commit and push.
//!
//! Every option can also come from a `DOCS_MERGE_*` environment variable,
//! which is how CI jobs usually configure it.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use url::Url;

use docs_merge::defaults::{
    DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME, DEFAULT_COMMIT_MESSAGE, DEFAULT_GIT_BASE_URL,
    DOCS_CONFIG_FILE,
};
use docs_merge::git::CommitIdentity;
use docs_merge::orchestrator::{execute_sync, SyncOptions};
use docs_merge::output::{emoji, OutputConfig};
use docs_merge::repository::SystemGit;
use docs_merge::suggestions;

use super::RepoListArgs;

/// Pull, merge, commit and push
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Checkout of the docs repository.
    #[arg(long, value_name = "DIR", default_value = ".", env = "DOCS_MERGE_DOCS_DIR")]
    pub docs_dir: PathBuf,

    /// Branch the merged docs are committed to.
    #[arg(long, value_name = "BRANCH", env = "DOCS_MERGE_TARGET_BRANCH")]
    pub target_branch: String,

    #[command(flatten)]
    pub repos: RepoListArgs,

    /// Access token used to clone the source repositories.
    #[arg(long, value_name = "TOKEN", env = "DOCS_MERGE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Push with --force.
    #[arg(long, env = "DOCS_MERGE_FORCE")]
    pub force: bool,

    /// Merge and print the result without switching branch, writing mint.json,
    /// committing or pushing. Sources are still pulled into the docs directory.
    #[arg(long)]
    pub dry_run: bool,

    /// Commit message.
    #[arg(long, value_name = "MSG", default_value = DEFAULT_COMMIT_MESSAGE, env = "DOCS_MERGE_MESSAGE")]
    pub message: String,

    /// Commit author name.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_AUTHOR_NAME, env = "DOCS_MERGE_AUTHOR_NAME")]
    pub author_name: String,

    /// Commit author email.
    #[arg(long, value_name = "EMAIL", default_value = DEFAULT_AUTHOR_EMAIL, env = "DOCS_MERGE_AUTHOR_EMAIL")]
    pub author_email: String,

    /// Base URL source repositories are cloned from.
    #[arg(long, value_name = "URL", default_value = DEFAULT_GIT_BASE_URL, env = "DOCS_MERGE_GIT_BASE_URL")]
    pub git_base_url: String,
}

impl SyncArgs {
    fn to_options(&self) -> Result<SyncOptions> {
        let base_url = Url::parse(&self.git_base_url)
            .map_err(|e| suggestions::invalid_git_base_url(&self.git_base_url, &e))?;

        let mut options = SyncOptions::new(&self.docs_dir, &self.target_branch);
        options.repos = self.repos.load()?;
        options.token = self.token.clone().filter(|t| !t.is_empty());
        options.base_url = base_url;
        options.force = self.force;
        options.dry_run = self.dry_run;
        options.message = self.message.clone();
        options.identity = CommitIdentity {
            name: self.author_name.clone(),
            email: self.author_email.clone(),
        };
        Ok(options)
    }
}

/// Execute the `sync` command.
pub fn execute(args: SyncArgs, out: &OutputConfig) -> Result<()> {
    let config_path = args.docs_dir.join(DOCS_CONFIG_FILE);
    if !config_path.is_file() {
        return Err(suggestions::docs_config_not_found(&config_path));
    }
    let options = args.to_options()?;

    println!(
        "{} Merging {} repositories into {}",
        emoji(out, "📚", "[SYNC]"),
        options.repos.len(),
        config_path.display()
    );

    let report = execute_sync(&options, &SystemGit).context("Sync failed")?;

    if options.dry_run {
        println!(
            "{} Dry run: {} navigation groups, nothing written",
            emoji(out, "🔍", "[DRY]"),
            report.groups
        );
        print!("{}", report.merged.to_pretty_string()?);
    } else if report.committed {
        println!(
            "{} Pushed {} navigation groups to '{}'",
            emoji(out, "✅", "[OK]"),
            report.groups,
            options.target_branch
        );
    } else {
        println!("{} Docs already up to date", emoji(out, "✅", "[OK]"));
    }
    Ok(())
}
