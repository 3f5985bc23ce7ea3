//! # Merge Driver
//!
//! Folds the navigation of every source repository into a base docs config.
//! Repositories are processed strictly in list order, so when two of them
//! contribute a group with the same identity the later one wins.

use log::{debug, info};

use crate::document::DocsConfig;
use crate::error::{Error, Result};
use crate::navigation::merge_navigation;
use crate::repos::RepoDescriptor;
use crate::source::DocumentSource;

/// Merges the navigation of each of `repos` into `base`.
///
/// Each repository's groups are prefixed with its name. Fields of `base`
/// other than `navigation` are left as they are. The first repository whose
/// document cannot be loaded aborts the whole merge.
pub fn drive(
    base: DocsConfig,
    repos: &[RepoDescriptor],
    source: &dyn DocumentSource,
) -> Result<DocsConfig> {
    let merged = repos.iter().try_fold(base, |accumulated, repo| {
        let document = source.load(repo)?;
        debug!(
            "{}: merging {} group(s) under '{}'",
            repo.slug(),
            document.navigation().len(),
            repo.prefix()
        );
        Ok::<_, Error>(accumulated.map_navigation(|navigation| {
            merge_navigation(navigation, document.navigation(), repo.prefix())
        }))
    })?;

    info!(
        "Merged {} repositories into {} navigation group(s)",
        repos.len(),
        merged.navigation().len()
    );
    Ok(merged)
}
