//! # Docs Merge Library
//!
//! Aggregates the documentation of several source repositories into one docs
//! site. Each source repository carries a `mint.json` docs config whose
//! `navigation` lists groups of pages. Merging pulls every source into a
//! directory named after it, prefixes its page paths with that name, and
//! upserts its groups into the docs site's own navigation by group name.
//!
//! ## Quick Example
//!
//! ```
//! use docs_merge::navigation::{merge_navigation, NavigationGroup};
//!
//! let site = vec![
//!     NavigationGroup::new("Home", vec!["index".into()]),
//!     NavigationGroup::new("API", vec!["old".into()]),
//! ];
//! let api_repo = vec![NavigationGroup::new("API", vec!["users".into()])];
//!
//! let merged = merge_navigation(site, &api_repo, "api");
//! assert_eq!(merged[1], NavigationGroup::new("API", vec!["api/users".into()]));
//! ```
//!
//! ## Core Concepts
//!
//! - **Navigation (`navigation`)**: the group tree and the two pure operations
//!   on it, prefixing and merging.
//! - **Documents (`document`)**: a docs config with its other fields kept
//!   verbatim and in order.
//! - **Repository list (`repos`)**: which repositories to merge, in which order.
//! - **Sources and sinks (`source`, `repository`)**: where documents come from
//!   (a local directory or a fresh shallow clone) and where the result goes.
//! - **Driver (`driver`)**: folds every source into the base document.
//! - **Orchestrator (`orchestrator`)**: the full sync run in a docs repository
//!   checkout, from branch checkout to push.

pub mod defaults;
pub mod document;
pub mod driver;
pub mod error;
pub mod git;
pub mod navigation;
pub mod orchestrator;
pub mod output;
pub mod repos;
pub mod repository;
pub mod source;
pub mod suggestions;

#[cfg(test)]
mod navigation_proptest;
#[cfg(test)]
mod testing;
