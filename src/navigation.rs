//! # Navigation Trees
//!
//! This module models the `navigation` section of a docs config and holds the
//! two pure operations the whole tool is built around:
//!
//! - [`prefix_group`] rewrites every page reference of a group (at any depth)
//!   so it lives under a path prefix.
//! - [`merge_navigation`] upserts the groups of a source navigation into a
//!   destination navigation, replacing groups with the same identity in place
//!   and appending the rest.
//!
//! ## Shape
//!
//! ```json
//! [
//!   { "group": "Guides", "pages": ["intro", { "group": "Advanced", "pages": ["tuning"] }] }
//! ]
//! ```
//!
//! A navigation is a list of groups. A group has a `group` name and a list of
//! `pages`, each of which is either a page path or another group. Any other
//! attribute on a group (`icon`, `version`, ...) is carried along untouched.
//!
//! ## Identity
//!
//! Two groups are the same group when their `group` names are equal. A group
//! may also carry an explicit `id` attribute; when both groups being compared
//! have one, the ids decide instead of the names.

use std::collections::HashSet;

use log::{debug, warn};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered list of top-level navigation groups.
pub type Navigation = Vec<NavigationGroup>;

/// One element of a group's `pages` list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NavigationEntry {
    /// A page path, relative to the docs root and without extension.
    Page(String),
    /// A nested group.
    Group(NavigationGroup),
}

/// A named section of the navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Display name, also the default identity of the group.
    pub group: String,
    /// Pages and nested groups, in display order.
    pub pages: Vec<NavigationEntry>,
    /// Every other attribute found on the group.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl NavigationEntry {
    /// Creates a page entry.
    pub fn page(path: impl Into<String>) -> Self {
        NavigationEntry::Page(path.into())
    }

    fn prefixed(&self, prefix: &str) -> Self {
        match self {
            NavigationEntry::Page(path) => NavigationEntry::Page(format!("{}/{}", prefix, path)),
            NavigationEntry::Group(group) => NavigationEntry::Group(prefix_group(group, prefix)),
        }
    }
}

// Hand-written so a broken nested group reports its own name and problem
// instead of "did not match any variant".
impl<'de> Deserialize<'de> for NavigationEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(path) => Ok(NavigationEntry::Page(path)),
            Value::Object(object) => {
                let name = object
                    .get("group")
                    .and_then(Value::as_str)
                    .map(|name| format!("group '{}'", name))
                    .unwrap_or_else(|| "nested group".to_string());
                NavigationGroup::deserialize(Value::Object(object))
                    .map(NavigationEntry::Group)
                    .map_err(|e| de::Error::custom(format!("invalid {}: {}", name, e)))
            }
            other => Err(de::Error::custom(format!(
                "expected a page path or a group, found {}",
                other
            ))),
        }
    }
}

impl From<&str> for NavigationEntry {
    fn from(path: &str) -> Self {
        NavigationEntry::page(path)
    }
}

impl From<NavigationGroup> for NavigationEntry {
    fn from(group: NavigationGroup) -> Self {
        NavigationEntry::Group(group)
    }
}

impl NavigationGroup {
    /// Creates a group without extra attributes.
    pub fn new(group: impl Into<String>, pages: Vec<NavigationEntry>) -> Self {
        Self {
            group: group.into(),
            pages,
            attributes: Map::new(),
        }
    }

    /// Sets an explicit identity for the group.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.attributes
            .insert("id".to_string(), Value::String(id.into()));
        self
    }

    /// The explicit `id` attribute, if the group has a string one.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(Value::as_str)
    }

    /// Whether `self` and `other` denote the same group.
    ///
    /// Ids are compared when both groups have one; otherwise the `group`
    /// names are compared, case-sensitively.
    pub fn same_identity(&self, other: &NavigationGroup) -> bool {
        match (self.id(), other.id()) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => self.group == other.group,
        }
    }

    /// Number of page references in this group, nested groups included.
    pub fn page_count(&self) -> usize {
        self.pages
            .iter()
            .map(|entry| match entry {
                NavigationEntry::Page(_) => 1,
                NavigationEntry::Group(group) => group.page_count(),
            })
            .sum()
    }
}

/// Returns a copy of `group` with every page path prefixed by `prefix/`.
///
/// Nested groups get the same prefix as their parent. The prefix is used
/// verbatim: no slash normalization takes place, so applying this twice with
/// the same prefix prefixes twice.
pub fn prefix_group(group: &NavigationGroup, prefix: &str) -> NavigationGroup {
    NavigationGroup {
        group: group.group.clone(),
        pages: group
            .pages
            .iter()
            .map(|entry| entry.prefixed(prefix))
            .collect(),
        attributes: group.attributes.clone(),
    }
}

/// Upserts the groups of `source`, prefixed with `prefix`, into `destination`.
///
/// For each source group, in order, the first destination group with the same
/// identity is overwritten in place; when there is none the prefixed group is
/// appended. A destination slot is written at most once per call, so a second
/// same-named group in `source` lands in a slot of its own instead of
/// overwriting the first one.
pub fn merge_navigation(
    mut destination: Navigation,
    source: &[NavigationGroup],
    prefix: &str,
) -> Navigation {
    warn_on_duplicate_groups(source, prefix);

    let mut claimed = vec![false; destination.len()];
    for sub_group in source {
        let prefixed = prefix_group(sub_group, prefix);
        let slot = destination
            .iter()
            .enumerate()
            .position(|(index, existing)| !claimed[index] && existing.same_identity(&prefixed));

        match slot {
            Some(index) => {
                debug!("{}: replacing group '{}' at position {}", prefix, prefixed.group, index);
                destination[index] = prefixed;
                claimed[index] = true;
            }
            None => {
                debug!("{}: appending group '{}'", prefix, prefixed.group);
                destination.push(prefixed);
                claimed.push(true);
            }
        }
    }

    destination
}

fn warn_on_duplicate_groups(source: &[NavigationGroup], prefix: &str) {
    let mut seen = HashSet::new();
    for group in source {
        let key = group.id().unwrap_or(group.group.as_str());
        if !seen.insert(key) {
            warn!(
                "{}: group '{}' appears more than once; later copies are kept as separate groups",
                prefix, key
            );
        }
    }
}
