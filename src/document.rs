//! # Docs Config Documents
//!
//! A docs config (`mint.json`) is a JSON object with a `navigation` field and
//! any number of other fields. Only `navigation` is interpreted; everything
//! else is carried through verbatim, in its original key order, so a merge run
//! produces a minimal diff.
//!
//! Serialization uses two-space indentation and always ends with a newline.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::navigation::{Navigation, NavigationGroup};

const NAVIGATION_KEY: &str = "navigation";

/// A parsed docs config.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Every top-level field, `navigation` included, in document order.
    fields: Map<String, Value>,
    navigation: Navigation,
}

impl DocsConfig {
    /// Parses a docs config from JSON text.
    ///
    /// `origin` names the document in error messages (usually its path).
    pub fn parse(content: &str, origin: &str) -> Result<Self> {
        let malformed = |message: String| Error::MalformedDocument {
            path: origin.to_string(),
            message,
        };

        let root: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
        let Value::Object(fields) = root else {
            return Err(malformed("expected a JSON object at the top level".to_string()));
        };

        let raw_navigation = fields
            .get(NAVIGATION_KEY)
            .ok_or_else(|| malformed("missing field `navigation`".to_string()))?;
        let navigation: Navigation = serde_json::from_value(raw_navigation.clone())
            .map_err(|e| malformed(format!("invalid `navigation`: {}", e)))?;

        Ok(Self { fields, navigation })
    }

    /// Reads and parses a docs config from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::DocumentNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// The navigation groups of this document.
    pub fn navigation(&self) -> &[NavigationGroup] {
        &self.navigation
    }

    /// Replaces the navigation by applying `update` to the current one.
    pub fn map_navigation<F>(mut self, update: F) -> Self
    where
        F: FnOnce(Navigation) -> Navigation,
    {
        let current = std::mem::take(&mut self.navigation);
        self.navigation = update(current);
        self
    }

    /// Looks up a top-level field other than the navigation.
    pub fn field(&self, key: &str) -> Option<&Value> {
        if key == NAVIGATION_KEY {
            return None;
        }
        self.fields.get(key)
    }

    /// Total number of page references across all groups.
    pub fn page_count(&self) -> usize {
        self.navigation.iter().map(NavigationGroup::page_count).sum()
    }

    /// Serializes the document with two-space indentation and a trailing
    /// newline.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut fields = self.fields.clone();
        fields.insert(
            NAVIGATION_KEY.to_string(),
            serde_json::to_value(&self.navigation)?,
        );
        let mut rendered = serde_json::to_string_pretty(&Value::Object(fields))?;
        rendered.push('\n');
        Ok(rendered)
    }
}

// The raw `navigation` entry in `fields` only fixes the key's position and
// goes stale after `map_navigation`, so equality skips it.
impl PartialEq for DocsConfig {
    fn eq(&self, other: &Self) -> bool {
        self.navigation == other.navigation
            && self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .filter(|(key, _)| key.as_str() != NAVIGATION_KEY)
                .all(|(key, value)| other.fields.get(key) == Some(value))
    }
}
