//! Tag-based exclusion.

use crate::types::Tagged;
use std::collections::BTreeSet;

/// Set of tags whose bearers are omitted from generated output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    tags: BTreeSet<String>,
}

impl ExclusionSet {
    /// Creates an empty exclusion set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from comma-separated lists, as passed on the command line.
    ///
    /// Blank entries are ignored and surrounding whitespace is trimmed.
    pub fn from_lists<I, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for list in lists {
            for tag in list.as_ref().split(',') {
                set.insert(tag);
            }
        }
        set
    }

    /// Adds a single tag.
    pub fn insert(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() {
            self.tags.insert(tag.to_string());
        }
    }

    /// Returns true if `item` carries any excluded tag.
    #[must_use]
    pub fn excludes<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        !self.tags.is_empty() && item.tags().iter().any(|t| self.tags.contains(t))
    }

    /// Iterates the excluded tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Returns true if no tag is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
