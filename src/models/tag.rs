use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::display::braced;

/// An ordered set of tag names.
///
/// Tags are unique within a set and iterate in ascending lexicographic
/// order, which keeps every rendering of a tag set deterministic. A tag set
/// is also the query argument for tag searches: a note matches when its own
/// tag set is a superset of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    /// Creates an empty tag set.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard::TagSet;
    ///
    /// let tags = TagSet::new();
    /// assert!(tags.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tag, returning `false` if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        self.tags.insert(tag.into())
    }

    /// Returns `true` if the set contains `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Returns `true` if every tag in `other` is also present in `self`.
    ///
    /// The empty set is a subset of everything, so `is_superset` against an
    /// empty argument is always `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard::TagSet;
    ///
    /// let tags = TagSet::from(["tag1", "tag2"]);
    /// assert!(tags.is_superset(&TagSet::from(["tag1"])));
    /// assert!(tags.is_superset(&TagSet::new()));
    /// assert!(!tags.is_superset(&TagSet::from(["tag1", "tag3"])));
    /// ```
    pub fn is_superset(&self, other: &TagSet) -> bool {
        self.tags.is_superset(&other.tags)
    }

    /// Iterates over the tags in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Returns the number of tags in the set.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the set holds no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for TagSet {
    fn from(tags: [S; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", braced(&self.tags))
    }
}
