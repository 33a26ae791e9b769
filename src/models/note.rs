use std::fmt;

use serde::{Deserialize, Serialize};

use super::TagSet;

/// A note with a title, a text body, and a set of tags.
///
/// Notes are plain values: fields never change after construction, and two
/// notes compare equal exactly when title, text, and tag set all match.
/// Empty strings and empty tag sets are legal; no validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    title: String,
    text: String,
    tags: TagSet,
}

impl Note {
    /// Creates a note from its three parts, stored verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard::{Note, TagSet};
    ///
    /// let note = Note::new("title1", "text1", TagSet::from(["tag1", "tag2"]));
    /// assert_eq!(note.title(), "title1");
    /// assert_eq!(note.text(), "text1");
    /// assert!(note.tags().contains("tag2"));
    /// ```
    pub fn new(title: impl Into<String>, text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            tags,
        }
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's text body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the note's tag set.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {}, {} }}", self.title, self.text, self.tags)
    }
}

/// Builder for constructing `Note` instances field by field.
///
/// Every field has a legal empty default, so `build` always succeeds.
///
/// # Examples
///
/// ```
/// use storyboard::NoteBuilder;
///
/// let note = NoteBuilder::new()
///     .title("title1")
///     .text("text1")
///     .tag("tag1")
///     .tag("tag2")
///     .build();
///
/// assert_eq!(note.title(), "title1");
/// assert_eq!(note.tags().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct NoteBuilder {
    title: String,
    text: String,
    tags: TagSet,
}

impl NoteBuilder {
    /// Creates a new `NoteBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the text body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Adds a single tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag);
        self
    }

    /// Replaces the whole tag set.
    pub fn tags(mut self, tags: TagSet) -> Self {
        self.tags = tags;
        self
    }

    /// Builds the `Note`.
    pub fn build(self) -> Note {
        Note {
            title: self.title,
            text: self.text,
            tags: self.tags,
        }
    }
}
