use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::braced;
use crate::models::{Note, TagSet};

/// An ordered, duplicate-permitting collection of notes.
///
/// Notes keep their insertion order; adding a note equal to one already held
/// creates a distinct entry. Deletion is by structural equality and removes
/// every matching entry. Searches scan the sequence once and return clones
/// of the matching notes in sequence order, so a result stays valid however
/// the storyboard is mutated afterwards.
///
/// # Examples
///
/// ```
/// use storyboard::{Note, Storyboard, TagSet};
///
/// let mut board = Storyboard::new();
/// board.add_note(Note::new("title1", "text1", TagSet::from(["tag1", "tag2"])));
/// board.add_note(Note::new("title2", "text2", TagSet::from(["tag2", "tag3"])));
///
/// let matches = board.search_by_tags(&TagSet::from(["tag2"]));
/// assert_eq!(matches.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Storyboard {
    notes: Vec<Note>,
}

impl Storyboard {
    /// Creates an empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a note to the end of the sequence.
    ///
    /// No deduplication: a note equal to one already held becomes a distinct
    /// entry.
    pub fn add_note(&mut self, note: Note) {
        debug!(title = note.title(), "adding note");
        self.notes.push(note);
    }

    /// Removes every note structurally equal to `note`.
    ///
    /// Duplicates all go in one call; a note with no match is a no-op.
    pub fn delete_note(&mut self, note: &Note) {
        let before = self.notes.len();
        self.notes.retain(|held| held != note);
        debug!(
            title = note.title(),
            removed = before - self.notes.len(),
            "deleted note"
        );
    }

    /// Returns the number of notes currently held, duplicates included.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns `true` if the storyboard holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates over the held notes in sequence order.
    pub fn iter(&self) -> slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Collects a clone of every note satisfying `predicate`, in sequence
    /// order.
    ///
    /// The named searches all delegate to this single scan; callers can use
    /// it directly for ad-hoc queries.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard::{Note, Storyboard, TagSet};
    ///
    /// let mut board = Storyboard::new();
    /// board.add_note(Note::new("title1", "text1", TagSet::new()));
    /// board.add_note(Note::new("title2", "a longer text body", TagSet::new()));
    ///
    /// let long_notes = board.find_all(|note| note.text().len() > 5);
    /// assert_eq!(long_notes.len(), 1);
    /// assert_eq!(long_notes[0].title(), "title2");
    /// ```
    pub fn find_all(&self, predicate: impl Fn(&Note) -> bool) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|note| predicate(note))
            .cloned()
            .collect()
    }

    /// Returns every note whose title exactly equals `title`.
    ///
    /// Case-sensitive, no trimming.
    pub fn search_by_title(&self, title: &str) -> Vec<Note> {
        let matches = self.find_all(|note| note.title() == title);
        debug!(title, matches = matches.len(), "searched by title");
        matches
    }

    /// Returns every note whose text body exactly equals `text`.
    ///
    /// Case-sensitive, no trimming.
    pub fn search_by_text(&self, text: &str) -> Vec<Note> {
        let matches = self.find_all(|note| note.text() == text);
        debug!(text, matches = matches.len(), "searched by text");
        matches
    }

    /// Returns every note whose tag set contains all of `tags`.
    ///
    /// This is a subset test, not equality: a note carrying additional tags
    /// still matches, and an empty query matches every note.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard::{Note, Storyboard, TagSet};
    ///
    /// let mut board = Storyboard::new();
    /// board.add_note(Note::new("title1", "text1", TagSet::from(["tag1", "tag2"])));
    /// board.add_note(Note::new("title2", "text2", TagSet::from(["tag2", "tag3"])));
    ///
    /// assert_eq!(board.search_by_tags(&TagSet::from(["tag1"])).len(), 1);
    /// assert_eq!(board.search_by_tags(&TagSet::from(["tag1", "tag2"])).len(), 1);
    /// assert_eq!(board.search_by_tags(&TagSet::new()).len(), 2);
    /// assert!(board.search_by_tags(&TagSet::from(["tag4"])).is_empty());
    /// ```
    pub fn search_by_tags(&self, tags: &TagSet) -> Vec<Note> {
        let matches = self.find_all(|note| note.tags().is_superset(tags));
        debug!(%tags, matches = matches.len(), "searched by tags");
        matches
    }
}

impl<'a> IntoIterator for &'a Storyboard {
    type Item = &'a Note;
    type IntoIter = slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl fmt::Display for Storyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", braced(&self.notes))
    }
}
