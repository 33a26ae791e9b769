//! Shared textual rendering for collections.
//!
//! Tag sets, search results, and whole storyboards all print with the same
//! brace-and-space convention: `{ v1 v2 ... }`. This module holds the one
//! formatting routine behind that convention so the output stays identical
//! across every type that renders a collection.

use std::fmt;

/// Adapter returned by [`braced`] that renders its items as `{ v1 v2 ... }`.
///
/// The wrapped iterator is cloned on every [`fmt::Display`] call, so a
/// `Braced` value can be formatted more than once.
pub struct Braced<I> {
    items: I,
}

/// Wraps an iterator of displayable items so it renders as `{ v1 v2 ... }`.
///
/// Each element is written with its own `Display` impl followed by a single
/// space; an empty iterator renders as `{ }`.
///
/// # Examples
///
/// ```
/// use storyboard::display::braced;
///
/// assert_eq!(braced(["a", "b"]).to_string(), "{ a b }");
/// assert_eq!(braced(Vec::<&str>::new()).to_string(), "{ }");
/// ```
pub fn braced<I>(items: I) -> Braced<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    Braced { items }
}

impl<I> fmt::Display for Braced<I>
where
    I: IntoIterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for item in self.items.clone() {
            write!(f, "{item} ")?;
        }
        write!(f, "}}")
    }
}
