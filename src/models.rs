mod note;
mod tag;

pub use note::{Note, NoteBuilder};
pub use tag::TagSet;
