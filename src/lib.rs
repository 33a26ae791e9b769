pub mod display;
pub mod models;
pub mod storyboard;

pub use models::{Note, NoteBuilder, TagSet};
pub use storyboard::Storyboard;
