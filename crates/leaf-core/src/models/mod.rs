//! Data models for Leaf

mod draft;
mod note;

pub use draft::{Draft, DraftMode};
pub use note::{Note, NoteId, NoteInput};
