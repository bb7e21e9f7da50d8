//! Remote note collection
//!
//! The store behind the notes API is opaque; the client only reaches it
//! through the four operations of [`NoteCollection`].

mod http;
mod memory;

use std::future::Future;

pub use http::HttpNoteCollection;
pub use memory::{CollectionCall, InMemoryNoteCollection};

use crate::error::Result;
use crate::models::{Note, NoteId, NoteInput};

/// Trait for the remote note collection
pub trait NoteCollection {
    /// Fetch the full collection
    fn list(&self) -> impl Future<Output = Result<Vec<Note>>> + Send;

    /// Create a note; the store assigns `id` and `created_at`
    fn create(&self, input: &NoteInput) -> impl Future<Output = Result<Note>> + Send;

    /// Replace title and content of an existing note
    fn update(&self, id: &NoteId, input: &NoteInput) -> impl Future<Output = Result<Note>> + Send;

    /// Delete a note
    fn delete(&self, id: &NoteId) -> impl Future<Output = Result<()>> + Send;
}
