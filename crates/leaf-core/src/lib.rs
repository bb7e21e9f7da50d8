//! leaf-core - Core library for Leaf
//!
//! This crate contains the note models, the remote collection client, and the
//! board state shared by the Leaf front ends (desktop and CLI).

pub mod board;
pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod util;
pub mod view;

pub use board::{
    Confirm, LoadOutcome, NotesBoard, RemoveOutcome, SubmitBlocked, SubmitOutcome, SubmitRequest,
};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{Draft, DraftMode, Note, NoteId, NoteInput};
pub use remote::{HttpNoteCollection, InMemoryNoteCollection, NoteCollection};
