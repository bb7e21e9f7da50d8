use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] leaf_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("Note title cannot be empty")]
    EmptyTitle,
    #[error("No note content provided")]
    EmptyContent,
    #[error("Note title and content cannot be empty")]
    IncompleteNote,
    #[error("Note ID cannot be empty")]
    EmptyNoteId,
    #[error("Nothing to change: pass --title, --content, or pipe new content on stdin")]
    NothingToEdit,
    #[error("Note not found for id/prefix: {0}")]
    NoteNotFound(String),
    #[error("{0}")]
    AmbiguousNoteId(String),
    #[error("Could not load notes from the server")]
    LoadFailed,
    #[error("Could not save the note")]
    SaveFailed,
    #[error("Could not delete the note")]
    DeleteFailed,
}
