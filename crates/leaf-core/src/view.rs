//! Presentation state derived from the board, shared by the front ends.

use chrono::Local;

use crate::board::NotesBoard;
use crate::models::{DraftMode, Note};

/// Shown in place of the list when the cache is empty
pub const EMPTY_STATE_MESSAGE: &str = "No notes yet. Create your first note above!";

/// Asked before a delete request is issued
pub const DELETE_CONFIRMATION_PROMPT: &str = "Are you sure you want to delete this note?";

/// What the list area renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView<'a> {
    Empty,
    Notes(&'a [Note]),
}

impl NotesBoard {
    #[must_use]
    pub fn list_view(&self) -> ListView<'_> {
        if self.notes().is_empty() {
            ListView::Empty
        } else {
            ListView::Notes(self.notes())
        }
    }

    #[must_use]
    pub const fn form_heading(&self) -> &'static str {
        match self.mode() {
            DraftMode::Create => "Create New Note",
            DraftMode::Edit => "Edit Note",
        }
    }

    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            return "Saving...";
        }
        match self.mode() {
            DraftMode::Create => "Create Note",
            DraftMode::Edit => "Update Note",
        }
    }

    /// The cancel action only exists in edit-mode
    #[must_use]
    pub const fn shows_cancel(&self) -> bool {
        matches!(self.mode(), DraftMode::Edit)
    }
}

/// Render a note's creation time in local time.
///
/// Falls back to the raw value when the store sent something unparseable.
pub fn format_created_at(note: &Note) -> String {
    note.created_at_utc().map_or_else(
        || note.created_at.clone(),
        |date_time| {
            date_time
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        },
    )
}
