//! Draft model: the unsaved form state

use super::note::{Note, NoteId, NoteInput};

/// Whether a draft creates a new note or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit,
}

/// Client-held, unsaved title/content pair.
///
/// The draft is in edit-mode exactly when it is bound to an existing note id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
    editing_id: Option<NoteId>,
}

impl Draft {
    /// Create an empty draft in create-mode
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn editing_id(&self) -> Option<&NoteId> {
        self.editing_id.as_ref()
    }

    #[must_use]
    pub const fn mode(&self) -> DraftMode {
        if self.editing_id.is_some() {
            DraftMode::Edit
        } else {
            DraftMode::Create
        }
    }

    /// Whether this draft is bound to the given note
    #[must_use]
    pub fn is_editing_note(&self, id: &NoteId) -> bool {
        self.editing_id.as_ref() == Some(id)
    }

    /// Copy a note into the draft and bind the draft to its id
    pub fn load_from(&mut self, note: &Note) {
        self.title.clone_from(&note.title);
        self.content.clone_from(&note.content);
        self.editing_id = Some(note.id.clone());
    }

    /// Reset to an empty create-mode draft
    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.editing_id = None;
    }

    /// Check if both fields are filled in (whitespace-only counts as empty)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    /// Request body for the current draft
    #[must_use]
    pub fn to_input(&self) -> NoteInput {
        NoteInput::new(self.title.clone(), self.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_note() -> Note {
        Note {
            id: NoteId::new("1"),
            title: "A".to_string(),
            content: "B".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn new_draft_is_empty_create_mode() {
        let draft = Draft::new();
        assert_eq!(draft.mode(), DraftMode::Create);
        assert!(draft.editing_id().is_none());
        assert!(!draft.is_complete());
    }

    #[test]
    fn load_from_binds_to_note() {
        let mut draft = Draft::new();
        draft.load_from(&sample_note());

        assert_eq!(draft.mode(), DraftMode::Edit);
        assert_eq!(draft.editing_id(), Some(&NoteId::new("1")));
        assert_eq!(draft.to_input(), NoteInput::new("A", "B"));
        assert!(draft.is_editing_note(&NoteId::new("1")));
        assert!(!draft.is_editing_note(&NoteId::new("2")));
    }

    #[test]
    fn clear_returns_to_create_mode() {
        let mut draft = Draft::new();
        draft.load_from(&sample_note());
        draft.clear();
        assert_eq!(draft, Draft::new());
    }

    #[test]
    fn whitespace_fields_are_incomplete() {
        let mut draft = Draft::new();
        draft.title = "Title".to_string();
        draft.content = "  \n ".to_string();
        assert!(!draft.is_complete());

        draft.content = "Body".to_string();
        assert!(draft.is_complete());
    }
}
