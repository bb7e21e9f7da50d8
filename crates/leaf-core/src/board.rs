//! Notes board: the editor form plus the note list.
//!
//! The board keeps a local cache of the remote collection and a single draft.
//! The cache is replaced wholesale on load and patched by id after each
//! successful mutation; it is never treated as authoritative otherwise.
//!
//! Mutations are split into a synchronous prepare step, the network call, and
//! a synchronous apply step, so UI front ends never hold the board across an
//! await. [`NotesBoard::load`], [`NotesBoard::submit`] and
//! [`NotesBoard::remove`] compose the steps for callers that own the board.
//!
//! Failures are logged and swallowed here; callers only see an outcome.

use crate::error::Result;
use crate::models::{Draft, DraftMode, Note, NoteId, NoteInput};
use crate::remote::NoteCollection;

/// Interactive yes/no confirmation, asked before a delete is issued
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Cache replaced with this many notes
    Loaded(usize),
    /// Request failed; previous cache kept
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(NoteId),
    Updated(NoteId),
    /// A submit is already in flight; nothing was sent
    Busy,
    /// Title or content is empty; nothing was sent
    Incomplete,
    /// Request failed; draft and cache unchanged
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Confirmation declined; nothing was sent
    Declined,
    /// Request failed; cache unchanged
    Failed,
}

impl SubmitOutcome {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated(_))
    }
}

/// Why a submit could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    Busy,
    Incomplete,
}

impl SubmitBlocked {
    /// Short explanation a front end can show next to the form
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Busy => "A save is already in progress",
            Self::Incomplete => "Title and content cannot be blank",
        }
    }
}

impl From<SubmitBlocked> for SubmitOutcome {
    fn from(value: SubmitBlocked) -> Self {
        match value {
            SubmitBlocked::Busy => Self::Busy,
            SubmitBlocked::Incomplete => Self::Incomplete,
        }
    }
}

/// A submit captured from the draft at the moment it was issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(NoteInput),
    Update { id: NoteId, input: NoteInput },
}

impl SubmitRequest {
    /// Issue the request against a collection
    pub async fn send<C: NoteCollection>(&self, collection: &C) -> Result<Note> {
        match self {
            Self::Create(input) => collection.create(input).await,
            Self::Update { id, input } => collection.update(id, input).await,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesBoard {
    notes: Vec<Note>,
    draft: Draft,
    busy: bool,
}

impl NotesBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached notes, in display order
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    #[must_use]
    pub fn find(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    #[must_use]
    pub const fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub const fn mode(&self) -> DraftMode {
        self.draft.mode()
    }

    /// True while a submit is in flight
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Load a note into the draft for editing. Repeated calls overwrite it.
    pub fn begin_edit(&mut self, note: &Note) {
        tracing::debug!("Editing note {}", note.id);
        self.draft.load_from(note);
    }

    /// Drop the draft and leave edit-mode
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    /// Replace the cache with a load result
    pub fn apply_loaded(&mut self, result: Result<Vec<Note>>) -> LoadOutcome {
        match result {
            Ok(notes) => {
                tracing::info!("Loaded {} notes", notes.len());
                let count = notes.len();
                self.notes = notes;
                LoadOutcome::Loaded(count)
            }
            Err(error) => {
                tracing::error!("Failed to fetch notes: {}", error);
                LoadOutcome::Failed
            }
        }
    }

    /// Capture the draft as a request and mark the board busy.
    pub fn prepare_submit(&mut self) -> std::result::Result<SubmitRequest, SubmitBlocked> {
        if self.busy {
            return Err(SubmitBlocked::Busy);
        }
        if !self.draft.is_complete() {
            return Err(SubmitBlocked::Incomplete);
        }

        let input = self.draft.to_input();
        let request = match self.draft.editing_id() {
            Some(id) => SubmitRequest::Update {
                id: id.clone(),
                input,
            },
            None => SubmitRequest::Create(input),
        };
        self.busy = true;
        Ok(request)
    }

    /// Apply the response to a prepared submit and clear the busy flag.
    pub fn apply_submit(&mut self, request: SubmitRequest, result: Result<Note>) -> SubmitOutcome {
        self.busy = false;

        let note = match result {
            Ok(note) => note,
            Err(error) => {
                tracing::error!("Failed to save note: {}", error);
                return SubmitOutcome::Failed;
            }
        };

        let outcome = match request {
            SubmitRequest::Create(_) => {
                tracing::info!("Created note {}", note.id);
                let id = note.id.clone();
                self.notes.insert(0, note);
                SubmitOutcome::Created(id)
            }
            SubmitRequest::Update { id, .. } => {
                if let Some(slot) = self.notes.iter_mut().find(|cached| cached.id == id) {
                    *slot = note;
                    tracing::info!("Updated note {}", id);
                } else {
                    tracing::warn!("Updated note {} is no longer cached; skipping", id);
                }
                SubmitOutcome::Updated(id)
            }
        };

        self.draft.clear();
        outcome
    }

    /// Apply the result of a delete request for `id`.
    ///
    /// A draft bound to the deleted note is cleared with it.
    pub fn apply_removed(&mut self, id: &NoteId, result: Result<()>) -> RemoveOutcome {
        if let Err(error) = result {
            tracing::error!("Failed to delete note: {}", error);
            return RemoveOutcome::Failed;
        }

        self.notes.retain(|note| &note.id != id);
        if self.draft.is_editing_note(id) {
            tracing::debug!("Draft was bound to deleted note {}; clearing", id);
            self.draft.clear();
        }
        tracing::info!("Deleted note {}", id);
        RemoveOutcome::Removed
    }

    /// Fetch the full collection into the cache
    pub async fn load<C: NoteCollection>(&mut self, collection: &C) -> LoadOutcome {
        let result = collection.list().await;
        self.apply_loaded(result)
    }

    /// Submit the draft as a create or update
    pub async fn submit<C: NoteCollection>(&mut self, collection: &C) -> SubmitOutcome {
        let request = match self.prepare_submit() {
            Ok(request) => request,
            Err(blocked) => return blocked.into(),
        };
        let result = request.send(collection).await;
        self.apply_submit(request, result)
    }

    /// Ask for confirmation, then delete `id`
    pub async fn remove<C, F>(
        &mut self,
        collection: &C,
        id: &NoteId,
        mut confirm: F,
    ) -> RemoveOutcome
    where
        C: NoteCollection,
        F: Confirm,
    {
        if !confirm.confirm(crate::view::DELETE_CONFIRMATION_PROMPT) {
            return RemoveOutcome::Declined;
        }
        let result = collection.delete(id).await;
        self.apply_removed(id, result)
    }
}
