//! In-memory note collection (primarily for tests and offline demos).

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use uuid::Uuid;

use super::NoteCollection;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteInput};

/// A call received by [`InMemoryNoteCollection`], in arrival order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionCall {
    List,
    Create(NoteInput),
    Update(NoteId, NoteInput),
    Delete(NoteId),
}

#[derive(Debug, Default)]
struct MemoryState {
    notes: Vec<Note>,
    calls: Vec<CollectionCall>,
    fail_next: Option<String>,
}

/// Newest-first note store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryNoteCollection {
    state: Mutex<MemoryState>,
}

impl InMemoryNoteCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing notes
    #[must_use]
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                notes,
                ..MemoryState::default()
            }),
        }
    }

    /// Make the next call fail with an API error carrying `message`
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock().fail_next = Some(message.into());
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<CollectionCall> {
        self.lock().calls.clone()
    }

    /// Current server-side contents
    pub fn snapshot(&self) -> Vec<Note> {
        self.lock().notes.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: CollectionCall) -> Result<MutexGuard<'_, MemoryState>> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(message) => Err(Error::Api {
                status: 500,
                message,
            }),
            None => Ok(state),
        }
    }
}

impl NoteCollection for InMemoryNoteCollection {
    async fn list(&self) -> Result<Vec<Note>> {
        let state = self.record(CollectionCall::List)?;
        Ok(state.notes.clone())
    }

    async fn create(&self, input: &NoteInput) -> Result<Note> {
        let mut state = self.record(CollectionCall::Create(input.clone()))?;
        let note = Note {
            id: NoteId::new(Uuid::now_v7().to_string()),
            title: input.title.clone(),
            content: input.content.clone(),
            created_at: Utc::now().to_rfc3339(),
        };
        state.notes.insert(0, note.clone());
        Ok(note)
    }

    async fn update(&self, id: &NoteId, input: &NoteInput) -> Result<Note> {
        let mut state = self.record(CollectionCall::Update(id.clone(), input.clone()))?;
        let note = state
            .notes
            .iter_mut()
            .find(|note| &note.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        note.title.clone_from(&input.title);
        note.content.clone_from(&input.content);
        Ok(note.clone())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let mut state = self.record(CollectionCall::Delete(id.clone()))?;
        let before = state.notes.len();
        state.notes.retain(|note| &note.id != id);
        if state.notes.len() == before {
            return Err(Error::NotFound(id.to_string()));
        }
        Ok(())
    }
}
