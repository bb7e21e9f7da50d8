//! Board actions that talk to the remote collection.
//!
//! Each action mutates the board synchronously, releases it, runs the request
//! in a spawned task, and applies the response when it resolves. The board is
//! never held across an await.

use dioxus::prelude::*;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use leaf_core::view::DELETE_CONFIRMATION_PROMPT;
use leaf_core::{Note, NoteCollection, NoteId};

use crate::state::AppState;

const SCROLL_TO_FORM_JS: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Replace the cache with the server's collection
pub fn load_notes(state: AppState) {
    let Some(collection) = state.collection.read().clone() else {
        tracing::warn!("Notes API not configured; skipping load");
        return;
    };
    let mut board = state.board;

    spawn(async move {
        let result = collection.list().await;
        board.write().apply_loaded(result);
    });
}

/// Send the draft as a create or update
pub fn submit_draft(state: AppState) {
    let Some(collection) = state.collection.read().clone() else {
        tracing::warn!("Notes API not configured; cannot save");
        return;
    };
    let mut board = state.board;
    let mut form_notice = state.form_notice;

    let request = match board.write().prepare_submit() {
        Ok(request) => request,
        Err(blocked) => {
            tracing::warn!("Submit refused: {}", blocked.reason());
            form_notice.set(Some(blocked.reason()));
            return;
        }
    };
    form_notice.set(None);

    spawn(async move {
        let result = request.send(&collection).await;
        board.write().apply_submit(request, result);
    });
}

/// Load a note into the form and bring the form into view
pub fn begin_edit(state: AppState, note: &Note) {
    let mut board = state.board;
    board.write().begin_edit(note);
    let _ = document::eval(SCROLL_TO_FORM_JS);
}

pub fn cancel_edit(state: AppState) {
    let mut board = state.board;
    let mut form_notice = state.form_notice;
    board.write().cancel_edit();
    form_notice.set(None);
}

/// Ask for confirmation, then delete the note remotely and locally
pub fn delete_note(state: AppState, id: NoteId) {
    let Some(collection) = state.collection.read().clone() else {
        tracing::warn!("Notes API not configured; cannot delete");
        return;
    };
    let mut board = state.board;

    spawn(async move {
        if !confirm_delete().await {
            tracing::debug!("Delete of note {} declined", id);
            return;
        }
        let result = collection.delete(&id).await;
        board.write().apply_removed(&id, result);
    });
}

async fn confirm_delete() -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Delete note")
        .set_description(DELETE_CONFIRMATION_PROMPT)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    answer == MessageDialogResult::Yes
}
