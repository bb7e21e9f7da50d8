//! Note list component

use dioxus::prelude::*;

use leaf_core::view::{ListView, EMPTY_STATE_MESSAGE};

use super::NoteCard;
use crate::state::AppState;

/// All cached notes, or the empty-state message
#[component]
pub fn NoteList() -> Element {
    let state = use_context::<AppState>();
    let board = state.board.read();

    let body = match board.list_view() {
        ListView::Empty => rsx! {
            div {
                class: "empty-state",
                style: "
                    background: #ffffff;
                    border-radius: 8px;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    padding: 32px;
                    text-align: center;
                    color: #64748b;
                ",
                "{EMPTY_STATE_MESSAGE}"
            }
        },
        ListView::Notes(notes) => rsx! {
            for note in notes {
                {
                    let note_id = note.id.clone();
                    rsx! {
                        NoteCard { key: "{note_id}", note: note.clone() }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "note-list",
            style: "display: flex; flex-direction: column; gap: 16px;",

            h2 {
                style: "font-size: 24px; font-weight: 600; margin: 0;",
                "All Notes"
            }

            {body}
        }
    }
}
