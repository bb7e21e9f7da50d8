//! Note card component

use dioxus::prelude::*;

use leaf_core::view::format_created_at;
use leaf_core::Note;

use crate::actions::{begin_edit, delete_note};
use crate::state::AppState;

/// A single note with its edit and delete actions
#[component]
pub fn NoteCard(note: Note) -> Element {
    let state = use_context::<AppState>();

    let title = note.title.clone();
    let content = note.content.clone();
    let created = format_created_at(&note);
    let delete_id = note.id.clone();

    rsx! {
        div {
            class: "note-card",
            style: "
                background: #ffffff;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                padding: 24px;
            ",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 8px;",

                h3 {
                    style: "font-size: 20px; font-weight: 600; margin: 0;",
                    "{title}"
                }

                div {
                    style: "display: flex; gap: 8px;",

                    button {
                        style: "
                            padding: 4px 12px;
                            border: none;
                            border-radius: 4px;
                            background: #dbeafe;
                            color: #1d4ed8;
                            cursor: pointer;
                        ",
                        onclick: move |_| begin_edit(state, &note),
                        "Edit"
                    }
                    button {
                        style: "
                            padding: 4px 12px;
                            border: none;
                            border-radius: 4px;
                            background: #fee2e2;
                            color: #b91c1c;
                            cursor: pointer;
                        ",
                        onclick: move |_| delete_note(state, delete_id.clone()),
                        "Delete"
                    }
                }
            }

            p {
                style: "white-space: pre-wrap; color: #475569; margin: 0 0 12px 0;",
                "{content}"
            }
            p {
                style: "font-size: 14px; color: #94a3b8; margin: 0;",
                "{created}"
            }
        }
    }
}
