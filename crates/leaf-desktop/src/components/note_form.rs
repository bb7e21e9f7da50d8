//! Note form component

use dioxus::prelude::*;

use crate::actions::{cancel_edit, submit_draft};
use crate::state::AppState;

const INPUT_STYLE: &str = "
    width: 100%;
    box-sizing: border-box;
    padding: 8px 16px;
    border: 1px solid #cbd5e1;
    border-radius: 6px;
    font-family: inherit;
    font-size: inherit;
";

/// Create/edit form bound to the board's draft
#[component]
pub fn NoteForm() -> Element {
    let state = use_context::<AppState>();
    let mut board = state.board;

    let (heading, submit_label, shows_cancel, busy, title, content) = {
        let current = board.read();
        (
            current.form_heading(),
            current.submit_label(),
            current.shows_cancel(),
            current.is_busy(),
            current.draft().title.clone(),
            current.draft().content.clone(),
        )
    };
    let notice = (*state.form_notice.read()).unwrap_or_default();

    rsx! {
        div {
            class: "note-form",
            style: "
                background: #ffffff;
                border-radius: 8px;
                box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                padding: 24px;
                margin-bottom: 32px;
            ",

            h2 {
                style: "font-size: 24px; font-weight: 600; margin: 0 0 16px 0;",
                "{heading}"
            }

            form {
                style: "display: flex; flex-direction: column; gap: 16px;",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    submit_draft(state);
                },

                div {
                    label {
                        r#for: "title",
                        style: "display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;",
                        "Title"
                    }
                    input {
                        id: "title",
                        r#type: "text",
                        style: INPUT_STYLE,
                        placeholder: "Enter note title",
                        required: true,
                        value: "{title}",
                        oninput: move |evt: FormEvent| board.write().set_title(evt.value()),
                    }
                }

                div {
                    label {
                        r#for: "content",
                        style: "display: block; font-size: 14px; font-weight: 500; margin-bottom: 8px;",
                        "Content"
                    }
                    textarea {
                        id: "content",
                        rows: "4",
                        style: "{INPUT_STYLE} resize: none;",
                        placeholder: "Enter note content",
                        required: true,
                        value: "{content}",
                        oninput: move |evt: FormEvent| board.write().set_content(evt.value()),
                    }
                }

                if !notice.is_empty() {
                    p {
                        class: "form-notice",
                        style: "margin: 0; font-size: 14px; color: #b91c1c;",
                        "{notice}"
                    }
                }

                div {
                    style: "display: flex; gap: 8px;",

                    button {
                        r#type: "submit",
                        disabled: busy,
                        style: "
                            padding: 8px 24px;
                            border: none;
                            border-radius: 6px;
                            background: #2563eb;
                            color: #ffffff;
                            font-weight: 500;
                            cursor: pointer;
                        ",
                        "{submit_label}"
                    }

                    if shows_cancel {
                        button {
                            r#type: "button",
                            style: "
                                padding: 8px 24px;
                                border: none;
                                border-radius: 6px;
                                background: #e2e8f0;
                                color: #334155;
                                font-weight: 500;
                                cursor: pointer;
                            ",
                            onclick: move |_| cancel_edit(state),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
