//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{NoteForm, NoteList};
use crate::state::AppState;

/// Home view component - the form above the note list
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let config_error = (state.config_error)().unwrap_or_default();

    rsx! {
        div {
            class: "home-container",
            style: "max-width: 896px; margin: 0 auto; padding: 32px 16px;",

            h1 {
                style: "font-size: 36px; font-weight: 700; margin-bottom: 32px;",
                "Leaf Notes"
            }

            if !config_error.is_empty() {
                div {
                    class: "config-error",
                    style: "
                        padding: 12px 16px;
                        margin-bottom: 24px;
                        border-radius: 8px;
                        background: #fee2e2;
                        color: #b91c1c;
                    ",
                    "{config_error}"
                }
            }

            NoteForm {}
            NoteList {}
        }
    }
}
