//! Main application component

use dioxus::prelude::*;

use leaf_core::{ClientConfig, HttpNoteCollection, NotesBoard};

use crate::actions::load_notes;
use crate::state::AppState;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    let board = use_signal(NotesBoard::new);

    // Build the API client once; a bad LEAF_API_URL is reported in the view
    let client = use_hook(|| {
        ClientConfig::from_env()
            .and_then(|config| HttpNoteCollection::new(&config))
            .map_err(|e| {
                tracing::error!("Failed to configure notes API: {}", e);
                e.to_string()
            })
    });
    let collection = use_signal(|| client.clone().ok());
    let config_error = use_signal(|| client.clone().err());
    let form_notice = use_signal(|| None);

    let state = use_context_provider(|| AppState {
        board,
        collection,
        config_error,
        form_notice,
    });

    // Load the collection once the client is available
    use_effect(move || load_notes(state));

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                background: #f1f5f9;
                color: #1e293b;
            ",
            Home {}
        }
    }
}
