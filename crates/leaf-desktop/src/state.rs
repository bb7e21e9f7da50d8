//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use leaf_core::{HttpNoteCollection, NotesBoard};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Note cache, draft and busy flag
    pub board: Signal<NotesBoard>,
    /// Remote collection client, if the API URL is valid
    pub collection: Signal<Option<HttpNoteCollection>>,
    /// Configuration error for UI display
    pub config_error: Signal<Option<String>>,
    /// Why the last submit was refused, shown under the form
    pub form_notice: Signal<Option<&'static str>>,
}
