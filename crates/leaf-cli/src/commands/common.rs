use std::io::{self, BufRead, IsTerminal, Read, Write};

use leaf_core::view::format_created_at;
use leaf_core::{
    ClientConfig, Confirm, HttpNoteCollection, LoadOutcome, Note, NoteCollection, NotesBoard,
    SubmitOutcome,
};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
    pub created_at_local: String,
}

/// Confirmation prompt answered on the terminal.
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        if !io::stdin().is_terminal() {
            eprintln!("{prompt} Refusing without a terminal; pass --yes to confirm.");
            return false;
        }

        match ask(prompt, &mut io::stdin().lock(), &mut io::stderr()) {
            Ok(answer) => is_affirmative(&answer),
            Err(error) => {
                tracing::warn!("Could not read confirmation: {}", error);
                false
            }
        }
    }
}

/// Write the prompt, flush it, and read one line of answer
pub fn ask<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{prompt} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer)
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub fn open_collection(api_url: Option<String>) -> Result<HttpNoteCollection, CliError> {
    let config = ClientConfig::resolve(api_url)?;
    tracing::debug!("Using notes API at {}", config.api_base_url);
    Ok(HttpNoteCollection::new(&config)?)
}

/// Load the full collection into a fresh board
pub async fn load_board<C: NoteCollection>(collection: &C) -> Result<NotesBoard, CliError> {
    let mut board = NotesBoard::new();
    match board.load(collection).await {
        LoadOutcome::Loaded(_) => Ok(board),
        LoadOutcome::Failed => Err(CliError::LoadFailed),
    }
}

/// Map a submit outcome to the affected note id
pub fn submitted_id(outcome: SubmitOutcome) -> Result<leaf_core::NoteId, CliError> {
    match outcome {
        SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => Ok(id),
        SubmitOutcome::Incomplete => Err(CliError::IncompleteNote),
        SubmitOutcome::Busy | SubmitOutcome::Failed => Err(CliError::SaveFailed),
    }
}

/// Find a cached note by exact id or unique id prefix
pub fn resolve_note<'a>(board: &'a NotesBoard, note_query: &str) -> Result<&'a Note, CliError> {
    let note_query = normalize_note_identifier(note_query)?;

    if let Some(note) = board.find(&note_query.as_str().into()) {
        return Ok(note);
    }

    let matching = board
        .notes()
        .iter()
        .filter(|note| note.id.as_str().starts_with(&note_query))
        .collect::<Vec<_>>();

    match matching.as_slice() {
        [] => Err(CliError::NoteNotFound(note_query)),
        [note] => Ok(*note),
        _ => {
            let options = matching
                .iter()
                .take(3)
                .map(|note| short_id(note))
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousNoteId(format!(
                "ID prefix '{note_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let id = short_id(note);
            let title = truncate_line(&note.title, 40);
            let created = format_created_at(note);
            format!("{id:<13}  {title:<40}  {created}")
        })
        .collect()
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.to_string(),
        title: note.title.clone(),
        content: note.content.clone(),
        created_at: note.created_at.clone(),
        created_at_local: format_created_at(note),
    }
}

pub fn short_id(note: &Note) -> String {
    note.id.as_str().chars().take(13).collect()
}

/// First line of `text`, whitespace-collapsed and cut to `max_chars`
pub fn truncate_line(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}

/// `text` unchanged, or `None` when it is blank
pub fn non_blank(text: &str) -> Option<&str> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

pub fn normalize_note_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyNoteId)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(non_blank(&buffer).map(str::to_string))
}
