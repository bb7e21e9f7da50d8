use leaf_core::{NoteCollection, NoteId, NotesBoard};

use crate::commands::common::{non_blank, read_piped_stdin, submitted_id};
use crate::error::CliError;

pub async fn run_add<C: NoteCollection>(
    collection: &C,
    title: &str,
    content_parts: &[String],
) -> Result<(), CliError> {
    let joined = content_parts.join(" ");
    let content = match non_blank(&joined) {
        Some(content) => content.to_string(),
        None => read_piped_stdin()?.ok_or(CliError::EmptyContent)?,
    };

    let id = add_note(collection, title, &content).await?;
    println!("{id}");
    Ok(())
}

/// Create a note through a fresh board.
///
/// Creating does not need the current collection, so nothing is loaded first.
/// Title and content are sent exactly as given.
pub async fn add_note<C: NoteCollection>(
    collection: &C,
    title: &str,
    content: &str,
) -> Result<NoteId, CliError> {
    let title = non_blank(title).ok_or(CliError::EmptyTitle)?;
    let content = non_blank(content).ok_or(CliError::EmptyContent)?;

    let mut board = NotesBoard::new();
    board.set_title(title);
    board.set_content(content);
    submitted_id(board.submit(collection).await)
}
