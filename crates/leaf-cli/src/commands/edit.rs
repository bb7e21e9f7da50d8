use leaf_core::{NoteCollection, NoteId};

use crate::commands::common::{
    load_board, non_blank, read_piped_stdin, resolve_note, submitted_id,
};
use crate::error::CliError;

pub async fn run_edit<C: NoteCollection>(
    collection: &C,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> Result<(), CliError> {
    let content = if title.is_none() && content.is_none() {
        Some(read_piped_stdin()?.ok_or(CliError::NothingToEdit)?)
    } else {
        content
    };

    let id = edit_note(collection, id, title.as_deref(), content.as_deref()).await?;
    println!("{id}");
    Ok(())
}

/// Load the collection, bind the draft to the matching note, apply the
/// replacements, and submit. Unchanged drafts are not sent.
pub async fn edit_note<C: NoteCollection>(
    collection: &C,
    note_query: &str,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<NoteId, CliError> {
    let mut board = load_board(collection).await?;
    let note = resolve_note(&board, note_query)?.clone();
    board.begin_edit(&note);

    if let Some(title) = title {
        board.set_title(non_blank(title).ok_or(CliError::EmptyTitle)?);
    }
    if let Some(content) = content {
        board.set_content(non_blank(content).ok_or(CliError::EmptyContent)?);
    }

    if board.draft().title == note.title && board.draft().content == note.content {
        tracing::debug!("Note {} unchanged; skipping update", note.id);
        return Ok(note.id);
    }

    submitted_id(board.submit(collection).await)
}
