use leaf_core::{Confirm, NoteCollection, NoteId, RemoveOutcome};

use crate::commands::common::{load_board, resolve_note, TerminalConfirm};
use crate::error::CliError;

pub async fn run_delete<C: NoteCollection>(
    collection: &C,
    id: &str,
    assume_yes: bool,
) -> Result<(), CliError> {
    match delete_note(collection, id, TerminalConfirm::new(assume_yes)).await? {
        Some(id) => println!("{id}"),
        None => eprintln!("Delete cancelled"),
    }
    Ok(())
}

/// Delete the matching note after confirmation.
///
/// Returns `None` when the confirmation was declined.
pub async fn delete_note<C, F>(
    collection: &C,
    note_query: &str,
    confirm: F,
) -> Result<Option<NoteId>, CliError>
where
    C: NoteCollection,
    F: Confirm,
{
    let mut board = load_board(collection).await?;
    let id = resolve_note(&board, note_query)?.id.clone();

    match board.remove(collection, &id, confirm).await {
        RemoveOutcome::Removed => Ok(Some(id)),
        RemoveOutcome::Declined => Ok(None),
        RemoveOutcome::Failed => Err(CliError::DeleteFailed),
    }
}
