use leaf_core::view::{ListView, EMPTY_STATE_MESSAGE};
use leaf_core::NoteCollection;

use crate::commands::common::{format_note_lines, load_board, note_to_list_item, NoteListItem};
use crate::error::CliError;

pub async fn run_list<C: NoteCollection>(collection: &C, as_json: bool) -> Result<(), CliError> {
    let board = load_board(collection).await?;

    if as_json {
        let json_items = board
            .notes()
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
        return Ok(());
    }

    match board.list_view() {
        ListView::Empty => println!("{EMPTY_STATE_MESSAGE}"),
        ListView::Notes(notes) => {
            for line in format_note_lines(notes) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
