use leaf_core::remote::CollectionCall;
use leaf_core::{InMemoryNoteCollection, Note, NoteId, NoteInput, NotesBoard, SubmitOutcome};
use pretty_assertions::assert_eq;

use crate::cli::CompletionShell;
use crate::commands::add::add_note;
use crate::commands::common::{
    ask, format_note_lines, is_affirmative, load_board, non_blank, normalize_note_identifier,
    note_to_list_item, resolve_note, submitted_id, truncate_line,
};
use crate::commands::completions::write_completions;
use crate::commands::delete::delete_note;
use crate::commands::edit::edit_note;
use crate::error::CliError;

fn note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        content: content.to_string(),
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

fn board_with(notes: Vec<Note>) -> NotesBoard {
    let mut board = NotesBoard::new();
    board.apply_loaded(Ok(notes));
    board
}

#[test]
fn non_blank_keeps_text_verbatim_and_rejects_blank() {
    assert_eq!(non_blank("  hello  "), Some("  hello  "));
    assert_eq!(non_blank(" \n\t "), None);
}

#[test]
fn normalize_note_identifier_rejects_blank() {
    assert!(matches!(
        normalize_note_identifier("   "),
        Err(CliError::EmptyNoteId)
    ));
    assert_eq!(normalize_note_identifier(" abc ").unwrap(), "abc");
}

#[test]
fn affirmative_answers() {
    assert!(is_affirmative("y\n"));
    assert!(is_affirmative(" YES "));
    assert!(!is_affirmative("\n"));
    assert!(!is_affirmative("nope"));
}

#[test]
fn ask_writes_prompt_and_reads_one_line() {
    let mut input = std::io::Cursor::new("yes\nignored\n");
    let mut output = Vec::new();

    let answer = ask("Delete?", &mut input, &mut output).unwrap();

    assert_eq!(answer, "yes\n");
    assert_eq!(String::from_utf8(output).unwrap(), "Delete? [y/N] ");
}

#[test]
fn truncate_line_uses_first_line_with_ellipsis() {
    assert_eq!(truncate_line("Short\nsecond line", 20), "Short");
    assert_eq!(
        truncate_line("This is a very long sentence that should be shortened", 20),
        "This is a very lo..."
    );
}

#[test]
fn format_note_lines_include_id_and_title() {
    let lines = format_note_lines(&[note("0192f0c4-aaaa-7bbb", "Groceries", "milk")]);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("0192f0c4-aaaa"));
    assert!(lines[0].contains("Groceries"));
}

#[test]
fn list_item_keeps_raw_and_local_timestamps() {
    let item = note_to_list_item(&note("1", "A", "B"));
    assert_eq!(item.id, "1");
    assert_eq!(item.created_at, "2024-01-01T00:00:00Z");
    assert!(!item.created_at_local.is_empty());
}

#[test]
fn resolve_note_matches_exact_id_and_unique_prefix() {
    let board = board_with(vec![note("abc123", "A", "a"), note("abd456", "B", "b")]);

    assert_eq!(resolve_note(&board, "abc123").unwrap().title, "A");
    assert_eq!(resolve_note(&board, "abd").unwrap().title, "B");
    assert!(matches!(
        resolve_note(&board, "ab"),
        Err(CliError::AmbiguousNoteId(_))
    ));
    assert!(matches!(
        resolve_note(&board, "zzz"),
        Err(CliError::NoteNotFound(_))
    ));
}

#[test]
fn completions_mention_binary_name_and_subcommands() {
    for shell in [CompletionShell::Bash, CompletionShell::Zsh, CompletionShell::Fish] {
        let mut buffer = Vec::new();
        write_completions(shell, &mut buffer).unwrap();
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("leaf"), "{shell:?}");
        assert!(script.contains("delete"), "{shell:?}");
    }
}

#[test]
fn incomplete_submit_names_both_fields() {
    let error = submitted_id(SubmitOutcome::Incomplete).unwrap_err();
    assert!(matches!(error, CliError::IncompleteNote));
    assert_eq!(error.to_string(), "Note title and content cannot be empty");
}

#[tokio::test(flavor = "current_thread")]
async fn add_note_creates_remotely() {
    let store = InMemoryNoteCollection::new();

    let id = add_note(&store, " Title ", "Body").await.unwrap();

    let remote = store.snapshot();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].id, id);
    assert_eq!(
        store.calls(),
        vec![CollectionCall::Create(NoteInput::new(" Title ", "Body"))]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn add_note_sends_indentation_and_trailing_newlines_untouched() {
    let store = InMemoryNoteCollection::new();

    add_note(&store, "T", "    indented code\n").await.unwrap();

    assert_eq!(
        store.calls(),
        vec![CollectionCall::Create(NoteInput::new("T", "    indented code\n"))]
    );
    assert_eq!(store.snapshot()[0].content, "    indented code\n");
}

#[tokio::test(flavor = "current_thread")]
async fn add_note_rejects_blank_fields_without_a_request() {
    let store = InMemoryNoteCollection::new();

    assert!(matches!(
        add_note(&store, "  ", "Body").await,
        Err(CliError::EmptyTitle)
    ));
    assert!(matches!(
        add_note(&store, "Title", "").await,
        Err(CliError::EmptyContent)
    ));
    assert!(store.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn edit_note_updates_only_given_fields() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);

    let id = edit_note(&store, "1", Some("A2"), None).await.unwrap();

    assert_eq!(id, NoteId::new("1"));
    assert_eq!(
        store.calls(),
        vec![
            CollectionCall::List,
            CollectionCall::Update(NoteId::new("1"), NoteInput::new("A2", "B")),
        ]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn edit_note_sends_replacement_content_verbatim() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);

    edit_note(&store, "1", None, Some("  - item\n")).await.unwrap();

    assert_eq!(
        store.calls(),
        vec![
            CollectionCall::List,
            CollectionCall::Update(NoteId::new("1"), NoteInput::new("A", "  - item\n")),
        ]
    );
}

#[tokio::test(flavor = "current_thread")]
async fn edit_note_rejects_blank_replacement_without_a_request() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);

    assert!(matches!(
        edit_note(&store, "1", Some("   "), None).await,
        Err(CliError::EmptyTitle)
    ));
    assert_eq!(store.calls(), vec![CollectionCall::List]);
}

#[tokio::test(flavor = "current_thread")]
async fn edit_note_skips_unchanged_drafts() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);

    edit_note(&store, "1", Some("A"), Some("B")).await.unwrap();
    assert_eq!(store.calls(), vec![CollectionCall::List]);
}

#[tokio::test(flavor = "current_thread")]
async fn load_failures_abort_before_any_mutation() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);
    assert_eq!(load_board(&store).await.unwrap().notes().len(), 1);

    store.fail_next("list down");
    assert!(matches!(
        edit_note(&store, "1", Some("A2"), None).await,
        Err(CliError::LoadFailed)
    ));
    assert_eq!(store.snapshot(), vec![note("1", "A", "B")]);
}

#[tokio::test(flavor = "current_thread")]
async fn delete_note_declined_sends_nothing() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B")]);

    let deleted = delete_note(&store, "1", |_: &str| false).await.unwrap();

    assert_eq!(deleted, None);
    assert_eq!(store.calls(), vec![CollectionCall::List]);
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn delete_note_confirmed_removes_remotely() {
    let store = InMemoryNoteCollection::with_notes(vec![note("1", "A", "B"), note("2", "C", "D")]);

    let deleted = delete_note(&store, "2", |_: &str| true).await.unwrap();

    assert_eq!(deleted, Some(NoteId::new("2")));
    assert_eq!(store.snapshot(), vec![note("1", "A", "B")]);
}
