use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "leaf")]
#[command(about = "Create, edit and delete notes on a Leaf notes server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the notes API (overrides LEAF_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all notes, newest first
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Note content (read from stdin when omitted)
        content: Vec<String>,
    },
    /// Edit an existing note
    Edit {
        /// Note ID or unique ID prefix
        id: String,
        /// Replacement title
        #[arg(long)]
        title: Option<String>,
        /// Replacement content (read from stdin when neither flag is given)
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID or unique ID prefix
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
