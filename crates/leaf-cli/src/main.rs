//! Leaf CLI - manage notes on a Leaf notes server from the terminal.

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::common::open_collection;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::run_edit;
use crate::commands::list::run_list;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("leaf=warn".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => {
            let collection = open_collection(cli.api_url)?;
            run_list(&collection, json).await?;
        }
        Commands::Add { title, content } => {
            let collection = open_collection(cli.api_url)?;
            run_add(&collection, &title, &content).await?;
        }
        Commands::Edit { id, title, content } => {
            let collection = open_collection(cli.api_url)?;
            run_edit(&collection, &id, title, content).await?;
        }
        Commands::Delete { id, yes } => {
            let collection = open_collection(cli.api_url)?;
            run_delete(&collection, &id, yes).await?;
        }
        Commands::Completions { shell, output } => {
            run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
