use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    match output_path {
        Some(path) => {
            let mut file = File::create(path)?;
            write_completions(shell, &mut file)?;
            println!("{}", path.display());
        }
        None => write_completions(shell, &mut io::stdout().lock())?,
    }
    Ok(())
}

/// Write the completion script for `shell`, named after the `leaf` command
pub fn write_completions<W: Write>(shell: CompletionShell, out: &mut W) -> io::Result<()> {
    let mut command = Cli::command();
    let bin_name = command.get_name().to_string();
    clap_complete::generate(Shell::from(shell), &mut command, bin_name, out);
    out.flush()
}
