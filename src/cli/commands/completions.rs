//! Completions command - print shell completion scripts

use crate::cli::args::Cli;
use crate::error::TailwindResult;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io;

/// Write completions for `shell` to stdout
pub fn execute(shell: Shell) -> TailwindResult<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
