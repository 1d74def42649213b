//! Shell completions command
//!
//! The shell is a typed [`clap_complete::Shell`] value, so unsupported shells
//! are rejected by argument parsing before this command runs.

use clap::CommandFactory;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::Result;

/// Generate completions for the selected shell on stdout
pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout().lock());
    Ok(())
}
