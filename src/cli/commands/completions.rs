//! Shell completions generation.
//!
//! `wenprise-templates completions <shell>` prints a completion script for
//! the subcommands and global flags defined in [`Cli`].

use clap::CommandFactory;
use std::io::Write;

use crate::cli::args::{Cli, CompletionsArgs};

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let mut cli = Cli::command();
        let bin_name = cli.get_name().to_string();
        clap_complete::generate(self.args.shell, &mut cli, bin_name, out);
        Ok(CommandResult::success())
    }
}
