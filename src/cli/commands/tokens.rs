//! Path token commands.
//!
//! Provides `wenprise-templates tokens`, `tokenize` and `untokenize`, mostly
//! useful for checking what a cache written on another host will expand to.

use console::style;
use std::io::Write;

use crate::cli::args::PathArgs;
use crate::config::LoaderConfig;
use crate::tokens::{tokenize, unresolved_tokens, untokenize, PathTokens};

use super::dispatcher::{Command, CommandResult};

/// The tokens command implementation.
pub struct TokensCommand {
    tokens: PathTokens,
}

impl TokensCommand {
    /// Create a new tokens command.
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            tokens: config.build_loader().path_tokens(),
        }
    }
}

impl Command for TokensCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        if self.tokens.is_empty() {
            writeln!(out, "No path tokens defined")?;
            return Ok(CommandResult::success());
        }

        let width = self.tokens.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for token in self.tokens.iter() {
            writeln!(
                out,
                "{:width$}  {}",
                style(&token.name).bold(),
                token.value,
                width = width
            )?;
        }
        Ok(CommandResult::success())
    }
}

/// The tokenize command implementation.
pub struct TokenizeCommand {
    tokens: PathTokens,
    args: PathArgs,
}

impl TokenizeCommand {
    /// Create a new tokenize command.
    pub fn new(config: &LoaderConfig, args: PathArgs) -> Self {
        Self {
            tokens: config.build_loader().path_tokens(),
            args,
        }
    }
}

impl Command for TokenizeCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        writeln!(out, "{}", tokenize(&self.args.path, &self.tokens))?;
        Ok(CommandResult::success())
    }
}

/// The untokenize command implementation.
pub struct UntokenizeCommand {
    tokens: PathTokens,
    args: PathArgs,
}

impl UntokenizeCommand {
    /// Create a new untokenize command.
    pub fn new(config: &LoaderConfig, args: PathArgs) -> Self {
        Self {
            tokens: config.build_loader().path_tokens(),
            args,
        }
    }
}

impl Command for UntokenizeCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let path = untokenize(&self.args.path, &self.tokens);
        writeln!(out, "{}", path)?;

        let stale = unresolved_tokens(&path);
        if stale.is_empty() {
            Ok(CommandResult::success())
        } else {
            tracing::warn!("Undefined path tokens: {}", stale.join(", "));
            Ok(CommandResult::failure(1))
        }
    }
}
