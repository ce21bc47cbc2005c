//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, LoaderConfig};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Where command output (rendered templates, paths) is written
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation,
    /// loading configuration for every command that needs it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let config = || -> Result<LoaderConfig> {
            let config = load_config(&self.project_root, cli.config.as_deref())?;
            tracing::debug!("Using config: {:?}", config);
            Ok(config)
        };

        match &cli.command {
            Commands::Render(args) => {
                let cmd = super::render::RenderCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Part(args) => {
                let cmd = super::render::PartCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Locate(args) => {
                let cmd = super::locate::LocateCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Tokenize(args) => {
                let cmd = super::tokens::TokenizeCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Untokenize(args) => {
                let cmd = super::tokens::UntokenizeCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Tokens => {
                let cmd = super::tokens::TokensCommand::new(&config()?);
                cmd.execute(out)
            }
            Commands::Cache(args) => {
                let cmd = super::cache::CacheCommand::new(&config()?, args.clone());
                cmd.execute(out)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
