//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`wenprise-templates render`, `wenprise-templates cache`)
//! - Config loaded once per invocation
//! - Consistent global flag handling

pub mod cache;
pub mod completions;
pub mod dispatcher;
pub mod locate;
pub mod render;
pub mod tokens;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
