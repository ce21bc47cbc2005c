//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use serde_json::Value;
use std::path::PathBuf;

use super::commands::cache::CacheArgs;

/// Resolve and render theme-overridable templates.
#[derive(Debug, Parser)]
#[command(name = "wenprise-templates")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides <project>/wenprise.yml)
    #[arg(short, long, global = true, env = "WENPRISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template to stdout
    Render(RenderArgs),

    /// Render a template part (<slug>-<name>.php or <slug>.php)
    Part(PartArgs),

    /// Print the file a template name resolves to
    Locate(LocateArgs),

    /// Replace known root prefixes in a path with {{TOKEN}} markers
    Tokenize(PathArgs),

    /// Expand {{TOKEN}} markers in a path
    Untokenize(PathArgs),

    /// List the path tokens defined on this host
    Tokens,

    /// Manage the template path cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Template name, e.g. single-product/price.php
    pub name: String,

    /// Template argument as KEY=VALUE; VALUE is parsed as JSON when it can be
    #[arg(short = 'a', long = "arg", value_name = "KEY=VALUE", value_parser = parse_template_arg)]
    pub args: Vec<(String, Value)>,
}

/// Arguments for the `part` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PartArgs {
    /// Part slug, e.g. content
    pub slug: String,

    /// Part name, e.g. product
    pub name: Option<String>,
}

/// Arguments for the `locate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LocateArgs {
    /// Template name
    pub name: String,

    /// Search without reading or writing the cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Arguments for the `tokenize` and `untokenize` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct PathArgs {
    /// Path to convert
    pub path: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

/// Parse `KEY=VALUE`, reading VALUE as JSON and falling back to a string.
pub fn parse_template_arg(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    let value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
