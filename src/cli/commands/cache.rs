//! Cache command implementation.
//!
//! Provides `wenprise-templates cache list`, `cache clear` and `cache stats`.

use clap::{Args, Subcommand};
use console::style;
use std::io::Write;

use crate::cache::{FileCache, TemplateCache, CACHE_GROUP, INDEX_KEY};
use crate::config::{CacheBackend, CacheConfig, LoaderConfig};
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// List cached template paths.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Drop every cached template path.
    Clear,
    /// Show what the file backend holds on disk.
    Stats,
}

/// The cache command implementation.
pub struct CacheCommand {
    cache: TemplateCache,
    config: CacheConfig,
    args: CacheArgs,
}

impl CacheCommand {
    /// Create a new cache command.
    pub fn new(config: &LoaderConfig, args: CacheArgs) -> Self {
        Self {
            cache: TemplateCache::new(config.cache.backend()),
            config: config.cache.clone(),
            args,
        }
    }
}

impl Command for CacheCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        match &self.args.command {
            CacheSubcommand::List { json } => list_cache(&self.cache, *json, out)?,
            CacheSubcommand::Clear => clear_cache(&self.cache, out)?,
            CacheSubcommand::Stats => show_stats(&self.cache, &self.config, out)?,
        }
        Ok(CommandResult::success())
    }
}

fn list_cache(cache: &TemplateCache, json: bool, out: &mut dyn Write) -> Result<()> {
    let entries: Vec<(String, Option<String>)> = cache
        .keys()
        .into_iter()
        .map(|key| {
            let path = cache.get(&key);
            (key, path)
        })
        .collect();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, path)| (key, path.map_or(serde_json::Value::Null, Into::into)))
            .collect();
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&map).map_err(anyhow::Error::from)?
        )?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(out, "Cache is empty")?;
        return Ok(());
    }

    writeln!(out, "{} cached templates:\n", entries.len())?;
    for (key, path) in entries {
        match path {
            Some(path) => writeln!(out, "  {}\n    {}", style(key).bold(), path)?,
            None => writeln!(out, "  {} {}", style(key).bold(), style("[missing]").dim())?,
        }
    }
    Ok(())
}

fn clear_cache(cache: &TemplateCache, out: &mut dyn Write) -> Result<()> {
    let count = cache.keys().len();
    if count == 0 {
        writeln!(out, "Cache is already empty")?;
        return Ok(());
    }

    cache.clear();
    writeln!(out, "Cleared {} entries", count)?;
    Ok(())
}

fn show_stats(cache: &TemplateCache, config: &CacheConfig, out: &mut dyn Write) -> Result<()> {
    if config.backend == CacheBackend::Memory {
        writeln!(out, "Memory cache is not persisted between runs")?;
        return Ok(());
    }

    let store = FileCache::new(config.dir());
    let records = store.list()?;
    let indexed = cache.keys();
    // entries written before an index reset are no longer reachable by clear
    let orphaned = records
        .iter()
        .filter(|r| r.group == CACHE_GROUP && r.key != INDEX_KEY)
        .filter(|r| !indexed.contains(&r.key))
        .count();

    writeln!(out, "Cache Statistics:\n")?;
    writeln!(out, "  Records on disk: {}", records.len())?;
    writeln!(out, "  Indexed templates: {}", indexed.len())?;
    writeln!(out, "  Orphaned: {}", orphaned)?;
    if let Some(newest) = records.first() {
        writeln!(out, "  Last write: {}", newest.stored_at.to_rfc3339())?;
    }
    writeln!(out, "  Location: {}", store.root().display())?;
    Ok(())
}
