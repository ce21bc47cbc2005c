//! Locate command implementation.
//!
//! `wenprise-templates locate <name>` prints the file a template name
//! resolves to, going through the cache unless `--no-cache` is given.

use std::io::Write;

use crate::cli::args::LocateArgs;
use crate::config::LoaderConfig;
use crate::resolver::TemplateLoader;

use super::dispatcher::{Command, CommandResult};

/// The locate command implementation.
pub struct LocateCommand {
    loader: TemplateLoader,
    args: LocateArgs,
}

impl LocateCommand {
    /// Create a new locate command.
    pub fn new(config: &LoaderConfig, args: LocateArgs) -> Self {
        Self {
            loader: config.build_loader(),
            args,
        }
    }
}

impl Command for LocateCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let path = if self.args.no_cache {
            self.loader.locate_template(&self.args.name)
        } else {
            self.loader.resolve_template(&self.args.name)
        };
        writeln!(out, "{}", path)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CacheBackend, CacheConfig, ThemeConfig};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prints_theme_override() {
        let temp = TempDir::new().unwrap();
        let theme = temp.path().join("theme");
        fs::create_dir_all(theme.join("wenprise")).unwrap();
        fs::write(theme.join("wenprise").join("cart.php"), "").unwrap();

        let config = LoaderConfig {
            default_path: "/plugin/templates/".into(),
            theme: Some(ThemeConfig {
                stylesheet_dir: theme.clone(),
                template_dir: None,
            }),
            cache: CacheConfig {
                backend: CacheBackend::Memory,
                dir: None,
            },
            ..Default::default()
        };

        for no_cache in [false, true] {
            let cmd = LocateCommand::new(
                &config,
                LocateArgs {
                    name: "cart.php".into(),
                    no_cache,
                },
            );
            let mut out = Vec::new();
            cmd.execute(&mut out).unwrap();
            assert_eq!(
                String::from_utf8(out).unwrap().trim_end(),
                theme.join("wenprise").join("cart.php").display().to_string()
            );
        }
    }

    #[test]
    fn no_cache_leaves_cache_untouched() {
        let temp = TempDir::new().unwrap();
        let config = LoaderConfig {
            cache: CacheConfig {
                backend: CacheBackend::File,
                dir: Some(temp.path().to_path_buf()),
            },
            ..Default::default()
        };

        let cmd = LocateCommand::new(
            &config,
            LocateArgs {
                name: "single.php".into(),
                no_cache: true,
            },
        );
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        assert!(cmd.loader.cache().keys().is_empty());
    }
}
