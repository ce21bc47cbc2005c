//! Render commands.
//!
//! `wenprise-templates render <name>` and `wenprise-templates part <slug> [name]`
//! write the rendered template to stdout.

use std::io::Write;

use crate::cli::args::{PartArgs, RenderArgs};
use crate::config::LoaderConfig;
use crate::hooks::{HookRegistry, AFTER_TEMPLATE_PART, BEFORE_TEMPLATE_PART};
use crate::render::TemplateArgs;
use crate::resolver::{RenderOutcome, TemplateLoader};

use super::dispatcher::{Command, CommandResult};

/// Loader for CLI use: configured from file, with render notifications
/// traced at debug level.
fn cli_loader(config: &LoaderConfig) -> TemplateLoader {
    let mut hooks = HookRegistry::new();
    hooks
        .on_before_render(|p| {
            tracing::debug!(
                hook = BEFORE_TEMPLATE_PART,
                template = %p.template_name,
                located = %p.located.display(),
                "Rendering"
            )
        })
        .on_after_render(|p| {
            tracing::debug!(
                hook = AFTER_TEMPLATE_PART,
                template = %p.template_name,
                "Rendered"
            )
        });
    config.build_loader().with_hooks(hooks)
}

/// The render command implementation.
pub struct RenderCommand {
    loader: TemplateLoader,
    args: RenderArgs,
}

impl RenderCommand {
    /// Create a new render command.
    pub fn new(config: &LoaderConfig, args: RenderArgs) -> Self {
        Self {
            loader: cli_loader(config),
            args,
        }
    }
}

impl Command for RenderCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let args: TemplateArgs = self.args.args.iter().cloned().collect();

        match self.loader.get_template(&self.args.name, args, out)? {
            RenderOutcome::Rendered(_) => Ok(CommandResult::success()),
            RenderOutcome::Skipped { .. } => Ok(CommandResult::failure(1)),
        }
    }
}

/// The part command implementation.
pub struct PartCommand {
    loader: TemplateLoader,
    args: PartArgs,
}

impl PartCommand {
    /// Create a new part command.
    pub fn new(config: &LoaderConfig, args: PartArgs) -> Self {
        Self {
            loader: cli_loader(config),
            args,
        }
    }
}

impl Command for PartCommand {
    fn execute(&self, out: &mut dyn Write) -> crate::error::Result<CommandResult> {
        let rendered =
            self.loader
                .get_template_part(&self.args.slug, self.args.name.as_deref(), out)?;

        match rendered {
            Some(_) => Ok(CommandResult::success()),
            None => {
                tracing::warn!("No template part found for '{}'", self.args.slug);
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CacheBackend, CacheConfig};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn config(temp: &TempDir) -> LoaderConfig {
        LoaderConfig {
            default_path: format!("{}/", temp.path().display()),
            cache: CacheConfig {
                backend: CacheBackend::Memory,
                dir: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn render_writes_template() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("total.php"), "${qty} x ${price}").unwrap();

        let cmd = RenderCommand::new(
            &config(&temp),
            RenderArgs {
                name: "total.php".into(),
                args: vec![("qty".into(), json!(2)), ("price".into(), json!("4.50"))],
            },
        );
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();

        assert!(result.success);
        assert_eq!(String::from_utf8(out).unwrap(), "2 x 4.50");
    }

    #[test]
    fn render_missing_template_is_error() {
        let temp = TempDir::new().unwrap();
        let cmd = RenderCommand::new(
            &config(&temp),
            RenderArgs {
                name: "absent.php".into(),
                args: Vec::new(),
            },
        );
        let mut out = Vec::new();
        assert!(cmd.execute(&mut out).is_err());
    }

    #[test]
    fn part_renders_slug_fallback() {
        let temp = TempDir::new().unwrap();
        let theme = temp.path().join("theme");
        fs::create_dir_all(&theme).unwrap();
        fs::write(theme.join("content.php"), "generic").unwrap();

        let mut config = config(&temp);
        config.theme = Some(crate::config::ThemeConfig {
            stylesheet_dir: theme,
            template_dir: None,
        });
        let cmd = PartCommand::new(
            &config,
            PartArgs {
                slug: "content".into(),
                name: Some("product".into()),
            },
        );
        let mut out = Vec::new();
        assert!(cmd.execute(&mut out).unwrap().success);
        assert_eq!(out, b"generic");
    }

    #[test]
    fn part_not_found_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = PartCommand::new(
            &config(&temp),
            PartArgs {
                slug: "content".into(),
                name: None,
            },
        );
        let mut out = Vec::new();
        let result = cmd.execute(&mut out).unwrap();
        assert_eq!(result.exit_code, 1);
    }
}
