//! Template resolution and rendering.
//!
//! Resolution order for a template name (first match wins):
//! 1. `<theme>/<template_path><name>` and `<theme>/<name>`, hyphenated first
//!    for taxonomy archive names
//! 2. `<default_path><name>` shipped with the plugin
//!
//! Resolved paths are cached in tokenized form; see [`crate::cache`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::{
    template_cache_key, template_part_cache_key, MemoryCache, ObjectCache, TemplateCache,
};
use crate::error::Result;
use crate::hooks::{Hooks, NoHooks, RenderPayload, TemplateQuery, GET_TEMPLATE};
use crate::render::{FileIncluder, Includer, TemplateArgs, TemplateContext};
use crate::tokens::{
    discover_path_tokens, tokenize, unresolved_tokens, untokenize, PathTokens, RootPaths,
};

use super::locator::{NoTheme, ThemeLocator};

/// Argument key reserved for the render notification payload.
pub const RESERVED_ARG: &str = "action_args";

/// Name fragments of taxonomy archives whose theme overrides may be spelled
/// with hyphens instead of underscores.
pub const TAXONOMY_MARKERS: [&str; 2] = ["product_cat", "product_tag"];

/// Default theme subdirectory searched for overrides.
pub const DEFAULT_TEMPLATE_PATH: &str = "wenprise/";

/// Where templates are searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Theme subdirectory searched before the theme root.
    pub template_path: String,
    /// Plugin directory holding default templates, used verbatim as a prefix.
    pub default_path: String,
    /// Skip theme overrides entirely.
    pub debug_mode: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            default_path: String::new(),
            debug_mode: false,
        }
    }
}

impl LoaderSettings {
    /// Settings for a plugin whose defaults live under `default_path`.
    pub fn new(default_path: impl Into<String>) -> Self {
        Self {
            default_path: default_path.into(),
            ..Default::default()
        }
    }

    /// Use a different theme subdirectory.
    pub fn with_template_path(mut self, template_path: impl Into<String>) -> Self {
        self.template_path = template_path.into();
        self
    }

    /// Enable or disable debug mode.
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    fn subpath(&self) -> String {
        let trimmed = self.template_path.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{trimmed}/")
        }
    }
}

/// The file a render call included and the bindings it saw.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub path: PathBuf,
    pub context: TemplateContext,
}

/// What a render call did.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// The template was included.
    Rendered(ResolutionResult),
    /// An override pointed at a file that does not exist; nothing was
    /// written.
    Skipped { missing: PathBuf },
}

impl RenderOutcome {
    /// Whether a template was included.
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered(_))
    }

    /// The resolution, when a template was included.
    pub fn resolution(&self) -> Option<&ResolutionResult> {
        match self {
            RenderOutcome::Rendered(result) => Some(result),
            RenderOutcome::Skipped { .. } => None,
        }
    }
}

/// Resolves template names to files and renders them.
pub struct TemplateLoader {
    settings: LoaderSettings,
    roots: RootPaths,
    cache: TemplateCache,
    locator: Box<dyn ThemeLocator>,
    hooks: Box<dyn Hooks>,
    includer: Box<dyn Includer>,
}

impl std::fmt::Debug for TemplateLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateLoader")
            .field("settings", &self.settings)
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

impl TemplateLoader {
    /// Create a loader with an in-memory cache, no theme, no hooks and the
    /// file includer.
    pub fn new(settings: LoaderSettings) -> Self {
        Self {
            settings,
            roots: RootPaths::default(),
            cache: TemplateCache::new(Arc::new(MemoryCache::new())),
            locator: Box::new(NoTheme),
            hooks: Box::new(NoHooks),
            includer: Box::new(FileIncluder),
        }
    }

    /// Use these host roots for path tokens.
    pub fn with_roots(mut self, roots: RootPaths) -> Self {
        self.roots = roots;
        self
    }

    /// Cache through this backend.
    pub fn with_cache(mut self, backend: Arc<dyn ObjectCache>) -> Self {
        self.cache = TemplateCache::new(backend);
        self
    }

    /// Search this theme for overrides.
    pub fn with_locator(mut self, locator: impl ThemeLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Consult these hooks.
    pub fn with_hooks(mut self, hooks: impl Hooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    /// Render through this includer.
    pub fn with_includer(mut self, includer: impl Includer + 'static) -> Self {
        self.includer = Box::new(includer);
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Host roots.
    pub fn roots(&self) -> &RootPaths {
        &self.roots
    }

    /// The template path cache.
    pub fn cache(&self) -> &TemplateCache {
        &self.cache
    }

    /// Drop every cached resolution.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Path tokens for this host, after hooks.
    pub fn path_tokens(&self) -> PathTokens {
        discover_path_tokens(&self.roots, self.hooks.as_ref())
    }

    fn search(&self, candidates: &[String]) -> Option<PathBuf> {
        if self.settings.debug_mode {
            return None;
        }
        self.locator.locate(candidates)
    }

    /// Resolve a template name to a path without consulting the cache.
    ///
    /// Never fails: when no theme override exists the plugin default path is
    /// returned whether or not that file exists.
    pub fn locate_template(&self, name: &str) -> String {
        let subpath = self.settings.subpath();

        let mut hyphenated = None;
        let mut found = None;
        if TAXONOMY_MARKERS.iter().any(|marker| name.contains(marker)) {
            let variant = name.replace('_', "-");
            found = self.search(&[format!("{subpath}{variant}"), variant.clone()]);
            hyphenated = Some(variant);
        }
        if found.is_none() {
            found = self.search(&[format!("{subpath}{name}"), name.to_string()]);
        }

        let located = match found {
            Some(path) => path.to_string_lossy().into_owned(),
            None => format!(
                "{}{}",
                self.settings.default_path,
                hyphenated.as_deref().unwrap_or(name)
            ),
        };

        self.hooks
            .located_template(located, name, &self.settings.template_path)
    }

    /// Resolve a template name to an absolute path, through the cache.
    pub fn resolve_template(&self, name: &str) -> String {
        let key = template_cache_key(
            name,
            &self.settings.template_path,
            &self.settings.default_path,
        );

        if let Some(cached) = self.cache.get(&key) {
            let path = untokenize(&cached, &self.path_tokens());
            let stale = unresolved_tokens(&path);
            if stale.is_empty() {
                tracing::debug!(template = name, "Template cache hit");
            } else {
                tracing::debug!(
                    template = name,
                    ?stale,
                    "Cached template path has undefined roots"
                );
            }
            return path;
        }

        tracing::debug!(template = name, "Template cache miss");
        let located = self.locate_template(name);
        self.cache.set(&key, &tokenize(&located, &self.path_tokens()));
        located
    }

    /// Render a template into `out`.
    ///
    /// Each key of `args` becomes a binding in the template. `action_args`
    /// is reserved and is removed with a warning. When a hook redirects the
    /// template to a file that does not exist, a warning is logged and
    /// nothing is rendered.
    ///
    /// # Errors
    ///
    /// Only the include itself can fail, e.g. when the resolved file is
    /// missing or still carries an undefined `{{TOKEN}}`.
    pub fn get_template(
        &self,
        name: &str,
        args: TemplateArgs,
        out: &mut dyn Write,
    ) -> Result<RenderOutcome> {
        let resolved = self.resolve_template(name);

        let query = TemplateQuery {
            name,
            args: &args,
            template_path: &self.settings.template_path,
            default_path: &self.settings.default_path,
        };
        let filtered = self.hooks.template_file(resolved.clone(), &query);
        let path = if filtered != resolved {
            if !Path::new(&filtered).exists() {
                tracing::warn!(
                    hook = GET_TEMPLATE,
                    template = name,
                    "{} does not exist.",
                    filtered
                );
                return Ok(RenderOutcome::Skipped {
                    missing: PathBuf::from(filtered),
                });
            }
            filtered
        } else {
            resolved
        };
        let located = PathBuf::from(path);

        let payload = RenderPayload {
            template_name: name.to_string(),
            template_path: self.settings.template_path.clone(),
            located: located.clone(),
            args: args.clone(),
        };

        let mut args = args;
        if args.shift_remove(RESERVED_ARG).is_some() {
            tracing::warn!(
                template = name,
                "{} should not be overwritten when calling get_template.",
                RESERVED_ARG
            );
        }
        let context = TemplateContext::from_args(args);

        self.hooks.before_render(&payload);
        self.includer.include(&located, &context, out)?;
        self.hooks.after_render(&payload);

        Ok(RenderOutcome::Rendered(ResolutionResult {
            path: located,
            context,
        }))
    }

    /// Render a template and return the output instead of writing it.
    ///
    /// Returns an empty string when the render is skipped.
    pub fn get_template_html(&self, name: &str, args: TemplateArgs) -> Result<String> {
        let mut buf = Vec::new();
        self.get_template(name, args, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Render the template part `<slug>-<name>.php`, falling back to
    /// `<slug>.php`.
    ///
    /// Named parts are searched in the theme root, then the theme subpath,
    /// then the plugin defaults; unnamed parts only in the theme. Returns the
    /// included path, or `None` when nothing was found.
    pub fn get_template_part(
        &self,
        slug: &str,
        name: Option<&str>,
        out: &mut dyn Write,
    ) -> Result<Option<PathBuf>> {
        let name = name.filter(|n| !n.is_empty());
        let key = template_part_cache_key(slug, name);

        let template = match self.cache.get(&key) {
            Some(cached) => untokenize(&cached, &self.path_tokens()),
            None => {
                let located = self.locate_template_part(slug, name);
                // cached even when empty, so the key is indexed for clearing
                self.cache.set(&key, &tokenize(&located, &self.path_tokens()));
                located
            }
        };

        let template = self.hooks.template_part(template, slug, name);
        if template.is_empty() {
            tracing::debug!(slug, ?name, "No template part found");
            return Ok(None);
        }

        let path = PathBuf::from(template);
        self.includer.include(&path, &TemplateContext::new(), out)?;
        Ok(Some(path))
    }

    fn locate_template_part(&self, slug: &str, name: Option<&str>) -> String {
        let subpath = self.settings.subpath();
        let mut found = None;

        if let Some(name) = name {
            let file = format!("{slug}-{name}.php");
            found = self.search(&[file.clone(), format!("{subpath}{file}")]);
            if found.is_none() {
                let fallback = PathBuf::from(format!("{}{}", self.settings.default_path, file));
                if fallback.exists() {
                    found = Some(fallback);
                }
            }
        }
        if found.is_none() {
            let file = format!("{slug}.php");
            found = self.search(&[file.clone(), format!("{subpath}{file}")]);
        }

        found
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
