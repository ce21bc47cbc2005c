//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::{default_cache_dir, FileCache, MemoryCache, ObjectCache};
use crate::resolver::{LoaderSettings, TemplateLoader, ThemeDirs, DEFAULT_TEMPLATE_PATH};
use crate::tokens::RootPaths;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Theme subdirectory searched for overrides.
    pub template_path: String,

    /// Plugin directory with default templates. Used verbatim as a prefix,
    /// so it normally ends with a separator.
    pub default_path: String,

    /// Ignore theme overrides.
    pub debug_mode: bool,

    /// Active theme; without it only plugin defaults are used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,

    /// Host roots used for path tokens.
    pub roots: RootPaths,

    /// Where resolutions are cached.
    pub cache: CacheConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
            default_path: String::new(),
            debug_mode: false,
            theme: None,
            roots: RootPaths::default(),
            cache: CacheConfig::default(),
        }
    }
}

/// Active theme directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Child (or only) theme directory.
    pub stylesheet_dir: PathBuf,

    /// Parent theme directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
}

/// Cache backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Process-local; every run starts cold.
    Memory,
    /// JSON records on disk, shared between runs.
    #[default]
    File,
}

/// Cache settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    pub backend: CacheBackend,

    /// Directory for the file backend (default: platform cache dir).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl CacheConfig {
    /// Directory the file backend writes to.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_cache_dir)
    }

    /// Instantiate the configured backend.
    pub fn backend(&self) -> Arc<dyn ObjectCache> {
        match self.backend {
            CacheBackend::Memory => Arc::new(MemoryCache::new()),
            CacheBackend::File => Arc::new(FileCache::new(self.dir())),
        }
    }
}

impl LoaderConfig {
    /// Search settings.
    pub fn settings(&self) -> LoaderSettings {
        LoaderSettings::new(self.default_path.clone())
            .with_template_path(self.template_path.clone())
            .with_debug_mode(self.debug_mode)
    }

    /// A loader wired up from this configuration, without hooks.
    pub fn build_loader(&self) -> TemplateLoader {
        let loader = TemplateLoader::new(self.settings())
            .with_roots(self.roots.clone())
            .with_cache(self.cache.backend());

        match &self.theme {
            Some(theme) => {
                let mut dirs = ThemeDirs::new(&theme.stylesheet_dir);
                if let Some(parent) = &theme.template_dir {
                    dirs = dirs.with_parent(parent);
                }
                loader.with_locator(dirs)
            }
            None => loader,
        }
    }
}
