//! Template resolution.
//!
//! A theme overrides a plugin template by shipping a file of the same name,
//! either under the theme's template subdirectory or at the theme root.
//! [`TemplateLoader`] decides which file wins, caches that decision, and
//! renders the file.
//!
//! # Example
//!
//! ```
//! use std::fs;
//! use serde_json::json;
//! use tempfile::TempDir;
//! use wenprise_templates::resolver::{LoaderSettings, TemplateLoader, ThemeDirs};
//!
//! let plugin = TempDir::new().unwrap();
//! let theme = TempDir::new().unwrap();
//! fs::write(plugin.path().join("price.php"), "default ${price}").unwrap();
//! fs::create_dir_all(theme.path().join("wenprise")).unwrap();
//! fs::write(theme.path().join("wenprise/price.php"), "theme ${price}").unwrap();
//!
//! let settings = LoaderSettings::new(format!("{}/", plugin.path().display()));
//! let loader = TemplateLoader::new(settings).with_locator(ThemeDirs::new(theme.path()));
//!
//! let args = json!({"price": "$9"}).as_object().cloned().unwrap();
//! assert_eq!(loader.get_template_html("price.php", args).unwrap(), "theme $9");
//! ```

pub mod loader;
pub mod locator;

pub use loader::{
    LoaderSettings, RenderOutcome, ResolutionResult, TemplateLoader, DEFAULT_TEMPLATE_PATH,
    RESERVED_ARG, TAXONOMY_MARKERS,
};
pub use locator::{NoTheme, ThemeDirs, ThemeLocator};
