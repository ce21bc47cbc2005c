//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use wenprise_templates::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join("wenprise.yml"),
//!     "default_path: /srv/plugins/wenprise/templates/\ncache:\n  backend: memory\n",
//! )
//! .unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! let loader = config.build_loader();
//! assert_eq!(
//!     loader.locate_template("single.php"),
//!     "/srv/plugins/wenprise/templates/single.php"
//! );
//! ```

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config, CONFIG_FILE};
pub use schema::{CacheBackend, CacheConfig, LoaderConfig, ThemeConfig};
