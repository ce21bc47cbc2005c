//! Wenprise templates - theme-overridable template resolution for plugins.
//!
//! A plugin ships default templates; an active theme (child, then parent)
//! may override any of them. Resolved paths are cached host-wide in a
//! tokenized form so a cache entry survives the install moving between hosts.
//!
//! # Modules
//!
//! - [`cache`] - Namespaced object cache with a bulk-clear index
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and parsing
//! - [`error`] - Error types and result aliases
//! - [`hooks`] - Filters and render notifications
//! - [`render`] - Template arguments and file inclusion
//! - [`resolver`] - Template location, caching and rendering
//! - [`tokens`] - Root path tokenization
//!
//! # Example
//!
//! ```
//! use wenprise_templates::tokens::{tokenize, untokenize, PathTokens};
//!
//! let tokens = PathTokens::new()
//!     .with("ABSPATH", "/var/www/")
//!     .with("WP_PLUGIN_DIR", "/var/www/wp-content/plugins");
//!
//! let path = "/var/www/wp-content/plugins/shop/templates/cart.php";
//! let tokenized = tokenize(path, &tokens);
//! assert_eq!(tokenized, "{{WP_PLUGIN_DIR}}/shop/templates/cart.php");
//! assert_eq!(untokenize(&tokenized, &tokens), path);
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod render;
pub mod resolver;
pub mod tokens;

pub use error::{LoaderError, Result};
