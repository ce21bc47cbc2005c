//! Template path caching.
//!
//! Resolved template paths are cached in tokenized form (see
//! [`crate::tokens`]) in a host-wide object cache, under keys derived from
//! everything that influences resolution. The cache is never authoritative:
//! resolution works the same, only slower, when every lookup misses.

pub mod backend;
pub mod file;
pub mod key;
pub mod store;

pub use backend::{MemoryCache, ObjectCache};
pub use file::{CacheRecord, FileCache};
pub use key::{sanitize_key, template_cache_key, template_part_cache_key};
pub use store::TemplateCache;

/// Namespace of every entry this crate writes.
pub const CACHE_GROUP: &str = "wenprise";

/// Key of the entry listing every cached template key.
pub const INDEX_KEY: &str = "cached_templates";

/// Cache format marker mixed into every key. Bump it to orphan entries
/// written in an older format.
pub const FORMAT_VERSION: &str = "1.0";

/// Get the default on-disk cache directory.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("wenprise-templates")
}
