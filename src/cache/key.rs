//! Cache key derivation.

use super::FORMAT_VERSION;

/// Normalize a string for use as a cache key: lowercase, keeping only ASCII
/// letters, digits, `_` and `-`.
pub fn sanitize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Key under which a `get_template` resolution is cached.
pub fn template_cache_key(name: &str, template_path: &str, default_path: &str) -> String {
    sanitize_key(&["template", name, template_path, default_path, FORMAT_VERSION].join("-"))
}

/// Key under which a `get_template_part` resolution is cached.
pub fn template_part_cache_key(slug: &str, name: Option<&str>) -> String {
    sanitize_key(&["template-part", slug, name.unwrap_or(""), FORMAT_VERSION].join("-"))
}
