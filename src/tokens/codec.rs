//! Conversion between absolute paths and tokenized paths.
//!
//! A tokenized path replaces a known root prefix with a `{{NAME}}` marker:
//!
//! ```text
//! /srv/www/wp-content/themes/shop/wenprise/single.php
//! {{WP_CONTENT_DIR}}/themes/shop/wenprise/single.php
//! ```
//!
//! Cached template paths are stored in this form so a cache populated on one
//! machine stays usable on another where the roots live elsewhere.

use regex::Regex;
use std::sync::LazyLock;

// Token names are free-form; any name without braces is a marker.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]+)\}\}").expect("marker pattern is valid"));

/// A named root path that can stand in for a path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathToken {
    /// Symbolic name, written as `{{name}}` in tokenized paths.
    pub name: String,
    /// Absolute root path on this host.
    pub value: String,
}

impl PathToken {
    /// Create a token.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The marker this token is written as.
    pub fn marker(&self) -> String {
        format!("{{{{{}}}}}", self.name)
    }
}

/// Ordered set of path tokens, unique by name.
///
/// Insertion order is kept because it breaks ties between roots of equal
/// length during [`tokenize`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTokens {
    tokens: Vec<PathToken>,
}

impl PathTokens {
    /// Create an empty token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a token. A replaced token keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let token = PathToken::new(name, value);
        match self.tokens.iter_mut().find(|t| t.name == token.name) {
            Some(existing) => existing.value = token.value,
            None => self.tokens.push(token),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Remove a token by name, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.tokens.iter().position(|t| t.name == name)?;
        Some(self.tokens.remove(index).value)
    }

    /// Get a token's root path.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.value.as_str())
    }

    /// Iterate tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PathToken> {
        self.tokens.iter()
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for PathTokens {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut tokens = PathTokens::new();
        for (name, value) in iter {
            tokens.insert(name, value);
        }
        tokens
    }
}

/// Replace root prefixes in `path` with token markers.
///
/// Tokens are tried longest root first, so the most specific root wins when
/// one root contains another (`WP_PLUGIN_DIR` inside `WP_CONTENT_DIR`).
/// Roots of equal length keep their insertion order. A path under no known
/// root is returned unchanged.
pub fn tokenize(path: &str, tokens: &PathTokens) -> String {
    let mut ordered: Vec<&PathToken> = tokens.iter().collect();
    // stable: equal lengths keep insertion order
    ordered.sort_by(|a, b| b.value.len().cmp(&a.value.len()));

    let mut path = path.to_string();
    for token in ordered {
        // an empty root would prefix everything
        if token.value.is_empty() || !path.starts_with(&token.value) {
            continue;
        }
        path = path.replace(&token.value, &token.marker());
    }
    path
}

/// Expand token markers in `path` back into root paths.
///
/// Markers naming a token missing from `tokens` are left as they are; the
/// result is then not a usable path and fails when included.
pub fn untokenize(path: &str, tokens: &PathTokens) -> String {
    tokens.iter().fold(path.to_string(), |path, token| {
        path.replace(&token.marker(), &token.value)
    })
}

/// Names of markers still present in `path`.
pub fn unresolved_tokens(path: &str) -> Vec<String> {
    MARKER
        .captures_iter(path)
        .map(|c| c[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp_tokens() -> PathTokens {
        PathTokens::new()
            .with("ABSPATH", "/srv/www/")
            .with("WP_CONTENT_DIR", "/srv/www/wp-content")
            .with("WP_PLUGIN_DIR", "/srv/www/wp-content/plugins")
    }

    #[test]
    fn marker_format() {
        assert_eq!(PathToken::new("ABSPATH", "/").marker(), "{{ABSPATH}}");
    }

    #[test]
    fn tokenize_prefers_most_specific_root() {
        let path = "/srv/www/wp-content/plugins/wenprise/templates/single.php";
        assert_eq!(
            tokenize(path, &wp_tokens()),
            "{{WP_PLUGIN_DIR}}/wenprise/templates/single.php"
        );
    }

    #[test]
    fn tokenize_specificity_ignores_insertion_order() {
        let tokens = PathTokens::new()
            .with("WP_PLUGIN_DIR", "/srv/www/wp-content/plugins")
            .with("WP_CONTENT_DIR", "/srv/www/wp-content");
        let path = "/srv/www/wp-content/themes/shop/single.php";
        assert_eq!(
            tokenize(path, &tokens),
            "{{WP_CONTENT_DIR}}/themes/shop/single.php"
        );
    }

    #[test]
    fn tokenize_unknown_root_is_identity() {
        let path = "/opt/elsewhere/single.php";
        assert_eq!(tokenize(path, &wp_tokens()), path);
    }

    #[test]
    fn tokenize_requires_prefix_not_substring() {
        let tokens = PathTokens::new().with("WP_CONTENT_DIR", "/wp-content");
        let path = "/srv/wp-content/single.php";
        assert_eq!(tokenize(path, &tokens), path);
    }

    #[test]
    fn tokenize_replaces_every_occurrence_of_matched_root() {
        let tokens = PathTokens::new().with("ROOT", "/a");
        assert_eq!(tokenize("/a/b/a/c", &tokens), "{{ROOT}}/b{{ROOT}}/c");
    }

    #[test]
    fn tokenize_equal_length_roots_use_insertion_order() {
        let tokens = PathTokens::new()
            .with("PLUGINDIR", "/srv/plugins")
            .with("WP_PLUGIN_DIR", "/srv/plugins");
        assert_eq!(
            tokenize("/srv/plugins/x.php", &tokens),
            "{{PLUGINDIR}}/x.php"
        );
    }

    #[test]
    fn tokenize_skips_empty_roots() {
        let tokens = PathTokens::new().with("EMPTY", "");
        assert_eq!(tokenize("/srv/x.php", &tokens), "/srv/x.php");
    }

    #[test]
    fn tokenize_is_idempotent() {
        let tokens = wp_tokens();
        let once = tokenize("/srv/www/wp-content/themes/a.php", &tokens);
        assert_eq!(tokenize(&once, &tokens), once);
    }

    #[test]
    fn round_trip_restores_path() {
        let tokens = wp_tokens();
        for path in [
            "/srv/www/index.php",
            "/srv/www/wp-content/themes/shop/wenprise/archive.php",
            "/srv/www/wp-content/plugins/wenprise/templates/single.php",
        ] {
            assert_eq!(untokenize(&tokenize(path, &tokens), &tokens), path);
        }
    }

    #[test]
    fn untokenize_uses_current_roots() {
        let cached = "{{WP_CONTENT_DIR}}/themes/shop/single.php";
        let tokens = PathTokens::new().with("WP_CONTENT_DIR", "/var/www/html/wp-content");
        assert_eq!(
            untokenize(cached, &tokens),
            "/var/www/html/wp-content/themes/shop/single.php"
        );
    }

    #[test]
    fn untokenize_leaves_unknown_markers() {
        let cached = "{{WPMU_PLUGIN_DIR}}/wenprise/single.php";
        let result = untokenize(cached, &wp_tokens());
        assert_eq!(result, cached);
        assert_eq!(unresolved_tokens(&result), vec!["WPMU_PLUGIN_DIR"]);
    }

    #[test]
    fn unresolved_tokens_reports_free_form_names() {
        let tokens = PathTokens::new().with("uploads-dir", "/srv/uploads");
        let cached = tokenize("/srv/uploads/a.php", &tokens);
        assert_eq!(cached, "{{uploads-dir}}/a.php");

        let expanded = untokenize(&cached, &PathTokens::new());
        assert_eq!(expanded, cached);
        assert_eq!(unresolved_tokens(&expanded), vec!["uploads-dir"]);
        assert!(unresolved_tokens(&untokenize(&cached, &tokens)).is_empty());
    }

    #[test]
    fn unresolved_tokens_empty_for_plain_path() {
        assert!(unresolved_tokens("/srv/www/a.php").is_empty());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut tokens = wp_tokens();
        tokens.insert("ABSPATH", "/var/www/");
        assert_eq!(tokens.get("ABSPATH"), Some("/var/www/"));
        assert_eq!(tokens.iter().next().unwrap().name, "ABSPATH");
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn remove_token() {
        let mut tokens = wp_tokens();
        assert_eq!(tokens.remove("ABSPATH"), Some("/srv/www/".to_string()));
        assert_eq!(tokens.remove("ABSPATH"), None);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn collect_from_pairs() {
        let tokens: PathTokens = [("A", "/a"), ("B", "/b")].into_iter().collect();
        assert_eq!(tokens.get("B"), Some("/b"));
        assert!(!tokens.is_empty());
    }
}
