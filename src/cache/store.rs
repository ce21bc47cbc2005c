//! Tokenized template paths in the object cache.
//!
//! Every key written here is also recorded in an index entry so the whole
//! set can be dropped at once, which the backend cannot do by itself.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::backend::ObjectCache;
use super::{CACHE_GROUP, INDEX_KEY};

/// Template path cache with bulk invalidation.
#[derive(Clone)]
pub struct TemplateCache {
    backend: Arc<dyn ObjectCache>,
}

impl fmt::Debug for TemplateCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCache")
            .field("group", &CACHE_GROUP)
            .finish_non_exhaustive()
    }
}

impl TemplateCache {
    /// Wrap an object cache backend.
    pub fn new(backend: Arc<dyn ObjectCache>) -> Self {
        Self { backend }
    }

    /// The underlying backend.
    pub fn backend(&self) -> &Arc<dyn ObjectCache> {
        &self.backend
    }

    /// Cached tokenized path for `key`. Empty and non-string values are
    /// misses.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.backend.get(key, CACHE_GROUP) {
            Some(Value::String(path)) if !path.is_empty() => Some(path),
            _ => None,
        }
    }

    /// Cache a tokenized path and record its key in the index.
    ///
    /// An index of any shape other than a list is replaced by a list holding
    /// only `key`; keys it held are forgotten, though their entries remain.
    pub fn set(&self, key: &str, tokenized: &str) {
        self.backend
            .set(key, Value::String(tokenized.to_string()), CACHE_GROUP);

        let index = match self.backend.get(INDEX_KEY, CACHE_GROUP) {
            Some(Value::Array(mut keys)) => {
                if !keys.iter().any(|k| k.as_str() == Some(key)) {
                    keys.push(Value::String(key.to_string()));
                }
                keys
            }
            other => {
                if other.is_some() {
                    tracing::debug!("Resetting malformed template cache index");
                }
                vec![Value::String(key.to_string())]
            }
        };
        self.backend.set(INDEX_KEY, Value::Array(index), CACHE_GROUP);
    }

    /// Delete every indexed entry, then the index. Does nothing when the
    /// index is missing or malformed.
    pub fn clear(&self) {
        let Some(Value::Array(keys)) = self.backend.get(INDEX_KEY, CACHE_GROUP) else {
            return;
        };

        let mut removed = 0;
        for key in keys.iter().filter_map(Value::as_str) {
            if self.backend.delete(key, CACHE_GROUP) {
                removed += 1;
            }
        }
        self.backend.delete(INDEX_KEY, CACHE_GROUP);
        tracing::debug!(indexed = keys.len(), removed, "Cleared template cache");
    }

    /// Keys currently recorded in the index.
    pub fn keys(&self) -> Vec<String> {
        match self.backend.get(INDEX_KEY, CACHE_GROUP) {
            Some(Value::Array(keys)) => keys
                .into_iter()
                .filter_map(|k| match k {
                    Value::String(k) => Some(k),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use serde_json::json;

    fn cache() -> (Arc<MemoryCache>, TemplateCache) {
        let backend = Arc::new(MemoryCache::new());
        let cache = TemplateCache::new(backend.clone());
        (backend, cache)
    }

    #[test]
    fn set_then_get() {
        let (_, cache) = cache();
        cache.set("template-a", "{{ABSPATH}}a.php");
        assert_eq!(cache.get("template-a").as_deref(), Some("{{ABSPATH}}a.php"));
    }

    #[test]
    fn empty_value_is_a_miss() {
        let (_, cache) = cache();
        cache.set("template-part-x", "");
        assert_eq!(cache.get("template-part-x"), None);
        assert_eq!(cache.keys(), vec!["template-part-x"]);
    }

    #[test]
    fn non_string_value_is_a_miss() {
        let (backend, cache) = cache();
        backend.set("template-a", json!(42), CACHE_GROUP);
        assert_eq!(cache.get("template-a"), None);
    }

    #[test]
    fn index_records_each_key_once() {
        let (_, cache) = cache();
        cache.set("a", "/a.php");
        cache.set("b", "/b.php");
        cache.set("a", "/a2.php");
        assert_eq!(cache.keys(), vec!["a", "b"]);
    }

    #[test]
    fn malformed_index_is_reset() {
        let (backend, cache) = cache();
        cache.set("a", "/a.php");
        backend.set(INDEX_KEY, json!("garbage"), CACHE_GROUP);

        cache.set("b", "/b.php");
        assert_eq!(cache.keys(), vec!["b"]);

        // "a" fell out of the index, so clearing leaves it behind
        cache.clear();
        assert_eq!(cache.get("a").as_deref(), Some("/a.php"));
        assert_eq!(cache.get("b"), None);
    }

    #[test]
    fn clear_removes_entries_and_index() {
        let (backend, cache) = cache();
        cache.set("a", "/a.php");
        cache.set("b", "/b.php");

        cache.clear();

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert!(cache.keys().is_empty());
        assert!(backend.is_empty());
    }

    #[test]
    fn clear_tolerates_evicted_entries() {
        let (backend, cache) = cache();
        cache.set("a", "/a.php");
        backend.delete("a", CACHE_GROUP);

        cache.clear();
        assert!(backend.is_empty());
    }

    #[test]
    fn clear_without_index_is_noop() {
        let (backend, cache) = cache();
        backend.set("unindexed", json!("/x.php"), CACHE_GROUP);
        cache.clear();
        assert_eq!(cache.get("unindexed").as_deref(), Some("/x.php"));
    }

    #[test]
    fn clear_with_malformed_index_is_noop() {
        let (backend, cache) = cache();
        backend.set(INDEX_KEY, json!({"not": "a list"}), CACHE_GROUP);
        cache.clear();
        assert!(backend.get(INDEX_KEY, CACHE_GROUP).is_some());
    }
}
