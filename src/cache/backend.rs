//! Object cache backends.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

/// Namespaced key/value store shared with the rest of the host.
///
/// Best-effort: an entry may vanish at any time, and a backend that cannot
/// reach its storage behaves like an empty cache.
pub trait ObjectCache: Send + Sync {
    /// Fetch a value.
    fn get(&self, key: &str, group: &str) -> Option<Value>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: Value, group: &str);

    /// Remove a value. Returns whether one was present.
    fn delete(&self, key: &str, group: &str) -> bool;
}

/// Process-local cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<(String, String), Value>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries across all groups.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectCache for MemoryCache {
    fn get(&self, key: &str, group: &str) -> Option<Value> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(group.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&self, key: &str, value: Value, group: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((group.to_string(), key.to_string()), value);
    }

    fn delete(&self, key: &str, group: &str) -> bool {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&(group.to_string(), key.to_string()))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_then_get() {
        let cache = MemoryCache::new();
        cache.set("k", json!("v"), "wenprise");
        assert_eq!(cache.get("k", "wenprise"), Some(json!("v")));
    }

    #[test]
    fn groups_are_separate() {
        let cache = MemoryCache::new();
        cache.set("k", json!(1), "a");
        assert_eq!(cache.get("k", "b"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn delete_reports_presence() {
        let cache = MemoryCache::new();
        cache.set("k", json!(1), "g");
        assert!(cache.delete("k", "g"));
        assert!(!cache.delete("k", "g"));
        assert!(cache.is_empty());
    }
}
