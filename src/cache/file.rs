//! Disk-backed object cache.
//!
//! Each entry is one JSON record named after a hash of its group and key,
//! so entries survive between processes on the same host.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use super::backend::ObjectCache;

/// A stored cache entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Group (namespace) the entry belongs to.
    pub group: String,
    /// Key within the group.
    pub key: String,
    /// Stored value.
    pub value: Value,
    /// When the entry was written.
    pub stored_at: DateTime<Utc>,
}

/// Object cache storing one file per entry under a root directory.
#[derive(Debug, Clone)]
pub struct FileCache {
    root: PathBuf,
}

impl FileCache {
    /// Create a file cache rooted at `root`. The directory is created on
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record for an entry.
    pub fn record_path(&self, key: &str, group: &str) -> PathBuf {
        let id = format!("{}:{}", group, key);
        let hash = Sha256::digest(id.as_bytes());
        self.root
            .join(hex::encode(&hash[..16]))
            .with_extension("json")
    }

    /// Read an entry's record.
    pub fn load(&self, key: &str, group: &str) -> Result<Option<CacheRecord>> {
        let path = self.record_path(key, group);
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache record {:?}", path))?;
        let record: CacheRecord = serde_json::from_str(&json)
            .with_context(|| format!("Corrupt cache record {:?}", path))?;

        Ok(Some(record))
    }

    /// Write an entry's record.
    pub fn store(&self, key: &str, value: Value, group: &str) -> Result<CacheRecord> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;

        let record = CacheRecord {
            group: group.to_string(),
            key: key.to_string(),
            value,
            stored_at: Utc::now(),
        };
        let path = self.record_path(key, group);
        let json = serde_json::to_string_pretty(&record)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(record)
    }

    /// Remove an entry's record.
    pub fn remove(&self, key: &str, group: &str) -> Result<bool> {
        let path = self.record_path(key, group);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path).with_context(|| format!("Failed to remove {:?}", path))?;
        Ok(true)
    }

    /// All readable records, newest first. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<CacheRecord>> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Ok(json) = fs::read_to_string(&path) {
                    if let Ok(record) = serde_json::from_str::<CacheRecord>(&json) {
                        records.push(record);
                    }
                }
            }
        }

        records.sort_by(|a, b| b.stored_at.cmp(&a.stored_at));
        Ok(records)
    }
}

impl ObjectCache for FileCache {
    fn get(&self, key: &str, group: &str) -> Option<Value> {
        match self.load(key, group) {
            Ok(record) => record.map(|r| r.value),
            Err(e) => {
                tracing::debug!("Treating unreadable cache entry {} as a miss: {:#}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value, group: &str) {
        if let Err(e) = self.store(key, value, group) {
            tracing::warn!("Failed to cache {}: {:#}", key, e);
        }
    }

    fn delete(&self, key: &str, group: &str) -> bool {
        self.remove(key, group).unwrap_or_else(|e| {
            tracing::warn!("Failed to delete cached {}: {:#}", key, e);
            false
        })
    }
}
