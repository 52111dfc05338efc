//! Injected reference-data cache.
//!
//! Rarely-changing reference data should not be refetched within a
//! session. The cache is an explicit interface handed to data-fetching
//! collaborators instead of ambient storage access, so tests can supply
//! their own and TTL behavior stays observable.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Session cache for serialized reference data.
pub trait ReferenceCache: Send + Sync {
    /// Fetch a live entry, or `None` when absent or expired.
    fn get(&self, key: &str) -> Option<String>;

    /// Store an entry that expires after `ttl`.
    fn set(&self, key: &str, value: String, ttl: Duration);

    /// Drop an entry immediately.
    fn invalidate(&self, key: &str);
}

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// In-memory [`ReferenceCache`] with per-entry deadlines.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().ok()?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    fn set(&self, key: &str, value: String, ttl: Duration) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(
                key.to_string(),
                CacheEntry {
                    value,
                    expires_at: Instant::now() + ttl,
                },
            );
        }
    }

    fn invalidate(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set("k", "v".to_string(), Duration::from_secs(60));
        assert_eq!(cache.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_expired_entries_are_dropped() {
        let cache = MemoryCache::new();
        cache.set("k", "v".to_string(), Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(30));
        assert_eq!(cache.get("k"), None);
        // A second read after expiry stays empty
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = MemoryCache::new();
        cache.set("k", "v".to_string(), Duration::from_secs(60));
        cache.invalidate("k");
        assert_eq!(cache.get("k"), None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("absent"), None);
    }
}
