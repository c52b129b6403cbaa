//! TTL'd LRU cache for serialized graph query responses.
//!
//! Graph queries are pure reads against an immutable snapshot, so responses
//! are cacheable by request URI until the next rebuild invalidates them.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Thread-safe LRU cache with per-entry expiry
pub struct ResponseCache {
    cache: Mutex<LruCache<String, (Instant, Value)>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache holding at most `capacity` responses, each valid for
    /// `ttl`
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let cap = NonZeroUsize::new(capacity.max(1)).expect("Cache capacity must be at least 1");
        Self {
            cache: Mutex::new(LruCache::new(cap)),
            ttl,
        }
    }

    /// Get a cached response if present and not expired
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut cache = self.cache.lock().unwrap();
        let expired = match cache.get(key) {
            Some((inserted_at, value)) => {
                if inserted_at.elapsed() < self.ttl {
                    return Some(value.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            cache.pop(key);
        }
        None
    }

    /// Store a response
    pub fn put(&self, key: String, value: Value) {
        self.cache.lock().unwrap().put(key, (Instant::now(), value));
    }

    /// Drop all entries (after a graph rebuild)
    pub fn clear(&self) {
        self.cache.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().unwrap().is_empty()
    }
}
