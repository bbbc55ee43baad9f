use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Time-bounded cache for per-listing analysis results.
///
/// Entries live for a fixed TTL and are never refreshed in place; an expired
/// entry is simply replaced by the next computation. There is no eviction
/// beyond expiry, matching the single-writer-per-key access pattern of the
/// analysis flow.
pub(crate) struct TtlCache<V> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

struct CacheEntry<V> {
    stored_at: Instant,
    value: V,
}

impl<V: Clone> TtlCache<V> {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<V> {
        let mut guard = self.entries.lock().expect("cache mutex poisoned");
        match guard.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => Some(entry.value.clone()),
            Some(_) => {
                guard.remove(key);
                None
            }
            None => None,
        }
    }

    pub(crate) fn insert(&self, key: String, value: V) {
        let mut guard = self.entries.lock().expect("cache mutex poisoned");
        guard.insert(
            key,
            CacheEntry {
                stored_at: Instant::now(),
                value,
            },
        );
    }
}
