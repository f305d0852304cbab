//! Cache Store Module
//!
//! Main cache engine: an in-process map in front of an injected durable
//! store, with TTL validity checks, substring invalidation, and reactive
//! pruning of the durable tier.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cache::{
    build_key, prune_oldest, CacheEntry, CacheStats, DurableStore, MemoryStore, Params, Topic,
    CACHE_DURATION_MS, DURABLE_KEY_PREFIX,
};

// == Cache Store ==
/// Two-tier response cache.
///
/// The in-process map is authoritative when it holds a fresh entry; the
/// durable store is a fallback restored into the map on hit. Lookups never
/// fail: every durable-tier problem (corrupt data, capacity) is recovered
/// internally, so the worst case is a redundant refetch by the caller.
#[derive(Debug)]
pub struct CacheStore {
    /// In-process entry map, keyed by cache key
    entries: HashMap<String, CacheEntry>,
    /// Persistence tier surviving restarts
    durable: Box<dyn DurableStore>,
    /// Performance counters
    stats: CacheStats,
    /// TTL in milliseconds used when `set` is called without one
    default_ttl_ms: u64,
}

impl CacheStore {
    // == Constructors ==
    /// Creates a CacheStore over the given durable tier with the default TTL.
    pub fn new(durable: Box<dyn DurableStore>) -> Self {
        Self::with_default_ttl(durable, CACHE_DURATION_MS)
    }

    /// Creates a CacheStore with an explicit default TTL in milliseconds.
    pub fn with_default_ttl(durable: Box<dyn DurableStore>, default_ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            durable,
            stats: CacheStats::new(),
            default_ttl_ms,
        }
    }

    /// Creates a CacheStore backed by an unbounded in-memory durable tier.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    // == Get ==
    /// Retrieves the cached payload for an (endpoint, params) pair.
    ///
    /// A fresh in-process entry is a hit. A stale in-process entry counts as
    /// a miss but stays in place; the durable tier may still hold a newer
    /// copy written by a previous session. A fresh durable entry is promoted
    /// into the in-process map and returned as a hit. Anything else is a miss.
    pub fn get(&mut self, endpoint: &str, params: &Params) -> Option<Value> {
        let key = build_key(endpoint, params);

        if let Some(entry) = self.entries.get(&key) {
            if entry.is_valid() {
                debug!(%key, "cache hit (memory)");
                self.stats.record_hit();
                return Some(entry.data.clone());
            }
        }

        if let Some(entry) = self.read_durable(&key) {
            if entry.is_valid() {
                debug!(%key, "cache hit (durable), promoting to memory");
                self.stats.record_hit();
                let data = entry.data.clone();
                self.entries.insert(key, entry);
                return Some(data);
            }
        }

        debug!(%key, "cache miss");
        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores a payload for an (endpoint, params) pair.
    ///
    /// Overwrites any prior entry for the key, stamps it with the current
    /// time, and mirrors it into the durable store. A rejected durable write
    /// triggers pruning of the oldest durable entries and is otherwise
    /// swallowed; the in-process entry is always considered set.
    pub fn set(&mut self, endpoint: &str, params: &Params, data: Value, ttl_ms: Option<u64>) {
        let key = build_key(endpoint, params);
        let entry = CacheEntry::new(key.clone(), data, ttl_ms.unwrap_or(self.default_ttl_ms));

        match serde_json::to_string(&entry) {
            Ok(raw) => {
                let durable_key = Self::durable_key(&key);
                if let Err(err) = self.durable.set(&durable_key, &raw) {
                    warn!(%key, %err, "durable write rejected, pruning oldest entries");
                    let removed = prune_oldest(self.durable.as_mut());
                    self.stats.record_evictions(removed as u64);
                }
            }
            Err(err) => warn!(%key, %err, "entry not mirrored to durable store"),
        }

        debug!(%key, ttl_ms = entry.duration, "cached response");
        self.entries.insert(key, entry);
    }

    // == Clear ==
    /// Removes one specific (endpoint, params) entry from both tiers.
    pub fn clear(&mut self, endpoint: &str, params: &Params) {
        let key = build_key(endpoint, params);
        self.entries.remove(&key);
        self.durable.delete(&Self::durable_key(&key));
        debug!(%key, "cleared cache entry");
    }

    // == Clear All ==
    /// Empties the in-process map and removes every namespaced durable entry.
    ///
    /// Durable keys without the cache prefix belong to other application
    /// state and are left untouched.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        for key in self.durable.keys() {
            if key.starts_with(DURABLE_KEY_PREFIX) {
                self.durable.delete(&key);
            }
        }
        info!("cleared all cache entries");
    }

    // == Clear Pattern ==
    /// Removes every entry whose cache key contains `pattern`.
    ///
    /// Plain substring match, no globs or regexes. Applied to both tiers.
    pub fn clear_pattern(&mut self, pattern: &str) {
        self.entries.retain(|key, _| !key.contains(pattern));

        for durable_key in self.durable.keys() {
            if let Some(key) = durable_key.strip_prefix(DURABLE_KEY_PREFIX) {
                if key.contains(pattern) {
                    self.durable.delete(&durable_key);
                }
            }
        }

        debug!(%pattern, "cleared cache entries matching pattern");
    }

    // == Invalidate ==
    /// Clears every pattern belonging to a semantic topic.
    ///
    /// Call only after the corresponding mutation has succeeded.
    pub fn invalidate(&mut self, topic: Topic) {
        for pattern in topic.patterns() {
            self.clear_pattern(pattern);
        }
        info!(?topic, "invalidated cache topic");
    }

    // == Stats ==
    /// Returns a snapshot of counters and per-tier entry counts.
    pub fn stats(&self) -> CacheStats {
        let durable_entries = self
            .durable
            .keys()
            .iter()
            .filter(|key| key.starts_with(DURABLE_KEY_PREFIX))
            .count();

        let mut stats = self.stats.clone();
        stats.set_entry_counts(self.entries.len(), durable_entries);
        stats
    }

    // == Length ==
    /// Returns the number of in-process entries (fresh or stale).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the in-process map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Internals ==
    fn durable_key(key: &str) -> String {
        format!("{}{}", DURABLE_KEY_PREFIX, key)
    }

    /// Reads and parses a namespaced durable entry.
    ///
    /// Corrupt data is treated as absent, never surfaced as an error.
    fn read_durable(&self, key: &str) -> Option<CacheEntry> {
        let raw = self.durable.get(&Self::durable_key(key))?;
        match serde_json::from_str(&raw) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(%key, %err, "unreadable durable entry, treating as miss");
                None
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn durable_mut(&mut self) -> &mut dyn DurableStore {
        self.durable.as_mut()
    }
}
