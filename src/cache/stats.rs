//! Cache Statistics Module
//!
//! Tracks cache performance metrics and tier occupancy.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache counters and per-tier entry counts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Entries currently held in the in-process map
    pub memory_entries: usize,
    /// Namespaced entries currently held in the durable store
    pub durable_entries: usize,
    /// Sum of both tiers (a key may be counted in each)
    pub total_entries: usize,
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (absent or stale)
    pub misses: u64,
    /// Number of durable entries removed by pruning
    pub evictions: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Evictions ==
    /// Adds pruned entries to the eviction counter.
    pub fn record_evictions(&mut self, count: u64) {
        self.evictions += count;
    }

    // == Update Entry Counts ==
    /// Updates the per-tier entry counts.
    pub fn set_entry_counts(&mut self, memory: usize, durable: usize) {
        self.memory_entries = memory;
        self.durable_entries = durable;
        self.total_entries = memory + durable;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = CacheStats::new();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.total_entries, 0);
    }

    #[test]
    fn test_hit_rate_no_requests() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_mixed() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[test]
    fn test_record_evictions() {
        let mut stats = CacheStats::new();
        stats.record_evictions(2);
        stats.record_evictions(1);
        assert_eq!(stats.evictions, 3);
    }

    #[test]
    fn test_set_entry_counts() {
        let mut stats = CacheStats::new();
        stats.set_entry_counts(3, 5);
        assert_eq!(stats.memory_entries, 3);
        assert_eq!(stats.durable_entries, 5);
        assert_eq!(stats.total_entries, 8);
    }
}
