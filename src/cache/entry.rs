//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.
//! The serialized form of `CacheEntry` is also the persisted value format
//! in the durable store: `{"data": ..., "timestamp": ..., "duration": ..., "key": ...}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// == Cache Entry ==
/// A single cached response with its freshness metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The cached response payload
    pub data: Value,
    /// Write instant (Unix milliseconds)
    pub timestamp: u64,
    /// TTL in milliseconds
    pub duration: u64,
    /// The cache key this entry was stored under
    pub key: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(key: String, data: Value, duration_ms: u64) -> Self {
        Self {
            data,
            timestamp: now_ms(),
            duration: duration_ms,
            key,
        }
    }

    // == Is Valid ==
    /// Checks whether the entry is still fresh.
    ///
    /// An entry is valid iff `now - timestamp < duration`. At exactly
    /// `timestamp + duration` the entry is stale.
    pub fn is_valid(&self) -> bool {
        now_ms().saturating_sub(self.timestamp) < self.duration
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        now_ms().saturating_sub(self.timestamp)
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_fresh_on_creation() {
        let entry = CacheEntry::new("k".to_string(), json!(["a"]), 5_000);

        assert!(entry.is_valid());
        assert!(entry.age_ms() < 1_000);
    }

    #[test]
    fn test_entry_expires_after_duration() {
        let entry = CacheEntry::new("k".to_string(), json!(1), 50);

        assert!(entry.is_valid());
        sleep(Duration::from_millis(60));
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_entry_zero_duration_is_stale() {
        let entry = CacheEntry::new("k".to_string(), json!(1), 0);
        assert!(!entry.is_valid());
    }

    #[test]
    fn test_validity_boundary() {
        // Exactly at timestamp + duration the entry is stale
        let entry = CacheEntry {
            data: json!(null),
            timestamp: now_ms().saturating_sub(1_000),
            duration: 1_000,
            key: "k".to_string(),
        };
        assert!(!entry.is_valid(), "entry should be stale at the boundary");
    }

    #[test]
    fn test_entry_backdated_timestamp() {
        let entry = CacheEntry {
            data: json!([1, 2]),
            timestamp: now_ms() - 10_000,
            duration: 5_000,
            key: "k".to_string(),
        };
        assert!(!entry.is_valid());
        assert!(entry.age_ms() >= 10_000);
    }

    #[test]
    fn test_entry_roundtrips_through_json() {
        let entry = CacheEntry::new(
            "/items/lost_{}".to_string(),
            json!([{"id": 1, "name": "umbrella"}]),
            5_000,
        );

        let raw = serde_json::to_string(&entry).unwrap();
        let parsed: CacheEntry = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed.key, entry.key);
        assert_eq!(parsed.timestamp, entry.timestamp);
        assert_eq!(parsed.duration, entry.duration);
        assert_eq!(parsed.data, entry.data);
    }
}
