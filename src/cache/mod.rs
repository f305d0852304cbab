//! Cache Module
//!
//! Two-tier response cache: an in-process map in front of a durable
//! key/value store, with TTL expiration and topic-based invalidation.

mod durable;
mod entry;
mod evict;
mod invalidate;
mod key;
mod stats;
mod store;


// Re-export public types
pub use durable::{DurableStore, FileStore, MemoryStore};
pub use entry::{now_ms, CacheEntry};
pub use evict::prune_oldest;
pub use invalidate::Topic;
pub use key::{build_key, Params};
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default TTL for volatile list responses (5 minutes)
pub const CACHE_DURATION_MS: u64 = 5 * 60 * 1000;

/// TTL for aggregate/statistics responses (15 minutes)
pub const LONG_CACHE_DURATION_MS: u64 = 15 * 60 * 1000;

/// Prefix namespacing this cache's entries within the durable store
pub const DURABLE_KEY_PREFIX: &str = "cache_";

/// Share of durable entries removed when the store rejects a write
pub const PRUNE_FRACTION: f64 = 0.2;
