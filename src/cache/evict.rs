//! Eviction Module
//!
//! Age-based pruning of the durable tier. Pruning runs reactively when the
//! durable store rejects a write; there is no periodic sweep, staleness is
//! handled lazily by the freshness check on `get`.

use tracing::info;

use crate::cache::{CacheEntry, DurableStore, DURABLE_KEY_PREFIX, PRUNE_FRACTION};

// == Prune Oldest ==
/// Removes the oldest share of the cache's durable entries.
///
/// Enumerates the namespaced keys, recovers each entry's write timestamp,
/// and deletes the oldest `ceil(20%)` of them. Entries that fail to parse
/// are treated as timestamp 0 and evicted first. Only keys carrying the
/// cache namespace prefix are considered; unrelated durable data is left
/// untouched.
///
/// Returns the number of entries removed.
pub fn prune_oldest(store: &mut dyn DurableStore) -> usize {
    let mut stamped: Vec<(String, u64)> = store
        .keys()
        .into_iter()
        .filter(|key| key.starts_with(DURABLE_KEY_PREFIX))
        .map(|key| {
            let timestamp = store
                .get(&key)
                .and_then(|raw| serde_json::from_str::<CacheEntry>(&raw).ok())
                .map(|entry| entry.timestamp)
                .unwrap_or(0);
            (key, timestamp)
        })
        .collect();

    if stamped.is_empty() {
        return 0;
    }

    stamped.sort_by_key(|(_, timestamp)| *timestamp);

    let to_remove = ((stamped.len() as f64) * PRUNE_FRACTION).ceil() as usize;
    for (key, _) in stamped.iter().take(to_remove) {
        store.delete(key);
    }

    info!(removed = to_remove, "pruned oldest durable cache entries");
    to_remove
}
