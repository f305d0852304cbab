//! Service Module
//!
//! The club-API consumers of the cache: an HTTP client plus read-through
//! wrappers around the lost-and-found endpoints.

mod client;
mod lost_found;

pub use client::ApiClient;
pub use lost_found::LostFoundService;

use std::future::Future;

use serde_json::Value;
use tokio::sync::RwLock;

use crate::cache::{CacheStore, Params};
use crate::error::Result;

// == Read Through ==
/// Cache-first fetch: returns the cached payload when fresh, otherwise runs
/// `fetch` and writes the result back under the given TTL.
///
/// The lock is released while `fetch` runs, so two concurrent callers that
/// both miss will both fetch; the last write wins. That redundancy is
/// accepted, both fetches return equivalent data. A failed fetch writes
/// nothing: errors are never cached.
pub async fn read_through<F, Fut>(
    cache: &RwLock<CacheStore>,
    endpoint: &str,
    params: &Params,
    ttl_ms: Option<u64>,
    fetch: F,
) -> Result<Value>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Value>>,
{
    {
        let mut cache = cache.write().await;
        if let Some(data) = cache.get(endpoint, params) {
            return Ok(data);
        }
    }

    let data = fetch().await?;
    cache
        .write()
        .await
        .set(endpoint, params, data.clone(), ttl_ms);
    Ok(data)
}
