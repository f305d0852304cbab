//! Lost & Found Service
//!
//! Read-through wrappers for the lost-and-found endpoints. Reads consult the
//! cache before the network; mutations invalidate the affected cache topics,
//! and only after the server confirms the mutation.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::warn;

use crate::cache::{CacheStore, FileStore, MemoryStore, Topic, LONG_CACHE_DURATION_MS};
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    FoundItem, ItemQuery, LostFoundStats, LostItem, NewFoundItem, NewLostItem, NewPickupLog, Page,
    PickerInfo, PickupLog, PotentialMatch,
};
use crate::service::{read_through, ApiClient};

// Cache endpoint identifiers; chosen so each falls under exactly the
// invalidation topics that cover it.
const LOST_ITEMS_ENDPOINT: &str = "/items/lost";
const FOUND_ITEMS_ENDPOINT: &str = "/items/found";
const MATCHES_ENDPOINT: &str = "/items/found/generate_matches";
const PICKUPS_ENDPOINT: &str = "/items/pickuplogs/pickuphistory";
const STATS_ENDPOINT: &str = "/items/stats";

// == Lost Found Service ==
/// Client-side service for the lost-and-found endpoints.
///
/// Shares one `CacheStore` across all calls; clones share the same cache.
#[derive(Debug, Clone)]
pub struct LostFoundService {
    client: ApiClient,
    cache: Arc<RwLock<CacheStore>>,
    long_ttl_ms: u64,
}

impl LostFoundService {
    // == Constructors ==
    /// Creates a service over an existing client and cache.
    pub fn new(client: ApiClient, cache: Arc<RwLock<CacheStore>>) -> Self {
        Self {
            client,
            cache,
            long_ttl_ms: LONG_CACHE_DURATION_MS,
        }
    }

    /// Builds the service from configuration: file-backed durable tier when
    /// a cache file is configured, in-memory otherwise.
    pub fn from_config(config: &Config) -> Self {
        let durable: Box<dyn crate::cache::DurableStore> = match &config.cache_file {
            Some(path) => match FileStore::open(path, Some(config.durable_capacity)) {
                Ok(store) => Box::new(store),
                Err(err) => {
                    warn!(path = %path.display(), %err, "cache file unusable, using in-memory store");
                    Box::new(MemoryStore::with_capacity(config.durable_capacity))
                }
            },
            None => Box::new(MemoryStore::with_capacity(config.durable_capacity)),
        };

        let cache = CacheStore::with_default_ttl(durable, config.default_ttl_ms);
        Self {
            client: ApiClient::new(&config.api_base_url),
            cache: Arc::new(RwLock::new(cache)),
            long_ttl_ms: config.long_ttl_ms,
        }
    }

    /// Returns a handle to the shared cache (stats, manual invalidation).
    pub fn cache(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.cache)
    }

    // == Reads ==
    /// Lists lost items matching the query.
    pub async fn lost_items(&self, query: &ItemQuery) -> Result<Vec<LostItem>> {
        self.cached_list(LOST_ITEMS_ENDPOINT, "/items/lost/", query)
            .await
    }

    /// Lists found items matching the query.
    pub async fn found_items(&self, query: &ItemQuery) -> Result<Vec<FoundItem>> {
        self.cached_list(FOUND_ITEMS_ENDPOINT, "/items/found/", query)
            .await
    }

    /// Lists suggested lost/found pairings.
    pub async fn potential_matches(&self) -> Result<Vec<PotentialMatch>> {
        self.cached_list(MATCHES_ENDPOINT, "/items/found/generate_matches/", &ItemQuery::default())
            .await
    }

    /// Lists the recent pickup history.
    pub async fn recent_pickups(&self) -> Result<Vec<PickupLog>> {
        self.cached_list(PICKUPS_ENDPOINT, "/items/pickuplogs/pickuphistory/", &ItemQuery::default())
            .await
    }

    /// Fetches aggregate statistics, cached under the long TTL tier.
    pub async fn stats(&self) -> Result<LostFoundStats> {
        let params = ItemQuery::default().to_params();
        let client = &self.client;
        let value = read_through(
            &self.cache,
            STATS_ENDPOINT,
            &params,
            Some(self.long_ttl_ms),
            || async move { client.get_json::<()>("/items/stats/", None).await },
        )
        .await?;
        Ok(serde_json::from_value(value)?)
    }

    // == Mutations ==
    /// Reports a lost item, then invalidates item, stats, and match caches.
    pub async fn create_lost_item(&self, item: &NewLostItem) -> Result<LostItem> {
        let body = self.client.post_json("/items/lost/", item).await?;
        let created = serde_json::from_value(body)?;
        self.invalidate(&[Topic::Items, Topic::Stats, Topic::Matches])
            .await;
        Ok(created)
    }

    /// Registers a found item, then invalidates item, stats, and match caches.
    pub async fn create_found_item(&self, item: &NewFoundItem) -> Result<FoundItem> {
        let body = self.client.post_json("/items/found/", item).await?;
        let created = serde_json::from_value(body)?;
        self.invalidate(&[Topic::Items, Topic::Stats, Topic::Matches])
            .await;
        Ok(created)
    }

    /// Marks a lost item as found.
    pub async fn mark_as_found(&self, id: i64) -> Result<LostItem> {
        let path = format!("/items/lost/{}/mark_found/", id);
        let body = self.client.post_json(&path, &Value::Null).await?;
        let updated = serde_json::from_value(body)?;
        self.invalidate(&[Topic::Items, Topic::Stats, Topic::Matches, Topic::Pickups])
            .await;
        Ok(updated)
    }

    /// Hands a found item over to its owner.
    pub async fn pick_found_item(&self, id: i64, picker: &PickerInfo) -> Result<FoundItem> {
        let path = format!("/items/found/{}/pick/", id);
        let body = self.client.post_json(&path, picker).await?;
        let updated = serde_json::from_value(body)?;
        self.invalidate(&[Topic::Items, Topic::Stats, Topic::Pickups])
            .await;
        Ok(updated)
    }

    /// Records a manual pickup-log entry.
    pub async fn create_pickup_log(&self, log: &NewPickupLog) -> Result<PickupLog> {
        let body = self.client.post_json("/items/pickuplogs/", log).await?;
        let created = serde_json::from_value(body)?;
        self.invalidate(&[Topic::Items, Topic::Stats, Topic::Pickups])
            .await;
        Ok(created)
    }

    // == Internals ==
    /// Read-through list fetch: rows are normalized out of the page wrapper
    /// before caching, so cache hits and fresh fetches look identical.
    async fn cached_list<T>(&self, endpoint: &str, path: &str, query: &ItemQuery) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let params = query.to_params();
        let client = &self.client;
        let value = read_through(&self.cache, endpoint, &params, None, || async move {
            let body = client.get_json(path, Some(query)).await?;
            let page: Page<Value> = serde_json::from_value(body)?;
            Ok(Value::Array(page.into_results()))
        })
        .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Runs after a confirmed-successful mutation, never speculatively.
    async fn invalidate(&self, topics: &[Topic]) {
        let mut cache = self.cache.write().await;
        for topic in topics {
            cache.invalidate(*topic);
        }
    }
}
