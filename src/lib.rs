//! Desk Cache - response caching for the front-office desk client
//!
//! Provides a two-tier (memory + durable) response cache with TTL expiration,
//! topic-based invalidation, and a read-through service layer over the club API.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use cache::{CacheStore, DurableStore, FileStore, MemoryStore, Topic};
pub use config::Config;
pub use service::{ApiClient, LostFoundService};
