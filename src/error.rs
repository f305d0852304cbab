//! Error types for the desk cache
//!
//! Provides unified error handling using thiserror.
//!
//! Durable-store failures never escape the cache: `CacheStore` recovers from
//! them internally (corrupt entries read as misses, capacity errors trigger
//! pruning). `StoreError` exists for the `DurableStore` implementations
//! themselves. `ApiError` covers the service layer's network calls.

use thiserror::Error;

// == Store Error Enum ==
/// Failures of the durable cache tier.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store rejected a write because it is at capacity
    #[error("durable store full: {0}")]
    Capacity(String),

    /// Underlying I/O failure (file-backed stores)
    #[error("durable store I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted data could not be serialized or parsed
    #[error("corrupt durable entry: {0}")]
    Corrupt(String),
}

// == API Error Enum ==
/// Failures of the service layer's HTTP calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, ...)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status} for {path}")]
    Status {
        status: reqwest::StatusCode,
        path: String,
    },

    /// The response body did not match the expected shape
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the service layer.
pub type Result<T> = std::result::Result<T, ApiError>;
