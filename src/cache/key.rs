//! Cache Key Module
//!
//! Deterministic cache-key generation from an endpoint plus a parameter bag.

use std::collections::BTreeMap;

use serde_json::Value;

/// Parameter bag attached to a read endpoint.
///
/// Insertion order is irrelevant for key generation; `build_key` sorts
/// parameter names before serializing.
pub type Params = serde_json::Map<String, Value>;

// == Build Key ==
/// Produces a stable string key for an (endpoint, params) pair.
///
/// Parameter names are sorted lexicographically and the sorted map is
/// serialized as JSON, so two calls with the same parameter set resolve to
/// the same key regardless of insertion order. An empty bag serializes as
/// `{}`, giving keys of the form `endpoint_{}`.
pub fn build_key(endpoint: &str, params: &Params) -> String {
    let sorted: BTreeMap<&str, &Value> = params.iter().map(|(k, v)| (k.as_str(), v)).collect();
    let serialized = serde_json::to_string(&sorted).unwrap_or_else(|_| "{}".to_string());
    format!("{}_{}", endpoint, serialized)
}
