//! Response DTOs for the club API
//!
//! Defines the structure of response bodies returned by the lost-and-found
//! endpoints. List endpoints return either a bare array or a paginated
//! `{"results": [...]}` wrapper; `Page` absorbs both shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reported lost item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostItem {
    pub id: i64,
    /// "card" or "item"
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub card_last_four: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub place_lost: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub reporter_phone: Option<String>,
    #[serde(default)]
    pub reporter_email: Option<String>,
    pub status: String,
    #[serde(default)]
    pub date_reported: Option<DateTime<Utc>>,
}

/// A registered found item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundItem {
    pub id: i64,
    /// "card" or "item"
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub card_last_four: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub place_found: Option<String>,
    #[serde(default)]
    pub finder_name: Option<String>,
    #[serde(default)]
    pub finder_phone: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub status: String,
    #[serde(default)]
    pub date_reported: Option<DateTime<Utc>>,
}

/// Aggregate lost-and-found statistics (GET /items/stats/).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostFoundStats {
    pub total: u64,
    pub pending: u64,
    pub picked: u64,
    #[serde(default)]
    pub shelves_occupied: Option<u64>,
}

/// A suggested pairing between a lost report and a found item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialMatch {
    pub lost_item_id: i64,
    pub found_item_id: i64,
    pub match_score: f64,
    #[serde(default)]
    pub lost_item: Option<LostItem>,
    #[serde(default)]
    pub found_item: Option<FoundItem>,
}

/// One entry of the pickup history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupLog {
    pub id: i64,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub picked_by: Option<String>,
    #[serde(default)]
    pub picker_phone: Option<String>,
    #[serde(default)]
    pub picked_at: Option<DateTime<Utc>>,
}

// == Page ==
/// A list response in either of the API's two shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    /// Paginated wrapper: `{"count": ..., "results": [...]}`
    Paginated {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    /// Bare array
    Plain(Vec<T>),
}

impl<T> Page<T> {
    /// Unwraps the rows regardless of response shape.
    pub fn into_results(self) -> Vec<T> {
        match self {
            Page::Paginated { results, .. } => results,
            Page::Plain(results) => results,
        }
    }
}
