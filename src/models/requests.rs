//! Request DTOs for the club API
//!
//! Defines the structure of outgoing mutation payloads and query parameters.

use serde::Serialize;
use serde_json::Value;

use crate::cache::Params;

/// Payload for reporting a lost item (POST /items/lost/)
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewLostItem {
    /// "card" or "item"
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last_four: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_lost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
}

/// Payload for registering a found item (POST /items/found/)
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewFoundItem {
    /// "card" or "item"
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last_four: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finder_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
}

/// Pickup details posted when an item is handed over (POST /items/found/:id/pick/)
#[derive(Debug, Clone, Serialize)]
pub struct PickerInfo {
    pub picked_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker_phone: Option<String>,
}

/// Payload for a manual pickup-log entry (POST /items/pickuplogs/)
#[derive(Debug, Clone, Serialize)]
pub struct NewPickupLog {
    pub item_id: i64,
    pub picked_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker_phone: Option<String>,
}

/// Query parameters for the item list endpoints.
///
/// Doubles as the cache parameter bag: `to_params` produces the map fed to
/// the key builder, so identical filters always share a cache entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemQuery {
    /// "card" or "item"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<String>,
}

impl ItemQuery {
    /// Returns a query filtering on item type.
    pub fn of_type(item_type: impl Into<String>) -> Self {
        Self {
            item_type: Some(item_type.into()),
            ..Self::default()
        }
    }

    /// Converts the set filters into a cache parameter bag.
    pub fn to_params(&self) -> Params {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Params::new(),
        }
    }
}
