//! Frontend Models
//!
//! Data structures matching the inventory API.

use serde::{Deserialize, Serialize};

/// Storage location (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
}

/// Inventory item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub item_name: String,
    #[serde(default)]
    pub barcode: Option<String>,
    pub quantity: i64,
    pub location_id: i64,
    #[serde(default)]
    pub updated_at: String,
}

/// Global search hit decorated with a resolved location name.
///
/// The decoration happens client-side against the location store snapshot,
/// so `location_name` is never part of the wire format.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub item: Item,
    pub location_name: String,
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
pub struct NewLocation<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct NewItem<'a> {
    pub item_name: &'a str,
    pub quantity: i64,
    pub barcode: Option<&'a str>,
    pub location_id: i64,
}

/// Full-record update. `quantity: None` serializes as `null`, which the
/// backend treats as "leave the quantity unchanged".
#[derive(Serialize)]
pub struct ItemUpdate<'a> {
    pub item_name: &'a str,
    pub barcode: Option<&'a str>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuantityDelta {
    pub id: i64,
    pub delta: i64,
}

/// The adjust endpoint accepts a batch even though this client always
/// sends a single delta.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjustRequest {
    pub location_id: i64,
    pub items: Vec<QuantityDelta>,
}

#[derive(Deserialize)]
pub struct AdjustResponse {
    #[serde(default)]
    pub updated: Vec<Item>,
}
