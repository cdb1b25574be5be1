//! REST Client
//!
//! Thin wrappers over the browser `fetch` API, one function per endpoint.
//! All bodies are JSON; any non-ok status maps to [`ApiError::Status`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config;
use crate::error::ApiError;
use crate::models::{AdjustRequest, AdjustResponse, Item, ItemUpdate, Location, NewItem, NewLocation};

async fn fetch_text(method: &str, url: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("response is not a Response".into()))?;

    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| ApiError::Decode("non-text body".into()))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let text = fetch_text("GET", url, None).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: &str,
    url: &str,
    body: &B,
) -> Result<T, ApiError> {
    let payload = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let text = fetch_text(method, url, Some(payload)).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Path Construction
// ========================

fn inventory_path(location_id: i64, query: &str) -> String {
    let mut path = format!("/inventory?location_id={location_id}");
    let query = query.trim();
    if !query.is_empty() {
        path.push_str("&query=");
        path.push_str(&config::query_value(query));
    }
    path
}

fn search_path(q: &str) -> String {
    format!("/search?q={}", config::query_value(q.trim()))
}

// ========================
// Endpoints
// ========================

pub async fn list_locations(base: &str) -> Result<Vec<Location>, ApiError> {
    get_json(&config::api_url(base, "/locations")).await
}

pub async fn create_location(base: &str, name: &str) -> Result<Location, ApiError> {
    send_json("POST", &config::api_url(base, "/locations"), &NewLocation { name }).await
}

pub async fn list_inventory(base: &str, location_id: i64, query: &str) -> Result<Vec<Item>, ApiError> {
    get_json(&config::api_url(base, &inventory_path(location_id, query))).await
}

pub async fn create_item(base: &str, item: &NewItem<'_>) -> Result<Item, ApiError> {
    send_json("POST", &config::api_url(base, "/items"), item).await
}

pub async fn update_item(base: &str, id: i64, update: &ItemUpdate<'_>) -> Result<Item, ApiError> {
    send_json("PUT", &config::api_url(base, &format!("/items/{id}")), update).await
}

/// Returns only the rows the server actually changed.
pub async fn adjust_inventory(base: &str, request: &AdjustRequest) -> Result<Vec<Item>, ApiError> {
    let resp: AdjustResponse =
        send_json("POST", &config::api_url(base, "/inventory/adjust"), request).await?;
    Ok(resp.updated)
}

pub async fn search_catalogue(base: &str, q: &str) -> Result<Vec<Item>, ApiError> {
    get_json(&config::api_url(base, &search_path(q))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_path_omits_blank_query() {
        assert_eq!(inventory_path(3, ""), "/inventory?location_id=3");
        assert_eq!(inventory_path(3, "   "), "/inventory?location_id=3");
    }

    #[test]
    fn test_inventory_path_encodes_query() {
        assert_eq!(
            inventory_path(7, " blue widget "),
            "/inventory?location_id=7&query=blue%20widget"
        );
    }

    #[test]
    fn test_search_path() {
        assert_eq!(search_path("acme 10mm"), "/search?q=acme%2010mm");
    }

    #[test]
    fn test_item_update_serializes_quantity_sentinel_as_null() {
        let update = ItemUpdate {
            item_name: "Widget",
            barcode: None,
            quantity: None,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r#"{"item_name":"Widget","barcode":null,"quantity":null}"#
        );
    }

    #[test]
    fn test_adjust_request_wire_shape() {
        let request = AdjustRequest {
            location_id: 2,
            items: vec![crate::models::QuantityDelta { id: 9, delta: -1 }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"location_id":2,"items":[{"id":9,"delta":-1}]}"#);
    }
}
