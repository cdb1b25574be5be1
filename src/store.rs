//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The pure
//! collection logic (sorting, merge-by-id, quantity parsing, search
//! decoration) lives here as free functions so it can be tested without a
//! browser; the `store_*` helpers wrap it for the reactive store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AdjustRequest, Item, Location, QuantityDelta, SearchResult};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All known locations, in server order plus local appends
    pub locations: Vec<Location>,
    pub loading_locations: bool,
    pub location_error: Option<String>,
    /// Currently selected location ID
    pub selected_location_id: Option<i64>,

    /// Items of the selected location, sorted by name
    pub items: Vec<Item>,
    pub loading_items: bool,
    pub items_error: Option<String>,
    /// Per-location search text (server-side filter)
    pub item_search: String,

    /// Catalogue-wide search results, decorated with location names
    pub search_results: Vec<SearchResult>,
    pub search_loading: bool,
    pub search_error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Pure Collection Logic
// ========================

/// Sort items by name, ascending, case-insensitively.
pub fn sort_items(items: &mut [Item]) {
    items.sort_by(|a, b| {
        a.item_name
            .to_lowercase()
            .cmp(&b.item_name.to_lowercase())
    });
}

/// Append a freshly created item and restore the sort order.
pub fn insert_item(items: &mut Vec<Item>, item: Item) {
    items.push(item);
    sort_items(items);
}

/// Merge server-updated rows into the collection by ID.
///
/// Rows we do not hold locally are ignored; everything else is left
/// untouched. Re-sorts afterward since a concurrent edit could have
/// renamed a returned row.
pub fn merge_updated_rows(items: &mut Vec<Item>, updated: Vec<Item>) {
    for row in updated {
        if let Some(existing) = items.iter_mut().find(|i| i.id == row.id) {
            *existing = row;
        }
    }
    sort_items(items);
}

/// Replace a single item by ID after an edit-save and restore the sort order.
pub fn replace_item(items: &mut Vec<Item>, updated: Item) {
    if let Some(existing) = items.iter_mut().find(|i| i.id == updated.id) {
        *existing = updated;
    }
    sort_items(items);
}

/// Selection after a location load: keep the current one, otherwise take
/// the first returned location.
pub fn default_selection(current: Option<i64>, locations: &[Location]) -> Option<i64> {
    current.or_else(|| locations.first().map(|l| l.id))
}

/// Quantity parse for item creation: empty or non-numeric input counts as 0.
pub fn parse_quantity_or_zero(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

/// Quantity parse for edit-save: empty or non-numeric input means
/// "no change" (`None`), NOT zero. This asymmetry with
/// [`parse_quantity_or_zero`] is deliberate.
pub fn parse_quantity_update(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}

/// Blank-after-trim barcodes become `None`.
pub fn normalize_barcode(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Decorate raw search hits with a location name resolved from the current
/// location snapshot; unknown locations render as `Unknown (<id>)`.
pub fn decorate_search_results(locations: &[Location], hits: Vec<Item>) -> Vec<SearchResult> {
    hits.into_iter()
        .map(|item| {
            let location_name = locations
                .iter()
                .find(|l| l.id == item.location_id)
                .map(|l| l.name.clone())
                .unwrap_or_else(|| format!("Unknown ({})", item.location_id));
            SearchResult { item, location_name }
        })
        .collect()
}

/// Build the single-delta adjustment batch, or `None` when the operation
/// must not issue a request (zero delta, nothing selected).
pub fn adjustment_request(selected: Option<i64>, item_id: i64, delta: i64) -> Option<AdjustRequest> {
    let location_id = selected?;
    if delta == 0 {
        return None;
    }
    Some(AdjustRequest {
        location_id,
        items: vec![QuantityDelta { id: item_id, delta }],
    })
}

// ========================
// Store Helper Functions
// ========================

/// Replace the location collection, selecting the first location if none
/// is selected yet.
pub fn store_set_locations(store: &AppStore, locations: Vec<Location>) {
    let selected = default_selection(store.selected_location_id().get_untracked(), &locations);
    store.locations().set(locations);
    store.selected_location_id().set(selected);
}

/// Append a created location, preserving prior order.
pub fn store_add_location(store: &AppStore, location: Location) {
    store.locations().write().push(location);
}

/// Insert a created item and re-sort.
pub fn store_insert_item(store: &AppStore, item: Item) {
    let items_field = store.items();
    let mut items = items_field.write();
    insert_item(&mut items, item);
}

/// Merge adjusted rows by ID and re-sort.
pub fn store_merge_updated(store: &AppStore, updated: Vec<Item>) {
    let items_field = store.items();
    let mut items = items_field.write();
    merge_updated_rows(&mut items, updated);
}

/// Replace an edited item by ID and re-sort.
pub fn store_replace_item(store: &AppStore, updated: Item) {
    let items_field = store.items();
    let mut items = items_field.write();
    replace_item(&mut items, updated);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: i64, name: &str, quantity: i64) -> Item {
        Item {
            id,
            item_name: name.to_string(),
            barcode: None,
            quantity,
            location_id: 1,
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn make_location(id: i64, name: &str) -> Location {
        Location {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut items = vec![
            make_item(1, "zinc", 1),
            make_item(2, "Apple", 1),
            make_item(3, "bolt", 1),
        ];
        sort_items(&mut items);
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "bolt", "zinc"]);
    }

    #[test]
    fn test_insert_item_appears_once_and_sorted() {
        let mut items = vec![make_item(1, "Anvil", 5), make_item(2, "Crate", 2)];
        insert_item(&mut items, make_item(3, "Bucket", 1));
        assert_eq!(items.len(), 3);
        assert_eq!(items.iter().filter(|i| i.id == 3).count(), 1);
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Anvil", "Bucket", "Crate"]);
    }

    #[test]
    fn test_merge_replaces_only_returned_rows() {
        let mut items = vec![make_item(1, "A", 5), make_item(2, "B", 2)];
        merge_updated_rows(&mut items, vec![make_item(2, "B", 3)]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].quantity, 5);
        assert_eq!(items[1].id, 2);
        assert_eq!(items[1].quantity, 3);
    }

    #[test]
    fn test_merge_ignores_unknown_rows() {
        let mut items = vec![make_item(1, "A", 5)];
        merge_updated_rows(&mut items, vec![make_item(99, "Ghost", 1)]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_merge_resorts_after_concurrent_rename() {
        let mut items = vec![make_item(1, "Anvil", 5), make_item(2, "Bucket", 2)];
        // the server may hand back a row renamed by a concurrent edit
        merge_updated_rows(&mut items, vec![make_item(1, "Zebra feed", 6)]);
        let names: Vec<&str> = items.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, vec!["Bucket", "Zebra feed"]);
    }

    #[test]
    fn test_replace_item_by_id_and_resort() {
        let mut items = vec![make_item(1, "Anvil", 5), make_item(2, "Bucket", 2)];
        replace_item(&mut items, make_item(1, "Washer", 5));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_name, "Bucket");
        assert_eq!(items[1].item_name, "Washer");
    }

    #[test]
    fn test_default_selection_takes_first_when_none() {
        let locations = vec![make_location(4, "Depot"), make_location(7, "Annex")];
        assert_eq!(default_selection(None, &locations), Some(4));
        assert_eq!(default_selection(Some(7), &locations), Some(7));
        assert_eq!(default_selection(None, &[]), None);
    }

    #[test]
    fn test_create_quantity_coerces_to_zero() {
        assert_eq!(parse_quantity_or_zero(""), 0);
        assert_eq!(parse_quantity_or_zero("abc"), 0);
        assert_eq!(parse_quantity_or_zero(" 12 "), 12);
        assert_eq!(parse_quantity_or_zero("-3"), -3);
    }

    #[test]
    fn test_edit_quantity_uses_no_change_sentinel() {
        assert_eq!(parse_quantity_update(""), None);
        assert_eq!(parse_quantity_update("abc"), None);
        assert_eq!(parse_quantity_update("12"), Some(12));
    }

    #[test]
    fn test_normalize_barcode() {
        assert_eq!(normalize_barcode(""), None);
        assert_eq!(normalize_barcode("   "), None);
        assert_eq!(normalize_barcode(" 978020137962 "), Some("978020137962"));
    }

    #[test]
    fn test_search_decoration_resolves_known_and_unknown() {
        let locations = vec![make_location(1, "Warehouse")];
        let known = make_item(9, "Widget", 4);
        let mut unknown = make_item(10, "Gadget", 1);
        unknown.location_id = 2;

        let decorated = decorate_search_results(&locations, vec![known, unknown]);
        assert_eq!(decorated[0].location_name, "Warehouse");
        assert_eq!(decorated[1].location_name, "Unknown (2)");
    }

    #[test]
    fn test_adjustment_request_noops() {
        assert!(adjustment_request(Some(1), 9, 0).is_none());
        assert!(adjustment_request(None, 9, 1).is_none());
    }

    #[test]
    fn test_adjustment_request_is_single_delta_batch() {
        let request = adjustment_request(Some(3), 9, -1).unwrap();
        assert_eq!(request.location_id, 3);
        assert_eq!(request.items, vec![QuantityDelta { id: 9, delta: -1 }]);
    }
}
