//! Locofly Inventory App
//!
//! Main application component: owns the store, provides context, and runs
//! the reactive load effects.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{AddItemForm, GlobalSearch, InventoryPanel, LocationPicker, LocationSidebar};
use crate::config;
use crate::context::AppContext;
use crate::store::{self, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let api_base = config::api_base();

    // Provide store and config to all children
    provide_context(store);
    provide_context(AppContext::new(api_base));

    // Load locations on mount. Without a base URL the session is dead on
    // arrival; show the warning and never fetch.
    Effect::new(move |_| {
        let Some(base) = api_base else {
            store.location_error().set(Some("API base URL missing".to_string()));
            store.loading_locations().set(false);
            return;
        };
        store.loading_locations().set(true);
        store.location_error().set(None);
        spawn_local(async move {
            match api::list_locations(base).await {
                Ok(locations) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} locations", locations.len()).into(),
                    );
                    store::store_set_locations(&store, locations);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Load locations failed: {err}").into());
                    store.location_error().set(Some("Failed to load locations".to_string()));
                }
            }
            store.loading_locations().set(false);
        });
    });

    // Reload items whenever the selected location or the search text
    // changes. Overlapping responses are not cancelled or sequenced; the
    // last one to land wins.
    Effect::new(move |_| {
        let Some(base) = api_base else {
            return;
        };
        let selected = store.selected_location_id().get();
        let search = store.item_search().get();
        let Some(location_id) = selected else {
            return;
        };
        store.loading_items().set(true);
        store.items_error().set(None);
        spawn_local(async move {
            match api::list_inventory(base, location_id, &search).await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} items for location {location_id}", items.len())
                            .into(),
                    );
                    store.items().set(items);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Load inventory failed: {err}").into());
                    store.items_error().set(Some("Failed to load inventory".to_string()));
                }
            }
            store.loading_items().set(false);
        });
    });

    view! {
        <div class="app-root">
            <header class="header">
                <h1 class="header-title">"Locofly Inventory"</h1>
                <span class="api-hint">
                    "API: " <code>{api_base.unwrap_or("⚠ not set")}</code>
                </span>
            </header>

            <div class="layout">
                <LocationSidebar />

                <main class="main">
                    <LocationPicker />
                    <InventoryPanel />
                    <AddItemForm />
                    <GlobalSearch />
                </main>
            </div>
        </div>
    }
}
