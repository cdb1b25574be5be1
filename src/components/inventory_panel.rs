//! Inventory Panel Component
//!
//! Per-location item table with the server-side search box. The search
//! text lives in the store so the reload effect in `app.rs` can key on it.

use leptos::prelude::*;

use crate::components::{ItemCard, ItemRow};
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryPanel() -> impl IntoView {
    let store = use_app_store();

    let selected_name = move || {
        store.selected_location_id().get().and_then(|id| {
            store
                .locations()
                .get()
                .into_iter()
                .find(|l| l.id == id)
                .map(|l| l.name)
        })
    };

    view! {
        <section class="card">
            <div class="main-header">
                <h2 class="section-title">
                    "Inventory"
                    {move || selected_name().map(|name| format!(" – {name}")).unwrap_or_default()}
                </h2>
                <input
                    class="input search-input"
                    placeholder="Search items"
                    prop:value=move || store.item_search().get()
                    on:input=move |ev| store.item_search().set(event_target_value(&ev))
                />
            </div>

            {move || {
                store
                    .items_error()
                    .get()
                    .map(|err| view! { <p class="error-text">{err}</p> })
            }}
            {move || store.loading_items().get().then(|| view! { <p>"Loading items..."</p> })}

            <div class="desktop-table">
                <table class="inventory-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Barcode"</th>
                            <th>"Qty"</th>
                            <th>"Updated"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.items().get()
                            // key on content, not just ID, so merged/edited rows re-render
                            key=|item| (
                                item.id,
                                item.quantity,
                                item.item_name.clone(),
                                item.barcode.clone(),
                                item.updated_at.clone(),
                            )
                            children=move |item: Item| view! { <ItemRow item /> }
                        />
                        {move || {
                            (store.items().get().is_empty() && !store.loading_items().get()).then(|| {
                                view! {
                                    <tr>
                                        <td colspan="5" class="empty-row">
                                            "No items for this location."
                                        </td>
                                    </tr>
                                }
                            })
                        }}
                    </tbody>
                </table>
            </div>

            // narrow screens swap the table for these cards
            <div class="item-card-list">
                <For
                    each=move || store.items().get()
                    key=|item| (
                        item.id,
                        item.quantity,
                        item.item_name.clone(),
                        item.barcode.clone(),
                        item.updated_at.clone(),
                    )
                    children=move |item: Item| view! { <ItemCard item /> }
                />
            </div>
        </section>
    }
}
