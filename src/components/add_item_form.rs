//! Add Item Form Component
//!
//! Create form for the selected location: name, optional barcode, quantity.
//! Empty or non-numeric quantity input counts as 0 here (unlike edit-save).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::NewItem;
use crate::store::{self, store_insert_item, use_app_store, AppStateStoreFields};

#[component]
pub fn AddItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_barcode, set_new_barcode) = signal(String::new());
    let (new_qty, set_new_qty) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(base) = ctx.api_base else {
            return;
        };
        let Some(location_id) = store.selected_location_id().get() else {
            return;
        };
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let barcode = new_barcode.get();
        let quantity = store::parse_quantity_or_zero(&new_qty.get());

        spawn_local(async move {
            let item = NewItem {
                item_name: &name,
                quantity,
                barcode: store::normalize_barcode(&barcode),
                location_id,
            };
            match api::create_item(base, &item).await {
                Ok(created) => {
                    store_insert_item(&store, created);
                    set_new_name.set(String::new());
                    set_new_barcode.set(String::new());
                    set_new_qty.set(String::new());
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Add item failed: {err}").into());
                    dialog::alert("Failed to add item");
                }
            }
        });
    };

    view! {
        <section class="card">
            <h3 class="section-title">"Add Item"</h3>

            <form class="flex-wrap" on:submit=on_submit>
                <input
                    class="input"
                    placeholder="Item name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    placeholder="Barcode (optional)"
                    prop:value=move || new_barcode.get()
                    on:input=move |ev| set_new_barcode.set(event_target_value(&ev))
                />
                <input
                    class="input qty-input"
                    type="number"
                    placeholder="Qty"
                    prop:value=move || new_qty.get()
                    on:input=move |ev| set_new_qty.set(event_target_value(&ev))
                />
                <button class="btn-primary" type="submit">"Add"</button>
            </form>
        </section>
    }
}
