//! Item Card Component
//!
//! Mobile rendering of an inventory row: the media query hides the desktop
//! table under 768px and shows these cards instead. Same handlers as
//! `ItemRow`, stacked-input edit mode.

use leptos::prelude::*;

use crate::components::item_row::{adjust_quantity, format_timestamp, save_item_edit};
use crate::context::use_app_context;
use crate::models::Item;
use crate::store::use_app_store;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = item.id;

    let (edit_mode, set_edit_mode) = signal(false);
    let (temp_name, set_temp_name) = signal(item.item_name.clone());
    let (temp_barcode, set_temp_barcode) = signal(item.barcode.clone().unwrap_or_default());
    let (temp_qty, set_temp_qty) = signal(item.quantity.to_string());

    let display_name = item.item_name.clone();
    let display_barcode = item.barcode.clone().unwrap_or_else(|| "—".to_string());
    let display_qty = item.quantity;
    let display_updated = format_timestamp(&item.updated_at);

    let pristine = StoredValue::new(item);

    let cancel = move |_| {
        let p = pristine.get_value();
        set_edit_mode.set(false);
        set_temp_name.set(p.item_name);
        set_temp_barcode.set(p.barcode.unwrap_or_default());
        set_temp_qty.set(p.quantity.to_string());
    };

    let save = move |_| {
        set_edit_mode.set(false);
        save_item_edit(ctx, store, id, temp_name.get(), temp_barcode.get(), temp_qty.get());
    };

    view! {
        <div class="item-card">
            {move || {
                if edit_mode.get() {
                    view! {
                        <input
                            class="input w-100"
                            prop:value=move || temp_name.get()
                            on:input=move |ev| set_temp_name.set(event_target_value(&ev))
                        />
                        <input
                            class="input w-100"
                            placeholder="Barcode"
                            prop:value=move || temp_barcode.get()
                            on:input=move |ev| set_temp_barcode.set(event_target_value(&ev))
                        />
                        <input
                            class="input w-100"
                            type="number"
                            placeholder="Qty"
                            prop:value=move || temp_qty.get()
                            on:input=move |ev| set_temp_qty.set(event_target_value(&ev))
                        />
                        <button class="btn-primary" on:click=save>"Save"</button>
                        <button class="btn-secondary" on:click=cancel>"Cancel"</button>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="item-card-header">
                            <span class="item-name">{display_name.clone()}</span>
                            <span class="item-meta">{format!("Qty {display_qty}")}</span>
                        </div>
                        <div class="item-meta">{format!("Barcode: {}", display_barcode.clone())}</div>
                        <div class="item-meta">{format!("Updated: {}", display_updated.clone())}</div>
                        <div class="item-card-footer">
                            <button class="btn-qty" on:click=move |_| adjust_quantity(ctx, store, id, 1)>
                                "+1"
                            </button>
                            <button class="btn-qty" on:click=move |_| adjust_quantity(ctx, store, id, -1)>
                                "-1"
                            </button>
                            <button class="btn-secondary" on:click=move |_| set_edit_mode.set(true)>
                                "Edit"
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
