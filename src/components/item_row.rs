//! Item Row Component
//!
//! One inventory table row: display mode with +1/-1/Edit actions, and an
//! inline edit mode with Save/Cancel. Cancel restores the pristine values.
//!
//! The adjust and save handlers are shared with the mobile `ItemCard`
//! rendering of the same rows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

use crate::api;
use crate::context::{use_app_context, AppContext};
use crate::dialog;
use crate::models::{Item, ItemUpdate};
use crate::store::{self, store_merge_updated, store_replace_item, use_app_store, AppStateStoreFields, AppStore};

/// Render a timestamp in the browser locale, falling back to the raw
/// string when it does not parse as a date.
pub(crate) fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "—".to_string();
    }
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        raw.to_string()
    } else {
        date.to_locale_string("default", &JsValue::UNDEFINED).into()
    }
}

/// Send a single-delta adjustment and merge the returned rows.
pub(crate) fn adjust_quantity(ctx: AppContext, store: AppStore, item_id: i64, delta: i64) {
    let Some(base) = ctx.api_base else {
        return;
    };
    let Some(request) = store::adjustment_request(store.selected_location_id().get(), item_id, delta)
    else {
        return;
    };
    spawn_local(async move {
        match api::adjust_inventory(base, &request).await {
            Ok(updated) => store_merge_updated(&store, updated),
            Err(err) => {
                web_sys::console::log_1(&format!("[APP] Adjust failed: {err}").into());
                dialog::alert("Failed to update quantity");
            }
        }
    });
}

/// Send the full-record update and replace the returned row.
pub(crate) fn save_item_edit(
    ctx: AppContext,
    store: AppStore,
    item_id: i64,
    name: String,
    barcode: String,
    qty_text: String,
) {
    let Some(base) = ctx.api_base else {
        return;
    };
    let name = name.trim().to_string();
    let quantity = store::parse_quantity_update(&qty_text);
    spawn_local(async move {
        let update = ItemUpdate {
            item_name: &name,
            barcode: store::normalize_barcode(&barcode),
            quantity,
        };
        match api::update_item(base, item_id, &update).await {
            Ok(updated) => store_replace_item(&store, updated),
            Err(err) => {
                web_sys::console::log_1(&format!("[APP] Save item failed: {err}").into());
                dialog::alert("Failed to save item");
            }
        }
    });
}

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
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
        <tr>
            <td>
                {move || {
                    if edit_mode.get() {
                        view! {
                            <input
                                class="input w-100"
                                prop:value=move || temp_name.get()
                                on:input=move |ev| set_temp_name.set(event_target_value(&ev))
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span>{display_name.clone()}</span> }.into_any()
                    }
                }}
            </td>

            <td>
                {move || {
                    if edit_mode.get() {
                        view! {
                            <input
                                class="input w-100"
                                prop:value=move || temp_barcode.get()
                                on:input=move |ev| set_temp_barcode.set(event_target_value(&ev))
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span>{display_barcode.clone()}</span> }.into_any()
                    }
                }}
            </td>

            <td>
                {move || {
                    if edit_mode.get() {
                        view! {
                            <input
                                class="input qty-input"
                                type="number"
                                prop:value=move || temp_qty.get()
                                on:input=move |ev| set_temp_qty.set(event_target_value(&ev))
                            />
                        }
                            .into_any()
                    } else {
                        view! { <span>{display_qty}</span> }.into_any()
                    }
                }}
            </td>

            <td>{display_updated}</td>

            <td>
                {move || {
                    if edit_mode.get() {
                        view! {
                            <button class="btn-primary" on:click=save>"Save"</button>
                            <button class="btn-secondary" on:click=cancel>"Cancel"</button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button class="btn-qty" on:click=move |_| adjust_quantity(ctx, store, id, 1)>
                                "+1"
                            </button>
                            <button class="btn-qty" on:click=move |_| adjust_quantity(ctx, store, id, -1)>
                                "-1"
                            </button>
                            <button class="btn-secondary" on:click=move |_| set_edit_mode.set(true)>
                                "Edit"
                            </button>
                        }
                            .into_any()
                    }
                }}
            </td>
        </tr>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_falls_back_on_empty() {
        assert_eq!(format_timestamp(""), "—");
    }
}
