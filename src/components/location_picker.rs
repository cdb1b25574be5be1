//! Location Picker Component
//!
//! Dropdown bound to the same selection state as the sidebar buttons;
//! this is what narrow screens use instead of the sidebar.

use leptos::prelude::*;

use crate::models::Location;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LocationPicker() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card location-picker">
            <label class="picker-label">"Location"</label>
            <select
                class="input w-100"
                on:change=move |ev| {
                    if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                        store.selected_location_id().set(Some(id));
                    }
                }
            >
                <For
                    each=move || store.locations().get()
                    key=|loc| loc.id
                    children=move |loc: Location| {
                        let id = loc.id;
                        view! {
                            <option
                                value=id.to_string()
                                selected=move || store.selected_location_id().get() == Some(id)
                            >
                                {loc.name.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
