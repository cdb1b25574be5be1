//! Location Sidebar Component
//!
//! Location list with active highlight plus the add-location form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::dialog;
use crate::models::Location;
use crate::store::{store_add_location, use_app_store, AppStateStoreFields};

#[component]
pub fn LocationSidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        let Some(base) = ctx.api_base else {
            return;
        };
        spawn_local(async move {
            match api::create_location(base, &name).await {
                Ok(created) => {
                    store_add_location(&store, created);
                    set_new_name.set(String::new());
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Add location failed: {err}").into());
                    dialog::alert("Failed to add location");
                }
            }
        });
    };

    view! {
        <aside class="sidebar">
            <div class="card">
                <h2 class="section-title">"Locations"</h2>

                {move || store.loading_locations().get().then(|| view! { <p>"Loading…"</p> })}
                {move || {
                    store
                        .location_error()
                        .get()
                        .map(|err| view! { <p class="error-text">{err}</p> })
                }}

                <div class="location-list">
                    <For
                        each=move || store.locations().get()
                        key=|loc| loc.id
                        children=move |loc: Location| {
                            let id = loc.id;
                            let is_active = move || store.selected_location_id().get() == Some(id);
                            view! {
                                <button
                                    class=move || {
                                        if is_active() { "location-btn active" } else { "location-btn" }
                                    }
                                    on:click=move |_| store.selected_location_id().set(Some(id))
                                >
                                    {loc.name.clone()}
                                </button>
                            }
                        }
                    />
                </div>

                <form on:submit=on_add>
                    <input
                        class="input w-100"
                        placeholder="Location name"
                        prop:value=move || new_name.get()
                        on:input=move |ev| set_new_name.set(event_target_value(&ev))
                    />
                    <button class="btn-primary w-100" type="submit">"+ Add Location"</button>
                </form>
            </div>
        </aside>
    }
}
