//! Global Search Component
//!
//! Catalogue-wide query independent of the selected location. Results are
//! decorated with a location name resolved from the current location
//! snapshot; the snapshot is not re-fetched for the lookup.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::SearchResult;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn GlobalSearch() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (query, set_query) = signal(String::new());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(base) = ctx.api_base else {
            return;
        };
        let q = query.get().trim().to_string();
        if q.is_empty() {
            return;
        }
        store.search_loading().set(true);
        store.search_results().set(Vec::new());
        store.search_error().set(None);
        spawn_local(async move {
            match api::search_catalogue(base, &q).await {
                Ok(hits) => {
                    let locations = store.locations().get_untracked();
                    store
                        .search_results()
                        .set(store::decorate_search_results(&locations, hits));
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[APP] Global search failed: {err}").into());
                    store.search_error().set(Some("Search failed.".to_string()));
                }
            }
            store.search_loading().set(false);
        });
    };

    view! {
        <section class="card">
            <h3 class="section-title">"Global Search"</h3>

            <form class="flex-wrap" on:submit=on_search>
                <input
                    class="input"
                    placeholder="Search full 20k SKU catalogue"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button class="btn-secondary" type="submit">"Search"</button>
            </form>

            {move || store.search_loading().get().then(|| view! { <p>"Searching..."</p> })}
            {move || {
                store
                    .search_error()
                    .get()
                    .map(|err| view! { <p class="error-text">{err}</p> })
            }}

            {move || {
                (!store.search_results().get().is_empty()).then(|| {
                    view! {
                        <div class="search-results">
                            <For
                                each=move || store.search_results().get()
                                key=|result| result.item.id
                                children=move |result: SearchResult| {
                                    let barcode = result
                                        .item
                                        .barcode
                                        .clone()
                                        .unwrap_or_else(|| "—".to_string());
                                    view! {
                                        <div class="item-card">
                                            <div class="item-card-header">
                                                <span class="item-name">
                                                    {result.item.item_name.clone()}
                                                </span>
                                                <span class="item-meta">
                                                    {format!(
                                                        "{} • qty {}",
                                                        result.location_name,
                                                        result.item.quantity,
                                                    )}
                                                </span>
                                            </div>
                                            <div class="item-meta">{format!("Barcode: {barcode}")}</div>
                                        </div>
                                    }
                                }
                            />
                        </div>
                    }
                })
            }}
        </section>
    }
}
