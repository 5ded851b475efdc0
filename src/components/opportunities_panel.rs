//! Opportunities Panel Component
//!
//! Owner of the opportunity collection on screen: fetches it into the store
//! and applies the intents emitted by the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use kconnect_core::domain::Persona;
use kconnect_core::OpportunityIntent;

use crate::demo;
use crate::store::{
    store_apply_intent, store_replace_opportunities, store_set_opportunities_loading, use_app_store, AppStateStoreFields,
    AppStore,
};
use super::OpportunityList;

/// Replace the collection with a fresh copy for `persona`
pub fn reload_opportunities(store: AppStore, persona: Persona) {
    store_set_opportunities_loading(&store, true);
    spawn_local(async move {
        match demo::fetch_opportunities(persona).await {
            Ok(items) => {
                tracing::debug!("Loaded {} opportunities", items.len());
                store_replace_opportunities(&store, items);
            }
            Err(e) => {
                tracing::warn!("Loading opportunities failed: {}", e);
                store.opportunities_error().set(Some(e));
                store_set_opportunities_loading(&store, false);
            }
        }
    });
}

#[component]
pub fn OpportunitiesPanel(persona: Persona) -> impl IntoView {
    let store = use_app_store();

    let items = Signal::derive(move || store.opportunities().get());
    let source_key = Signal::derive(move || store.opportunities_source().get());
    let loading = Signal::derive(move || store.opportunities_loading().get());
    let error = Signal::derive(move || store.opportunities_error().get());

    let on_intent = Callback::new(move |intent: OpportunityIntent| {
        tracing::debug!("Applying {:?}", intent);
        store_apply_intent(&store, &intent);
    });

    let heading = match persona {
        Persona::KPlayer => "My published offers",
        _ => "Opportunities for you",
    };

    view! {
        <section class="opportunities-panel">
            <div class="panel-header">
                <h2>{heading}</h2>
                <button class="refresh-btn" on:click=move |_| reload_opportunities(store, persona)>
                    "Refresh"
                </button>
            </div>
            <OpportunityList
                items=items
                source_key=source_key
                loading=loading
                error=error
                on_intent=on_intent
            />
        </section>
    }
}
