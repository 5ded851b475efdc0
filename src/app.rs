//! K-Connect Frontend App
//!
//! Landing page for persona selection, then a sidebar shell whose main
//! panel follows the selected section.

use leptos::prelude::*;
use reactive_stores::Store;
use kconnect_core::domain::{ContactFilter, Persona};
use kconnect_core::ClientConfig;

use crate::components::{
    reload_opportunities, ContactsPanel, Dashboard, OpportunitiesPanel, PersonaPicker, SettingsPanel, Sidebar,
};
use crate::context::AppContext;
use crate::demo;
use crate::nav::Section;
use crate::session_storage;
use crate::store::{store_set_contacts, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let persona = signal(None::<Persona>);
    let session = signal(session_storage::load_session());
    let section = signal(Section::Dashboard);
    let config = ClientConfig::from_build_env(Persona::default());
    tracing::info!("API base URL: {}", config.base_url);

    let ctx = AppContext::new(persona, session, section, config);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load persona data whenever the persona changes
    Effect::new(move |_| {
        if let Some(persona) = ctx.persona.get() {
            tracing::info!("Entering {} shell", persona.label());
            reload_opportunities(store, persona);
            store_set_contacts(&store, demo::demo_contacts());
        }
    });

    view! {
        {move || match ctx.persona.get() {
            None => view! { <PersonaPicker /> }.into_any(),
            Some(persona) => view! { <PersonaShell persona=persona /> }.into_any(),
        }}
    }
}

/// Sidebar plus the panel of the current section
#[component]
fn PersonaShell(persona: Persona) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="app-layout">
            <Sidebar persona=persona />

            <main class="main-content">
                {move || match ctx.section.get() {
                    Section::Dashboard => view! { <Dashboard persona=persona /> }.into_any(),
                    Section::Opportunities => view! { <OpportunitiesPanel persona=persona /> }.into_any(),
                    Section::Contacts => view! { <ContactsPanel initial_filter=ContactFilter::All /> }.into_any(),
                    Section::Cooptations => {
                        view! { <ContactsPanel initial_filter=ContactFilter::Cooptations /> }.into_any()
                    }
                    Section::Settings => view! { <SettingsPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}
