//! Dashboard Component
//!
//! Profile summary with opportunity figures.

use leptos::prelude::*;
use kconnect_core::domain::{OpportunityStats, Persona};

use crate::context::AppContext;
use crate::nav::Section;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard(persona: Persona) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = use_app_store();

    let stats = Memo::new(move |_| store.opportunities().with(|items| OpportunityStats::from_items(items)));
    let average = move || match stats.get().average_match {
        Some(avg) => format!("{:.0}%", avg),
        None => "-".to_string(),
    };

    view! {
        <section class="dashboard">
            <h2>{format!("{} dashboard", persona.label())}</h2>
            <div class="stat-grid">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Opportunities"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().saved}</span>
                    <span class="stat-label">"Saved"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().applied}</span>
                    <span class="stat-label">"Applied"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{average}</span>
                    <span class="stat-label">"Average match"</span>
                </div>
            </div>
            <button class="link-btn" on:click=move |_| ctx.navigate(Section::Opportunities)>
                "Browse opportunities"
            </button>
        </section>
    }
}
