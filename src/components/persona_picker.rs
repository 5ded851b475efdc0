//! Persona Picker Component
//!
//! Landing page: choose which of the three spaces to enter.

use leptos::prelude::*;
use kconnect_core::domain::Persona;

use crate::context::AppContext;

#[component]
pub fn PersonaPicker() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let session_line = move || {
        let session = ctx.session.get();
        match session.active_user_id() {
            Some(user) => format!("Signed in as user {}", user),
            None => "Not signed in: settings changes will be rejected by the server".to_string(),
        }
    };

    view! {
        <div class="persona-picker">
            <h1>"K-Connect"</h1>
            <p class="session-line">{session_line}</p>
            <div class="persona-cards">
                {Persona::ALL.into_iter().map(|persona| view! {
                    <button class="persona-card" on:click=move |_| ctx.choose_persona(persona)>
                        <span class="persona-name">{persona.label()}</span>
                        <span class="persona-tagline">{persona.tagline()}</span>
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
