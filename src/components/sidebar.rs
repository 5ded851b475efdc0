//! Sidebar Component
//!
//! Section navigation for the active persona.

use leptos::prelude::*;
use kconnect_core::domain::Persona;

use crate::context::AppContext;
use crate::nav::{section_label, sections_for};

#[component]
pub fn Sidebar(persona: Persona) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class="sidebar">
            <div class="sidebar-brand">{persona.label()}</div>
            <ul class="sidebar-sections">
                {sections_for(persona).iter().map(|section| {
                    let section = *section;
                    let is_active = move || ctx.section.get() == section;
                    view! {
                        <li>
                            <button
                                class=move || if is_active() { "sidebar-item active" } else { "sidebar-item" }
                                on:click=move |_| ctx.navigate(section)
                            >
                                {section_label(persona, section)}
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <button class="sidebar-signout" on:click=move |_| ctx.sign_out()>
                {move || if ctx.session.get().is_active() { "Sign out" } else { "Switch profile" }}
            </button>
        </nav>
    }
}
