//! Settings Panel Component
//!
//! Tab bar over the account settings forms.

use leptos::prelude::*;

use crate::nav::SettingsTab;
use super::{AlertesForm, ConfidentialityForm, PasswordForm, SupportForm};

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let (tab, set_tab) = signal(SettingsTab::default());

    view! {
        <section class="settings-panel">
            <h2>"Settings"</h2>
            <div class="settings-tab-bar">
                {SettingsTab::ALL.into_iter().map(|t| {
                    let is_active = move || tab.get() == t;
                    view! {
                        <button
                            class=move || if is_active() { "settings-tab active" } else { "settings-tab" }
                            on:click=move |_| set_tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="settings-content">
                {move || match tab.get() {
                    SettingsTab::Password => view! { <PasswordForm /> }.into_any(),
                    SettingsTab::Alerts => view! { <AlertesForm /> }.into_any(),
                    SettingsTab::Confidentiality => view! { <ConfidentialityForm /> }.into_any(),
                    SettingsTab::Support => view! { <SupportForm /> }.into_any(),
                }}
            </div>
        </section>
    }
}
