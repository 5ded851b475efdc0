//! Confidentiality Form Component
//!
//! Loads the privacy preferences on mount and saves them back whole.

use leptos::prelude::*;
use leptos::task::spawn_local;
use kconnect_core::domain::ConfidalitySettings;

use crate::api;
use crate::context::AppContext;
use super::{FormStatus, StatusLine, ToggleRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrivacyToggle {
    ProfileVisible,
    ShowEmail,
    ShowPhone,
    SearchableByPartners,
}

impl PrivacyToggle {
    const ALL: [PrivacyToggle; 4] = [
        PrivacyToggle::ProfileVisible,
        PrivacyToggle::ShowEmail,
        PrivacyToggle::ShowPhone,
        PrivacyToggle::SearchableByPartners,
    ];

    fn label(self) -> &'static str {
        match self {
            PrivacyToggle::ProfileVisible => "Make my profile visible",
            PrivacyToggle::ShowEmail => "Show my email address",
            PrivacyToggle::ShowPhone => "Show my phone number",
            PrivacyToggle::SearchableByPartners => "Let K-Partners find me in search",
        }
    }

    fn flag(self, settings: &mut ConfidalitySettings) -> &mut bool {
        match self {
            PrivacyToggle::ProfileVisible => &mut settings.profile_visible,
            PrivacyToggle::ShowEmail => &mut settings.show_email,
            PrivacyToggle::ShowPhone => &mut settings.show_phone,
            PrivacyToggle::SearchableByPartners => &mut settings.searchable_by_partners,
        }
    }

    fn get(self, settings: &ConfidalitySettings) -> bool {
        match self {
            PrivacyToggle::ProfileVisible => settings.profile_visible,
            PrivacyToggle::ShowEmail => settings.show_email,
            PrivacyToggle::ShowPhone => settings.show_phone,
            PrivacyToggle::SearchableByPartners => settings.searchable_by_partners,
        }
    }
}

#[component]
pub fn ConfidentialityForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (settings, set_settings) = signal(None::<ConfidalitySettings>);
    let (status, set_status) = signal(FormStatus::Idle);

    let load = move || {
        let config = ctx.config();
        let session = ctx.session.get_untracked();
        set_status.set(FormStatus::Idle);
        spawn_local(async move {
            match api::load_confidality_settings(config, session).await {
                Ok(loaded) => set_settings.set(Some(loaded)),
                Err(message) => set_status.set(FormStatus::Error(message)),
            }
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(data) = settings.get_untracked() else { return };
        if status.get_untracked().is_pending() { return; }

        let config = ctx.config();
        let session = ctx.session.get_untracked();
        set_status.set(FormStatus::Pending);
        spawn_local(async move {
            match api::update_confidality_settings(config, session, data).await {
                Ok(()) => set_status.set(FormStatus::Success("Privacy preferences saved.".to_string())),
                Err(message) => set_status.set(FormStatus::Error(message)),
            }
        });
    };

    view! {
        <form class="settings-form confidentiality-form" on:submit=on_submit>
            <Show
                when=move || settings.with(|s| s.is_some())
                fallback=move || view! {
                    <Show when=move || status.with(|s| *s == FormStatus::Idle)>
                        <p class="loading">"Loading your preferences..."</p>
                    </Show>
                    <Show when=move || status.with(|s| s.can_retry_load(settings.with(Option::is_some)))>
                        <button type="button" class="retry" on:click=move |_| load()>"Retry"</button>
                    </Show>
                }
            >
                {PrivacyToggle::ALL.into_iter().map(|toggle| view! {
                    <ToggleRow
                        label=toggle.label()
                        checked=Signal::derive(move || settings.with(|s| s.as_ref().is_some_and(|s| toggle.get(s))))
                        on_change=Callback::new(move |value: bool| {
                            set_settings.update(|s| {
                                if let Some(s) = s {
                                    *toggle.flag(s) = value;
                                }
                            });
                        })
                    />
                }).collect_view()}
                <button type="submit" disabled=move || status.get().is_pending()>"Save"</button>
            </Show>
            <StatusLine status=status />
        </form>
    }
}
