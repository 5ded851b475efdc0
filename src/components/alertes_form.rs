//! Alerts Form Component
//!
//! Loads the notification preferences on mount and saves them back whole.

use leptos::prelude::*;
use leptos::task::spawn_local;
use kconnect_core::domain::AlertesSettings;

use crate::api;
use crate::context::AppContext;
use super::{FormStatus, StatusLine, ToggleRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertToggle {
    NewOpportunities,
    Messages,
    ContactRequests,
    Push,
    Newsletter,
}

impl AlertToggle {
    const ALL: [AlertToggle; 5] = [
        AlertToggle::NewOpportunities,
        AlertToggle::Messages,
        AlertToggle::ContactRequests,
        AlertToggle::Push,
        AlertToggle::Newsletter,
    ];

    fn label(self) -> &'static str {
        match self {
            AlertToggle::NewOpportunities => "Email me new matching opportunities",
            AlertToggle::Messages => "Email me new messages",
            AlertToggle::ContactRequests => "Email me contact and cooptation requests",
            AlertToggle::Push => "Browser notifications",
            AlertToggle::Newsletter => "Monthly newsletter",
        }
    }

    fn flag(self, settings: &mut AlertesSettings) -> &mut bool {
        match self {
            AlertToggle::NewOpportunities => &mut settings.email_new_opportunities,
            AlertToggle::Messages => &mut settings.email_messages,
            AlertToggle::ContactRequests => &mut settings.email_contact_requests,
            AlertToggle::Push => &mut settings.push_notifications,
            AlertToggle::Newsletter => &mut settings.newsletter,
        }
    }

    fn get(self, settings: &AlertesSettings) -> bool {
        match self {
            AlertToggle::NewOpportunities => settings.email_new_opportunities,
            AlertToggle::Messages => settings.email_messages,
            AlertToggle::ContactRequests => settings.email_contact_requests,
            AlertToggle::Push => settings.push_notifications,
            AlertToggle::Newsletter => settings.newsletter,
        }
    }
}

#[component]
pub fn AlertesForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (settings, set_settings) = signal(None::<AlertesSettings>);
    let (status, set_status) = signal(FormStatus::Idle);

    let load = move || {
        let config = ctx.config();
        let session = ctx.session.get_untracked();
        set_status.set(FormStatus::Idle);
        spawn_local(async move {
            match api::load_alertes_settings(config, session).await {
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
            match api::update_alertes_settings(config, session, data).await {
                Ok(()) => set_status.set(FormStatus::Success("Alert preferences saved.".to_string())),
                Err(message) => set_status.set(FormStatus::Error(message)),
            }
        });
    };

    view! {
        <form class="settings-form alertes-form" on:submit=on_submit>
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
                {AlertToggle::ALL.into_iter().map(|toggle| view! {
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
