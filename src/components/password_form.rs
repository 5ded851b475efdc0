//! Password Form Component
//!
//! Current / new / confirmation fields. Validation happens in the service
//! before anything is sent; fields are cleared only on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use super::{FormStatus, StatusLine};

#[component]
pub fn PasswordForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (current, set_current) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() { return; }

        let config = ctx.config();
        let session = ctx.session.get_untracked();
        let current_value = current.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm.get_untracked();
        set_status.set(FormStatus::Pending);

        spawn_local(async move {
            match api::change_password(config, session, current_value, new_value, confirm_value).await {
                Ok(()) => {
                    set_current.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm.set(String::new());
                    set_status.set(FormStatus::Success("Your password has been updated.".to_string()));
                }
                Err(message) => set_status.set(FormStatus::Error(message)),
            }
        });
    };

    view! {
        <form class="settings-form password-form" on:submit=on_submit>
            <label>
                "Current password"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || current.get()
                    on:input=move |ev| set_current.set(event_target_value(&ev))
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| set_new_password.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Confirm new password"
                <input
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                />
            </label>
            <button type="submit" disabled=move || status.get().is_pending()>"Change password"</button>
            <StatusLine status=status />
        </form>
    }
}
