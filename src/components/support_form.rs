//! Support Form Component
//!
//! Works signed in or anonymously; the service decides whether a user id
//! is attached.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use super::{FormStatus, StatusLine};

#[component]
pub fn SupportForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (subject, set_subject) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_pending() { return; }

        let config = ctx.config();
        let session = ctx.session.get_untracked();
        let subject_value = subject.get_untracked();
        let content_value = content.get_untracked();
        set_status.set(FormStatus::Pending);

        spawn_local(async move {
            match api::send_support_ticket(config, session, subject_value, content_value).await {
                Ok(()) => {
                    set_subject.set(String::new());
                    set_content.set(String::new());
                    set_status.set(FormStatus::Success("Thanks, our team will get back to you.".to_string()));
                }
                Err(message) => set_status.set(FormStatus::Error(message)),
            }
        });
    };

    view! {
        <form class="settings-form support-form" on:submit=on_submit>
            <label>
                "Subject"
                <input
                    type="text"
                    prop:value=move || subject.get()
                    on:input=move |ev| set_subject.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Message"
                <textarea
                    rows="6"
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button type="submit" disabled=move || status.get().is_pending()>"Send"</button>
            <StatusLine status=status />
        </form>
    }
}
