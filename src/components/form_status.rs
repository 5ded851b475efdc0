//! Form Status
//!
//! Submission state shared by the settings forms.

use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Pending,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FormStatus::Pending)
    }

    /// A form whose initial load failed offers to load again
    pub fn can_retry_load(&self, loaded: bool) -> bool {
        !loaded && matches!(self, FormStatus::Error(_))
    }
}

/// Success or error text under a form
#[component]
pub fn StatusLine(#[prop(into)] status: Signal<FormStatus>) -> impl IntoView {
    move || match status.get() {
        FormStatus::Success(message) => view! { <p class="form-success">{message}</p> }.into_any(),
        FormStatus::Error(message) => view! { <p class="form-error">{message}</p> }.into_any(),
        FormStatus::Pending => view! { <p class="form-pending">"Sending..."</p> }.into_any(),
        FormStatus::Idle => view! { <span></span> }.into_any(),
    }
}
