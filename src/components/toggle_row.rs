//! Toggle Row Component

use leptos::prelude::*;

/// Labelled checkbox
///
/// # Arguments
/// * `label` - Text next to the checkbox
/// * `checked` - Current value
/// * `on_change` - Receives the new value; the owner stores it
#[component]
pub fn ToggleRow(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}
