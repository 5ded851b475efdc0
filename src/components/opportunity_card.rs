//! Opportunity Card Component

use leptos::prelude::*;
use kconnect_core::domain::OpportunityListItem;
use kconnect_core::OpportunityIntent;

/// One opportunity with its save and apply toggles.
///
/// The card never changes `item`; it sends the negated flag to `on_intent`.
#[component]
pub fn OpportunityCard(
    item: OpportunityListItem,
    #[prop(into)] on_intent: Callback<OpportunityIntent>,
) -> impl IntoView {
    let save_intent = OpportunityIntent::toggle_saved(&item);
    let apply_intent = OpportunityIntent::toggle_applied(&item);
    let is_saved = item.is_saved;
    let is_applied = item.is_applied;
    let posted = item.created_at.format("%d/%m/%Y").to_string();
    let match_label = format!("{}% match", item.match_percent());

    view! {
        <article class="opportunity-card">
            <header class="opportunity-header">
                <h3 class="opportunity-title">{item.title}</h3>
                <span class="match-badge">{match_label}</span>
            </header>
            <p class="opportunity-description">{item.description}</p>
            <footer class="opportunity-footer">
                <time class="opportunity-date">{posted}</time>
                <button
                    class=if is_saved { "save-btn active" } else { "save-btn" }
                    on:click=move |_| on_intent.run(save_intent.clone())
                >
                    {if is_saved { "Saved" } else { "Save" }}
                </button>
                <button
                    class=if is_applied { "apply-btn active" } else { "apply-btn" }
                    on:click=move |_| on_intent.run(apply_intent.clone())
                >
                    {if is_applied { "Applied" } else { "Apply" }}
                </button>
            </footer>
        </article>
    }
}
