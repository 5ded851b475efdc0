//! Opportunity List Component
//!
//! Renders a page-sized window of the opportunity collection and reveals the
//! next page when the sentinel below the last card scrolls into view.
//! Save/apply clicks are forwarded to the owner as intents.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_sentinel::use_sentinel;

use kconnect_core::domain::OpportunityListItem;
use kconnect_core::listing::SKELETON_COUNT;
use kconnect_core::{list_state, ListState, OpportunityIntent, PageWindow, LOAD_MORE_DELAY_MS, PAGE_SIZE};

use super::OpportunityCard;

/// Incremental opportunity list
///
/// # Arguments
/// * `items` - Full collection in server order (never re-sorted here)
/// * `source_key` - Identity of the collection; a new key resets to page 1
/// * `loading` - Whether the owner is fetching the collection
/// * `error` - Fetch error to display
/// * `on_intent` - Receives save/apply toggles
#[component]
pub fn OpportunityList(
    #[prop(into)] items: Signal<Vec<OpportunityListItem>>,
    #[prop(into)] source_key: Signal<u64>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] on_intent: Callback<OpportunityIntent>,
) -> impl IntoView {
    let window = RwSignal::new(PageWindow::new(PAGE_SIZE));

    // New collection: back to the first page. Until this runs, `cursor`
    // already reads page 1 for the new key.
    Effect::new(move |_| {
        let key = source_key.get();
        window.update(|w| {
            if w.sync_source(key) {
                tracing::debug!("Opportunity source {} -> page 1", key);
            }
        });
    });

    let total = Memo::new(move |_| items.with(|v| v.len()));
    let cursor = Memo::new(move |_| window.with(|w| w.cursor(source_key.get(), total.get())));
    let visible_len = Memo::new(move |_| cursor.with(|c| c.visible_len(total.get())));
    let has_more = Memo::new(move |_| cursor.with(|c| c.has_more));
    let page_loading = Memo::new(move |_| window.with(|w| w.is_loading()));
    let visible = Memo::new(move |_| items.with(|v| v[..visible_len.get().min(v.len())].to_vec()));
    let state = Memo::new(move |_| error.with(|e| list_state(total.get(), loading.get(), e.as_deref())));

    let load_more = move || {
        let count = total.get_untracked();
        let key = source_key.get_untracked();
        let Some(ticket) = window
            .try_update(|w| {
                w.sync_source(key);
                w.begin_load(count)
            })
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            TimeoutFuture::new(LOAD_MORE_DELAY_MS).await;
            // Unmounted or reset in the meantime: nothing to apply
            if window.try_update(|w| w.complete(ticket)) == Some(true) {
                tracing::debug!("Revealed page {}", window.with_untracked(|w| w.current_page()));
            }
        });
    };

    let sentinel = NodeRef::<leptos::html::Div>::new();
    use_sentinel(sentinel, Signal::derive(move || visible_len.get()), load_more);

    view! {
        <div class="opportunity-list">
            {move || match state.get() {
                ListState::Error => view! {
                    <div class="opportunity-list-error">
                        <SkeletonCards count=SKELETON_COUNT />
                        <p class="error-message">{move || error.get().unwrap_or_default()}</p>
                    </div>
                }.into_any(),
                ListState::Skeleton(count) => view! { <SkeletonCards count=count /> }.into_any(),
                ListState::Empty => view! {
                    <p class="empty-state">"No opportunities to show yet."</p>
                }.into_any(),
                ListState::Items => view! {
                    <For
                        each=move || visible.get()
                        key=|item| (item.opportunity_id.clone(), item.is_saved, item.is_applied)
                        children=move |item| view! { <OpportunityCard item=item on_intent=on_intent /> }
                    />
                }.into_any(),
            }}

            <div class="list-sentinel" node_ref=sentinel></div>

            <Show when=move || page_loading.get()>
                <p class="loading">"Loading more..."</p>
            </Show>
            <Show when=move || state.get() == ListState::Items && !has_more.get()>
                <p class="list-end">{move || format!("All {} opportunities shown", total.get())}</p>
            </Show>
        </div>
    }
}

/// Grey placeholder cards
#[component]
fn SkeletonCards(count: usize) -> impl IntoView {
    (0..count)
        .map(|_| view! {
            <div class="opportunity-card skeleton">
                <div class="skeleton-line wide"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line short"></div>
            </div>
        })
        .collect_view()
}
