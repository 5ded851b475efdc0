//! Contacts Panel Component
//!
//! Contacts and cooptations with filter tabs and a search box.

use leptos::prelude::*;
use kconnect_core::domain::{filter_contacts, Contact, ContactFilter, ContactKind};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ContactsPanel(initial_filter: ContactFilter) -> impl IntoView {
    let store = use_app_store();
    let (filter, set_filter) = signal(initial_filter);
    let (query, set_query) = signal(String::new());

    let shown = Memo::new(move |_| {
        let filter = filter.get();
        query.with(|q| {
            store.contacts().with(|contacts| {
                filter_contacts(contacts, filter, q).into_iter().cloned().collect::<Vec<Contact>>()
            })
        })
    });

    view! {
        <section class="contacts-panel">
            <div class="contacts-tabs">
                {ContactFilter::ALL.into_iter().map(|f| view! {
                    <button
                        class=move || if filter.get() == f { "contacts-tab active" } else { "contacts-tab" }
                        on:click=move |_| set_filter.set(f)
                    >
                        {f.label()}
                    </button>
                }).collect_view()}
            </div>
            <input
                type="search"
                class="contacts-search"
                placeholder="Search by name or company..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show
                when=move || !shown.with(|s| s.is_empty())
                fallback=|| view! { <p class="empty-state">"No contact matches."</p> }
            >
                <ul class="contact-list">
                    <For
                        each=move || shown.get()
                        key=|c| c.id
                        children=move |c| {
                            let kind = match c.kind {
                                ContactKind::Contact => "contact",
                                ContactKind::Cooptation => "cooptation",
                            };
                            view! {
                                <li class=format!("contact-row {}", kind)>
                                    <span class="contact-name">{c.name}</span>
                                    <span class="contact-company">{format!("{} · {}", c.role, c.company)}</span>
                                    <span class="contact-status">{c.status.label()}</span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </section>
    }
}
