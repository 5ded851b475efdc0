//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the opportunity collection; the list view only emits intents.

use leptos::prelude::*;
use reactive_stores::Store;
use kconnect_core::domain::{Contact, OpportunityListItem};
use kconnect_core::OpportunityIntent;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Opportunities of the current persona, in server order
    pub opportunities: Vec<OpportunityListItem>,
    /// Identity of the opportunity collection (bumped on every replacement)
    pub opportunities_source: u64,
    /// Whether a fetch of the collection is pending
    pub opportunities_loading: bool,
    /// Last fetch error
    pub opportunities_error: Option<String>,
    /// Contacts and cooptations
    pub contacts: Vec<Contact>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole opportunity collection (resets list pagination)
pub fn store_replace_opportunities(store: &AppStore, items: Vec<OpportunityListItem>) {
    *store.opportunities().write() = items;
    *store.opportunities_source().write() += 1;
    store.opportunities_loading().set(false);
    store.opportunities_error().set(None);
}

/// Apply a save/apply toggle in place; the collection identity is kept
pub fn store_apply_intent(store: &AppStore, intent: &OpportunityIntent) {
    let applied = intent.apply(&mut store.opportunities().write());
    if !applied {
        tracing::warn!("Intent for unknown opportunity {}", intent.opportunity_id());
    }
}

pub fn store_set_opportunities_loading(store: &AppStore, loading: bool) {
    store.opportunities_loading().set(loading);
}

pub fn store_set_contacts(store: &AppStore, contacts: Vec<Contact>) {
    *store.contacts().write() = contacts;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_opportunities;
    use kconnect_core::domain::Persona;
    use kconnect_core::PageWindow;
    use leptos::reactive::owner::Owner;

    fn test_store() -> (Owner, AppStore) {
        let owner = Owner::new();
        owner.set();
        (owner, Store::new(AppState::default()))
    }

    fn ids(store: &AppStore) -> Vec<String> {
        store
            .opportunities()
            .with_untracked(|items| items.iter().map(|i| i.opportunity_id.clone()).collect())
    }

    #[test]
    fn test_replace_bumps_source_and_clears_flags() {
        let (_owner, store) = test_store();
        store_set_opportunities_loading(&store, true);
        store.opportunities_error().set(Some("timeout".into()));

        store_replace_opportunities(&store, demo_opportunities(Persona::KProfile, 12));

        assert_eq!(store.opportunities_source().get_untracked(), 1);
        assert_eq!(store.opportunities().with_untracked(|v| v.len()), 12);
        assert!(!store.opportunities_loading().get_untracked());
        assert_eq!(store.opportunities_error().get_untracked(), None);

        store_replace_opportunities(&store, demo_opportunities(Persona::KProfile, 3));
        assert_eq!(store.opportunities_source().get_untracked(), 2);
    }

    #[test]
    fn test_intent_patches_in_place_and_keeps_source() {
        let (_owner, store) = test_store();
        store_replace_opportunities(&store, demo_opportunities(Persona::KPlayer, 8));
        let before = ids(&store);
        let target = store.opportunities().with_untracked(|v| v[5].clone());

        store_apply_intent(&store, &OpportunityIntent::toggle_saved(&target));
        store_apply_intent(&store, &OpportunityIntent::toggle_applied(&target));

        assert_eq!(store.opportunities_source().get_untracked(), 1);
        assert_eq!(ids(&store), before);
        let patched = store.opportunities().with_untracked(|v| v[5].clone());
        assert_eq!(patched.is_saved, !target.is_saved);
        assert_eq!(patched.is_applied, !target.is_applied);
    }

    #[test]
    fn test_intent_for_unknown_id_is_noop() {
        let (_owner, store) = test_store();
        store_replace_opportunities(&store, demo_opportunities(Persona::KPartner, 4));
        let before = store.opportunities().get_untracked();

        let intent = OpportunityIntent::ToggleSaved {
            opportunity_id: "missing".into(),
            saved: true,
        };
        store_apply_intent(&store, &intent);

        assert_eq!(store.opportunities_source().get_untracked(), 1);
        let after = store.opportunities().get_untracked();
        assert_eq!(after.len(), before.len());
        assert!(after.iter().zip(&before).all(|(a, b)| a.is_saved == b.is_saved && a.is_applied == b.is_applied));
    }

    #[test]
    fn test_window_resets_only_on_replacement() {
        let (_owner, store) = test_store();
        let mut window = PageWindow::new(5);
        store_replace_opportunities(&store, demo_opportunities(Persona::KProfile, 30));
        let total = store.opportunities().with_untracked(|v| v.len());

        assert!(window.sync_source(store.opportunities_source().get_untracked()));
        let ticket = window.begin_load(total).unwrap();
        assert!(window.complete(ticket));
        assert_eq!(window.current_page(), 2);

        // Toggling a flag keeps the reader on page 2
        let first = store.opportunities().with_untracked(|v| v[0].clone());
        store_apply_intent(&store, &OpportunityIntent::toggle_saved(&first));
        assert!(!window.sync_source(store.opportunities_source().get_untracked()));
        assert_eq!(window.current_page(), 2);

        // A refreshed collection starts over
        store_replace_opportunities(&store, demo_opportunities(Persona::KProfile, 30));
        assert!(window.sync_source(store.opportunities_source().get_untracked()));
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.visible_len(total), 5);
    }
}
