//! Opportunity Listing
//!
//! What the list view renders for a given input, and the intents it emits
//! instead of mutating the collection it was handed.

use crate::domain::{patch_by_id, OpportunityListItem};

/// Skeleton cards shown while the first load is pending
pub const SKELETON_COUNT: usize = 1;

/// Rendering state of the opportunity list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// Error message over a skeleton backdrop
    Error,
    /// Placeholder cards, nothing loaded yet
    Skeleton(usize),
    /// Empty-state message
    Empty,
    /// Cards for the visible window
    Items,
}

/// Error first, then loading-without-items, then empty.
pub fn list_state(item_count: usize, loading: bool, error: Option<&str>) -> ListState {
    if error.is_some() {
        ListState::Error
    } else if loading && item_count == 0 {
        ListState::Skeleton(SKELETON_COUNT)
    } else if item_count == 0 {
        ListState::Empty
    } else {
        ListState::Items
    }
}

/// State change requested by the list, applied by the collection owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpportunityIntent {
    ToggleSaved { opportunity_id: String, saved: bool },
    ToggleApplied { opportunity_id: String, applied: bool },
}

impl OpportunityIntent {
    /// `(item.id, !item.is_saved)`
    pub fn toggle_saved(item: &OpportunityListItem) -> Self {
        OpportunityIntent::ToggleSaved {
            opportunity_id: item.opportunity_id.clone(),
            saved: !item.is_saved,
        }
    }

    /// `(item.id, !item.is_applied)`
    pub fn toggle_applied(item: &OpportunityListItem) -> Self {
        OpportunityIntent::ToggleApplied {
            opportunity_id: item.opportunity_id.clone(),
            applied: !item.is_applied,
        }
    }

    pub fn opportunity_id(&self) -> &str {
        match self {
            OpportunityIntent::ToggleSaved { opportunity_id, .. }
            | OpportunityIntent::ToggleApplied { opportunity_id, .. } => opportunity_id,
        }
    }

    /// Owner-side transition. Returns `false` for an unknown id.
    pub fn apply(&self, items: &mut [OpportunityListItem]) -> bool {
        match self {
            OpportunityIntent::ToggleSaved { opportunity_id, saved } => {
                patch_by_id(items, opportunity_id, |item| item.is_saved = *saved)
            }
            OpportunityIntent::ToggleApplied { opportunity_id, applied } => {
                patch_by_id(items, opportunity_id, |item| item.is_applied = *applied)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Matching;
    use chrono::{DateTime, Utc};

    fn make_item(id: &str, saved: bool, applied: bool) -> OpportunityListItem {
        OpportunityListItem {
            opportunity_id: id.to_string(),
            title: format!("Opportunity {}", id),
            description: "desc".to_string(),
            created_at: DateTime::<Utc>::from_timestamp(1_710_000_000, 0).unwrap(),
            is_saved: saved,
            is_applied: applied,
            matching: Matching { total_match_percentage: 50.0 },
        }
    }

    #[test]
    fn test_list_state_precedence() {
        assert_eq!(list_state(3, true, Some("boom")), ListState::Error);
        assert_eq!(list_state(0, true, None), ListState::Skeleton(1));
        assert_eq!(list_state(0, false, None), ListState::Empty);
        assert_eq!(list_state(2, true, None), ListState::Items);
        assert_eq!(list_state(2, false, None), ListState::Items);
    }

    #[test]
    fn test_toggle_saved_emits_negated_flag_without_mutation() {
        let items = vec![make_item("x", false, false), make_item("y", true, false)];
        let before = items.clone();

        let intent = OpportunityIntent::toggle_saved(&items[0]);
        assert_eq!(intent, OpportunityIntent::ToggleSaved { opportunity_id: "x".into(), saved: true });

        let intent = OpportunityIntent::toggle_saved(&items[1]);
        assert_eq!(intent, OpportunityIntent::ToggleSaved { opportunity_id: "y".into(), saved: false });

        assert_eq!(items, before);
    }

    #[test]
    fn test_owner_applies_intent() {
        let mut items = vec![make_item("x", false, false), make_item("y", false, false)];
        let intent = OpportunityIntent::toggle_applied(&items[1]);
        assert!(intent.apply(&mut items));
        assert!(items[1].is_applied);
        assert!(!items[0].is_applied);
        assert_eq!(items[0].opportunity_id, "x");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut items = vec![make_item("x", false, false)];
        let intent = OpportunityIntent::ToggleSaved { opportunity_id: "nope".into(), saved: true };
        assert!(!intent.apply(&mut items));
        assert!(!items[0].is_saved);
    }
}
