//! Opportunity Entity
//!
//! A job or mission listing that a visitor can save or apply to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Matching score computed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Matching {
    pub total_match_percentage: f64,
}

/// Opportunity as listed for the current user (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityListItem {
    pub opportunity_id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_saved: bool,
    #[serde(default)]
    pub is_applied: bool,
    #[serde(default)]
    pub matching: Matching,
}

impl Entity for OpportunityListItem {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.opportunity_id
    }
}

impl OpportunityListItem {
    /// Match percentage clamped to 0..=100 and rounded for display
    pub fn match_percent(&self) -> u8 {
        self.matching.total_match_percentage.clamp(0.0, 100.0).round() as u8
    }
}

/// Summary figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OpportunityStats {
    pub total: usize,
    pub saved: usize,
    pub applied: usize,
    /// Mean match percentage, `None` for an empty collection
    pub average_match: Option<f64>,
}

impl OpportunityStats {
    pub fn from_items(items: &[OpportunityListItem]) -> Self {
        if items.is_empty() {
            return Self::default();
        }
        let sum: f64 = items.iter().map(|i| i.matching.total_match_percentage).sum();
        Self {
            total: items.len(),
            saved: items.iter().filter(|i| i.is_saved).count(),
            applied: items.iter().filter(|i| i.is_applied).count(),
            average_match: Some(sum / items.len() as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, saved: bool, applied: bool, pct: f64) -> OpportunityListItem {
        OpportunityListItem {
            opportunity_id: id.to_string(),
            title: format!("Opportunity {}", id),
            description: String::new(),
            created_at: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
            is_saved: saved,
            is_applied: applied,
            matching: Matching { total_match_percentage: pct },
        }
    }

    #[test]
    fn test_stats() {
        let items = vec![
            make_item("a", true, false, 80.0),
            make_item("b", true, true, 60.0),
            make_item("c", false, false, 40.0),
        ];
        let stats = OpportunityStats::from_items(&items);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.saved, 2);
        assert_eq!(stats.applied, 1);
        assert_eq!(stats.average_match, Some(60.0));
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(OpportunityStats::from_items(&[]), OpportunityStats::default());
    }

    #[test]
    fn test_match_percent_is_clamped() {
        assert_eq!(make_item("a", false, false, 140.2).match_percent(), 100);
        assert_eq!(make_item("a", false, false, 66.6).match_percent(), 67);
    }

    #[test]
    fn test_deserialize_with_missing_flags() {
        let json = r#"{
            "opportunity_id": "op-1",
            "title": "Rust developer",
            "description": "Backend team",
            "created_at": "2024-03-01T10:00:00Z"
        }"#;
        let item: OpportunityListItem = serde_json::from_str(json).unwrap();
        assert!(!item.is_saved);
        assert!(!item.is_applied);
        assert_eq!(item.matching.total_match_percentage, 0.0);
    }
}
