//! Contact Entity
//!
//! Ordinary contacts and referral-based cooptations share one list.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    #[default]
    Contact,
    /// Referral relationship
    Cooptation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Pending,
    Accepted,
    Declined,
}

impl ContactStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "Pending",
            ContactStatus::Accepted => "Accepted",
            ContactStatus::Declined => "Declined",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub role: String,
    pub kind: ContactKind,
    pub status: ContactStatus,
}

impl Entity for Contact {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Tab selection of the contacts panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFilter {
    #[default]
    All,
    Contacts,
    Cooptations,
}

impl ContactFilter {
    pub const ALL: [ContactFilter; 3] = [ContactFilter::All, ContactFilter::Contacts, ContactFilter::Cooptations];

    pub fn label(&self) -> &'static str {
        match self {
            ContactFilter::All => "All",
            ContactFilter::Contacts => "Contacts",
            ContactFilter::Cooptations => "Cooptations",
        }
    }

    fn accepts(&self, kind: ContactKind) -> bool {
        match self {
            ContactFilter::All => true,
            ContactFilter::Contacts => kind == ContactKind::Contact,
            ContactFilter::Cooptations => kind == ContactKind::Cooptation,
        }
    }
}

/// Contacts matching the tab and a case-insensitive search over name and
/// company, in input order
pub fn filter_contacts<'a>(contacts: &'a [Contact], filter: ContactFilter, query: &str) -> Vec<&'a Contact> {
    let needle = query.trim().to_lowercase();
    contacts
        .iter()
        .filter(|c| filter.accepts(c.kind))
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.company.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_contact(id: u32, name: &str, company: &str, kind: ContactKind) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            company: company.to_string(),
            role: "Engineer".to_string(),
            kind,
            status: ContactStatus::Pending,
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            make_contact(1, "Alice Martin", "Acme", ContactKind::Contact),
            make_contact(2, "Bruno Petit", "Globex", ContactKind::Cooptation),
            make_contact(3, "Chloe Acker", "Initech", ContactKind::Contact),
            make_contact(4, "Dan Roy", "Acme", ContactKind::Cooptation),
        ]
    }

    #[test]
    fn test_filter_by_kind() {
        let contacts = sample();
        let ids: Vec<u32> = filter_contacts(&contacts, ContactFilter::Cooptations, "")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(filter_contacts(&contacts, ContactFilter::All, "").len(), 4);
    }

    #[test]
    fn test_search_is_case_insensitive_and_keeps_order() {
        let contacts = sample();
        // "ac" matches Acme (1, 4) and Acker (3)
        let ids: Vec<u32> = filter_contacts(&contacts, ContactFilter::All, "  AC ")
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_search_combined_with_kind() {
        let contacts = sample();
        let found = filter_contacts(&contacts, ContactFilter::Contacts, "acme");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }
}
