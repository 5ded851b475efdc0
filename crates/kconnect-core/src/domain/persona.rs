//! Persona
//!
//! The three user types served by the front-end.

use serde::{Deserialize, Serialize};

/// User persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    /// Job seeker
    #[default]
    KProfile,
    /// Hiring company
    KPlayer,
    /// Recruiting partner
    KPartner,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::KProfile, Persona::KPlayer, Persona::KPartner];

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Persona::KProfile => "K-Profile",
            Persona::KPlayer => "K-Player",
            Persona::KPartner => "K-Partner",
        }
    }

    /// Fixed `source` tag sent with support tickets
    pub fn source_label(&self) -> &'static str {
        match self {
            Persona::KProfile => "k-profile",
            Persona::KPlayer => "k-player",
            Persona::KPartner => "k-partner",
        }
    }

    /// Short description shown on the landing page
    pub fn tagline(&self) -> &'static str {
        match self {
            Persona::KProfile => "Candidate looking for the next opportunity",
            Persona::KPlayer => "Company hiring talent",
            Persona::KPartner => "Partner recruiting through cooptation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels_are_distinct() {
        let labels: Vec<&str> = Persona::ALL.iter().map(|p| p.source_label()).collect();
        assert_eq!(labels, ["k-profile", "k-player", "k-partner"]);
    }

    #[test]
    fn test_serde_matches_source_label() {
        let json = serde_json::to_string(&Persona::KPartner).unwrap();
        assert_eq!(json, "\"k-partner\"");
    }
}
