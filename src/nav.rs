//! Navigation
//!
//! Sidebar sections per persona and the settings tab bar.

use kconnect_core::domain::Persona;

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Opportunities,
    Contacts,
    Cooptations,
    Settings,
}

/// Settings tab bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    Password,
    Alerts,
    Confidentiality,
    Support,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 4] = [
        SettingsTab::Password,
        SettingsTab::Alerts,
        SettingsTab::Confidentiality,
        SettingsTab::Support,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Password => "Password",
            SettingsTab::Alerts => "Alerts",
            SettingsTab::Confidentiality => "Confidentiality",
            SettingsTab::Support => "Support",
        }
    }
}

/// Sections offered to a persona, in sidebar order
pub fn sections_for(persona: Persona) -> &'static [Section] {
    match persona {
        Persona::KProfile | Persona::KPlayer => &[
            Section::Dashboard,
            Section::Opportunities,
            Section::Contacts,
            Section::Settings,
        ],
        Persona::KPartner => &[
            Section::Dashboard,
            Section::Opportunities,
            Section::Cooptations,
            Section::Settings,
        ],
    }
}

/// Sidebar label; companies see their own published offers
pub fn section_label(persona: Persona, section: Section) -> &'static str {
    match (persona, section) {
        (_, Section::Dashboard) => "Dashboard",
        (Persona::KPlayer, Section::Opportunities) => "My offers",
        (_, Section::Opportunities) => "Opportunities",
        (_, Section::Contacts) => "Contacts",
        (_, Section::Cooptations) => "Cooptations",
        (_, Section::Settings) => "Settings",
    }
}

/// `requested` if the persona offers it, otherwise its first section
pub fn resolve_section(persona: Persona, requested: Section) -> Section {
    let sections = sections_for(persona);
    if sections.contains(&requested) {
        requested
    } else {
        sections[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_persona_starts_on_dashboard_and_has_settings() {
        for persona in Persona::ALL {
            let sections = sections_for(persona);
            assert_eq!(sections[0], Section::Dashboard);
            assert!(sections.contains(&Section::Settings));
        }
    }

    #[test]
    fn test_partner_gets_cooptations_instead_of_contacts() {
        assert_eq!(resolve_section(Persona::KPartner, Section::Contacts), Section::Dashboard);
        assert_eq!(resolve_section(Persona::KPartner, Section::Cooptations), Section::Cooptations);
        assert_eq!(resolve_section(Persona::KProfile, Section::Cooptations), Section::Dashboard);
        assert_eq!(resolve_section(Persona::KProfile, Section::Settings), Section::Settings);
    }

    #[test]
    fn test_player_label() {
        assert_eq!(section_label(Persona::KPlayer, Section::Opportunities), "My offers");
        assert_eq!(section_label(Persona::KProfile, Section::Opportunities), "Opportunities");
    }
}
