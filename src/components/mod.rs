//! UI Components
//!
//! Leptos components for the persona shells.

mod persona_picker;
mod sidebar;
mod dashboard;
mod opportunities_panel;
mod opportunity_list;
mod opportunity_card;
mod contacts_panel;
mod settings_panel;
mod password_form;
mod alertes_form;
mod confidentiality_form;
mod support_form;
mod toggle_row;
mod form_status;

pub use persona_picker::PersonaPicker;
pub use sidebar::Sidebar;
pub use dashboard::Dashboard;
pub use opportunities_panel::{reload_opportunities, OpportunitiesPanel};
pub use opportunity_list::OpportunityList;
pub use opportunity_card::OpportunityCard;
pub use contacts_panel::ContactsPanel;
pub use settings_panel::SettingsPanel;
pub use password_form::PasswordForm;
pub use alertes_form::AlertesForm;
pub use confidentiality_form::ConfidentialityForm;
pub use support_form::SupportForm;
pub use toggle_row::ToggleRow;
pub use form_status::{FormStatus, StatusLine};
