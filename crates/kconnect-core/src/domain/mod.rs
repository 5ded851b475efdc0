//! Domain Layer
//!
//! Entities shared by the three personas and the settings payloads
//! exchanged with the backend.
//! This layer has NO network code (serde and chrono only).

mod entity;
mod persona;
mod session;
mod opportunity;
mod settings;
mod contact;

pub use entity::{Entity, patch_by_id};
pub use persona::Persona;
pub use session::Session;
pub use opportunity::{Matching, OpportunityListItem, OpportunityStats};
pub use settings::{AlertesSettings, ConfidalitySettings, PasswordChangePayload, SupportTicket};
pub use contact::{Contact, ContactFilter, ContactKind, ContactStatus, filter_contacts};
