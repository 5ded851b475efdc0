//! Application Context
//!
//! Shared state provided via Leptos Context API: the active persona, the
//! session and the backend configuration.

use leptos::prelude::*;
use kconnect_core::domain::{Persona, Session};
use kconnect_core::ClientConfig;

use crate::nav::{resolve_section, Section};
use crate::session_storage;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Persona chosen on the landing page (None = landing page) - read
    pub persona: ReadSignal<Option<Persona>>,
    /// Persona - write
    set_persona: WriteSignal<Option<Persona>>,
    /// Current session - read
    pub session: ReadSignal<Session>,
    /// Current session - write
    set_session: WriteSignal<Session>,
    /// Sidebar section - read
    pub section: ReadSignal<Section>,
    /// Sidebar section - write
    set_section: WriteSignal<Section>,
    /// Backend location
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(
        persona: (ReadSignal<Option<Persona>>, WriteSignal<Option<Persona>>),
        session: (ReadSignal<Session>, WriteSignal<Session>),
        section: (ReadSignal<Section>, WriteSignal<Section>),
        config: ClientConfig,
    ) -> Self {
        Self {
            persona: persona.0,
            set_persona: persona.1,
            session: session.0,
            set_session: session.1,
            section: section.0,
            set_section: section.1,
            config: StoredValue::new(config),
        }
    }

    /// Enter the shell of a persona, starting on its first section
    pub fn choose_persona(&self, persona: Persona) {
        self.set_persona.set(Some(persona));
        self.set_section.set(Section::Dashboard);
    }

    /// Switch sidebar section; unknown sections fall back to the first one
    pub fn navigate(&self, section: Section) {
        let persona = self.persona.get_untracked().unwrap_or_default();
        self.set_section.set(resolve_section(persona, section));
    }

    /// Drop the session everywhere and go back to the landing page
    pub fn sign_out(&self) {
        session_storage::clear_session();
        self.set_session.set(Session::anonymous());
        self.set_persona.set(None);
        tracing::info!("Signed out");
    }

    /// Configuration for the active persona
    pub fn config(&self) -> ClientConfig {
        let persona = self.persona.get_untracked().unwrap_or_default();
        self.config.with_value(|c| c.with_persona(persona))
    }
}
