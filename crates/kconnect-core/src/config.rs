//! Client Configuration
//!
//! Backend location and the persona the front-end is running as.

use serde::{Deserialize, Serialize};
use crate::domain::Persona;

/// Used when `KCONNECT_API_BASE_URL` was not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const PASSWORD_PATH: &str = "/api/v1/private/users/password";
pub const ALERTES_SETTINGS_PATH: &str = "/api/v1/private/users/alertes-settings";
pub const CONFIDALITY_SETTINGS_PATH: &str = "/api/v1/private/users/confidality-settings";
pub const SUPPORT_TICKETS_PATH: &str = "/api/v1/public/support-tickets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host, without trailing slash
    pub base_url: String,
    #[serde(default)]
    pub persona: Persona,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, persona: Persona) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url, persona }
    }

    /// Base URL baked in at compile time (the wasm bundle has no environment)
    pub fn from_build_env(persona: Persona) -> Self {
        let base = option_env!("KCONNECT_API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(base, persona)
    }

    pub fn with_persona(&self, persona: Persona) -> Self {
        Self { base_url: self.base_url.clone(), persona }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::new("https://api.example.com/ ", Persona::KPlayer);
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(
            config.url(PASSWORD_PATH),
            "https://api.example.com/api/v1/private/users/password"
        );
    }

    #[test]
    fn test_deserialize_defaults_persona() {
        let config: ClientConfig = serde_json::from_str(r#"{"base_url":"http://x"}"#).unwrap();
        assert_eq!(config.persona, Persona::KProfile);
    }
}
