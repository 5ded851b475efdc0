//! Session
//!
//! Authentication state passed explicitly to every service call.

use serde::{Deserialize, Serialize};

/// Bearer token and user identity of the signed-in visitor, if any
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub user_id: Option<String>,
}

impl Session {
    /// Session with no credentials
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// Build from raw stored values; blank strings count as missing.
    pub fn from_stored(token: Option<String>, user_id: Option<String>) -> Self {
        let keep = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            token: keep(token),
            user_id: keep(user_id),
        }
    }

    /// A session is active when both a token and a user id are known.
    pub fn is_active(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }

    /// Value of the `Authorization` header, when a token is held
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// User id to attach to requests; only set for an active session
    pub fn active_user_id(&self) -> Option<&str> {
        if self.is_active() {
            self.user_id.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_stored_values_are_ignored() {
        let session = Session::from_stored(Some("  ".into()), Some("42".into()));
        assert_eq!(session.token, None);
        assert!(!session.is_active());
        assert_eq!(session.active_user_id(), None);
    }

    #[test]
    fn test_bearer_header() {
        let session = Session::authenticated("abc", "7");
        assert_eq!(session.bearer().as_deref(), Some("Bearer abc"));
        assert_eq!(session.active_user_id(), Some("7"));
    }

    #[test]
    fn test_token_without_user_is_not_active() {
        let session = Session::from_stored(Some("abc".into()), None);
        assert!(!session.is_active());
        assert!(session.bearer().is_some());
    }
}
