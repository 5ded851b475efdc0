//! Settings Payloads
//!
//! Bodies exchanged with the private user-settings endpoints and the public
//! support-ticket endpoint. Toggle objects keep any field the client does not
//! know about so that a load/update cycle writes them back untouched.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Body of `PUT /users/password`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordChangePayload {
    pub current_password: String,
    pub new_password: String,
}

/// Notification alert preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlertesSettings {
    #[serde(default)]
    pub email_new_opportunities: bool,
    #[serde(default)]
    pub email_messages: bool,
    #[serde(default)]
    pub email_contact_requests: bool,
    #[serde(default)]
    pub push_notifications: bool,
    #[serde(default)]
    pub newsletter: bool,
    /// Fields unknown to this client
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Privacy preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfidalitySettings {
    #[serde(default)]
    pub profile_visible: bool,
    #[serde(default)]
    pub show_email: bool,
    #[serde(default)]
    pub show_phone: bool,
    #[serde(default)]
    pub searchable_by_partners: bool,
    /// Fields unknown to this client
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Body of `POST /support-tickets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub subject: String,
    pub content: String,
    /// `null` for anonymous submissions
    pub user_id: Option<String>,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unknown_alert_fields_survive_write_back() {
        let raw = json!({
            "email_messages": true,
            "sms_digest": false,
            "quiet_hours": { "from": 22, "to": 7 }
        });
        let settings: AlertesSettings = serde_json::from_value(raw).unwrap();
        assert!(settings.email_messages);
        assert!(!settings.newsletter);

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["sms_digest"], json!(false));
        assert_eq!(back["quiet_hours"], json!({ "from": 22, "to": 7 }));
        assert_eq!(back["email_messages"], json!(true));
    }

    #[test]
    fn test_anonymous_ticket_serializes_null_user() {
        let ticket = SupportTicket {
            subject: "Help".into(),
            content: "Cannot upload CV".into(),
            user_id: None,
            source: "k-profile".into(),
        };
        let value = serde_json::to_value(&ticket).unwrap();
        assert_eq!(value["user_id"], serde_json::Value::Null);
        assert!(value.as_object().unwrap().contains_key("user_id"));
    }
}
