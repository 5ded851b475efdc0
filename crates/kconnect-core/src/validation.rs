//! Pre-submit Validation
//!
//! Checks run before any request leaves the client.

use crate::error::ApiError;

pub const MSG_PASSWORD_FIELDS_REQUIRED: &str = "All password fields are required.";
pub const MSG_PASSWORD_UNCHANGED: &str = "The new password must be different from the current password.";
pub const MSG_PASSWORD_MISMATCH: &str = "The new password and its confirmation do not match.";
pub const MSG_TICKET_FIELDS_REQUIRED: &str = "Subject and message are required.";

/// Rules, in order: all fields non-empty, new differs from current,
/// confirmation equals new.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<(), ApiError> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(ApiError::Validation(MSG_PASSWORD_FIELDS_REQUIRED.to_string()));
    }
    if new == current {
        return Err(ApiError::Validation(MSG_PASSWORD_UNCHANGED.to_string()));
    }
    if new != confirm {
        return Err(ApiError::Validation(MSG_PASSWORD_MISMATCH.to_string()));
    }
    Ok(())
}

pub fn validate_support_ticket(subject: &str, content: &str) -> Result<(), ApiError> {
    if subject.trim().is_empty() || content.trim().is_empty() {
        return Err(ApiError::Validation(MSG_TICKET_FIELDS_REQUIRED.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules() {
        assert_eq!(
            validate_password_change("", "b", "b").unwrap_err().to_string(),
            MSG_PASSWORD_FIELDS_REQUIRED
        );
        assert_eq!(
            validate_password_change("a", "a", "a").unwrap_err().to_string(),
            MSG_PASSWORD_UNCHANGED
        );
        assert_eq!(
            validate_password_change("a", "b", "c").unwrap_err().to_string(),
            MSG_PASSWORD_MISMATCH
        );
        assert!(validate_password_change("a", "b", "b").is_ok());
    }

    #[test]
    fn test_passwords_are_not_trimmed() {
        // Whitespace is a legitimate password character
        assert!(validate_password_change(" ", "  ", "  ").is_ok());
    }

    #[test]
    fn test_ticket_rules() {
        assert!(validate_support_ticket("  ", "body").unwrap_err().is_validation());
        assert!(validate_support_ticket("subject", "body").is_ok());
    }
}
