//! Support tickets
//!
//! Public endpoint: anonymous visitors may write in too.

use crate::config::SUPPORT_TICKETS_PATH;
use crate::domain::{Session, SupportTicket};
use crate::error::ApiResult;
use crate::transport::{ApiRequest, Method, Transport};
use crate::validation::validate_support_ticket;

use super::{build_failed, SettingsService};

pub const FALLBACK_SUPPORT_TICKET: &str = "Unable to send your message. Please try again later.";

impl<T: Transport> SettingsService<T> {
    /// `POST` a ticket tagged with this persona's source label.
    ///
    /// `user_id` is only filled in for an active session; no auth header is
    /// sent either way.
    pub async fn send_support_ticket(&self, session: &Session, subject: &str, content: &str) -> ApiResult<()> {
        validate_support_ticket(subject, content)?;

        let ticket = SupportTicket {
            subject: subject.to_string(),
            content: content.to_string(),
            user_id: session.active_user_id().map(str::to_string),
            source: self.persona.source_label().to_string(),
        };
        let request = ApiRequest::new(Method::Post, SUPPORT_TICKETS_PATH)
            .json(&ticket)
            .map_err(build_failed(FALLBACK_SUPPORT_TICKET))?;

        self.exchange(request, FALLBACK_SUPPORT_TICKET).await?;
        tracing::info!("Support ticket sent (anonymous: {})", ticket.user_id.is_none());
        Ok(())
    }
}
