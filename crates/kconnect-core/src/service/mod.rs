//! Settings Synchronization Service
//!
//! Typed wrappers around the user-settings and support endpoints. Every call
//! is independent: it takes the caller's [`Session`](crate::domain::Session)
//! explicitly, sends at most one request and maps any failure to a single
//! [`ApiError`] carrying text for the user.

mod settings;
mod support;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::Persona;
use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, ApiResponse, Transport};

pub use settings::{
    FALLBACK_CHANGE_PASSWORD, FALLBACK_LOAD_ALERTES, FALLBACK_LOAD_CONFIDALITY,
    FALLBACK_UPDATE_ALERTES, FALLBACK_UPDATE_CONFIDALITY,
};
pub use support::FALLBACK_SUPPORT_TICKET;

/// Service bound to a transport and to the persona of the running front-end
pub struct SettingsService<T: Transport> {
    transport: T,
    persona: Persona,
}

/// Error body returned by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl<T: Transport> SettingsService<T> {
    pub fn new(transport: T, persona: Persona) -> Self {
        Self { transport, persona }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ---- private helpers ----

    /// Send the request and require a 2xx status.
    async fn exchange(&self, request: ApiRequest, fallback: &str) -> ApiResult<ApiResponse> {
        let method = request.method.as_str();
        let path = request.path.clone();

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("{} {} failed: {}", method, path, e);
            ApiError::Network { message: fallback.to_string() }
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let error = server_error(&response, fallback);
        tracing::warn!("{} {} -> {}: {}", method, path, response.status, error);
        Err(error)
    }

    /// Send the request and decode a JSON body.
    async fn exchange_json<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> ApiResult<R> {
        let response = self.exchange(request, fallback).await?;
        serde_json::from_str(&response.body).map_err(|e| {
            tracing::warn!("Unexpected response body: {}", e);
            ApiError::Network { message: fallback.to_string() }
        })
    }
}

/// Server-supplied message if the body carries one, the fallback otherwise
fn server_error(response: &ApiResponse, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message.or(body.error))
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ApiError::Server { status: response.status, message }
}

/// Request building can only fail on serialization, which is unexpected.
fn build_failed(fallback: &str) -> impl FnOnce(crate::error::TransportError) -> ApiError + '_ {
    move |e| {
        tracing::warn!("Could not build request: {}", e);
        ApiError::Network { message: fallback.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse { status, body: body.to_string() }
    }

    #[test]
    fn test_server_message_is_used_verbatim() {
        let err = server_error(&response(400, r#"{"message":"Current password is incorrect"}"#), "fallback");
        assert_eq!(err, ApiError::Server { status: 400, message: "Current password is incorrect".into() });
    }

    #[test]
    fn test_error_field_alias() {
        let err = server_error(&response(422, r#"{"error":"Too short"}"#), "fallback");
        assert_eq!(err.message(), "Too short");
    }

    #[test]
    fn test_missing_message_falls_back() {
        assert_eq!(server_error(&response(500, ""), "fallback").message(), "fallback");
        assert_eq!(server_error(&response(502, "<html>"), "fallback").message(), "fallback");
        assert_eq!(server_error(&response(400, r#"{"message":" "}"#), "fallback").message(), "fallback");
    }
}
