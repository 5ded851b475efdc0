//! Password and preference endpoints

use crate::config::{ALERTES_SETTINGS_PATH, CONFIDALITY_SETTINGS_PATH, PASSWORD_PATH};
use crate::domain::{AlertesSettings, ConfidalitySettings, PasswordChangePayload, Session};
use crate::error::ApiResult;
use crate::transport::{ApiRequest, Method, Transport};
use crate::validation::validate_password_change;

use super::{build_failed, SettingsService};

pub const FALLBACK_CHANGE_PASSWORD: &str = "Unable to change your password. Please try again.";
pub const FALLBACK_LOAD_ALERTES: &str = "Unable to load your alert settings.";
pub const FALLBACK_UPDATE_ALERTES: &str = "Unable to save your alert settings.";
pub const FALLBACK_LOAD_CONFIDALITY: &str = "Unable to load your privacy settings.";
pub const FALLBACK_UPDATE_CONFIDALITY: &str = "Unable to save your privacy settings.";

impl<T: Transport> SettingsService<T> {
    /// Validate locally, then `PUT` the new password.
    ///
    /// Nothing is sent when validation fails.
    pub async fn change_password(
        &self,
        session: &Session,
        current: &str,
        new: &str,
        confirm: &str,
    ) -> ApiResult<()> {
        validate_password_change(current, new, confirm)?;

        let payload = PasswordChangePayload {
            current_password: current.to_string(),
            new_password: new.to_string(),
        };
        let request = ApiRequest::new(Method::Put, PASSWORD_PATH)
            .authorization(session.bearer())
            .json(&payload)
            .map_err(build_failed(FALLBACK_CHANGE_PASSWORD))?;

        self.exchange(request, FALLBACK_CHANGE_PASSWORD).await?;
        tracing::info!("Password changed");
        Ok(())
    }

    pub async fn load_alertes_settings(&self, session: &Session) -> ApiResult<AlertesSettings> {
        let request = ApiRequest::new(Method::Get, ALERTES_SETTINGS_PATH).authorization(session.bearer());
        self.exchange_json(request, FALLBACK_LOAD_ALERTES).await
    }

    pub async fn update_alertes_settings(&self, session: &Session, data: &AlertesSettings) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Put, ALERTES_SETTINGS_PATH)
            .authorization(session.bearer())
            .json(data)
            .map_err(build_failed(FALLBACK_UPDATE_ALERTES))?;
        self.exchange(request, FALLBACK_UPDATE_ALERTES).await?;
        Ok(())
    }

    pub async fn load_confidality_settings(&self, session: &Session) -> ApiResult<ConfidalitySettings> {
        let request = ApiRequest::new(Method::Get, CONFIDALITY_SETTINGS_PATH).authorization(session.bearer());
        self.exchange_json(request, FALLBACK_LOAD_CONFIDALITY).await
    }

    pub async fn update_confidality_settings(&self, session: &Session, data: &ConfidalitySettings) -> ApiResult<()> {
        let request = ApiRequest::new(Method::Put, CONFIDALITY_SETTINGS_PATH)
            .authorization(session.bearer())
            .json(data)
            .map_err(build_failed(FALLBACK_UPDATE_CONFIDALITY))?;
        self.exchange(request, FALLBACK_UPDATE_CONFIDALITY).await?;
        Ok(())
    }
}
