//! Backend Calls
//!
//! Thin wrappers the forms call: build the service for the active persona,
//! run one operation and hand back user-facing text on failure.

use kconnect_core::domain::{AlertesSettings, ConfidalitySettings, Session};
use kconnect_core::{ClientConfig, ReqwestTransport, SettingsService};

fn service(config: ClientConfig) -> SettingsService<ReqwestTransport> {
    let persona = config.persona;
    SettingsService::new(ReqwestTransport::new(config), persona)
}

// ========================
// Password
// ========================

pub async fn change_password(
    config: ClientConfig,
    session: Session,
    current: String,
    new: String,
    confirm: String,
) -> Result<(), String> {
    service(config)
        .change_password(&session, &current, &new, &confirm)
        .await
        .map_err(|e| e.to_string())
}

// ========================
// Preferences
// ========================

pub async fn load_alertes_settings(config: ClientConfig, session: Session) -> Result<AlertesSettings, String> {
    service(config).load_alertes_settings(&session).await.map_err(|e| e.to_string())
}

pub async fn update_alertes_settings(config: ClientConfig, session: Session, data: AlertesSettings) -> Result<(), String> {
    service(config).update_alertes_settings(&session, &data).await.map_err(|e| e.to_string())
}

pub async fn load_confidality_settings(config: ClientConfig, session: Session) -> Result<ConfidalitySettings, String> {
    service(config).load_confidality_settings(&session).await.map_err(|e| e.to_string())
}

pub async fn update_confidality_settings(
    config: ClientConfig,
    session: Session,
    data: ConfidalitySettings,
) -> Result<(), String> {
    service(config).update_confidality_settings(&session, &data).await.map_err(|e| e.to_string())
}

// ========================
// Support
// ========================

pub async fn send_support_ticket(
    config: ClientConfig,
    session: Session,
    subject: String,
    content: String,
) -> Result<(), String> {
    service(config)
        .send_support_ticket(&session, &subject, &content)
        .await
        .map_err(|e| e.to_string())
}
