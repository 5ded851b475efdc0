//! Session Storage
//!
//! Bearer token and user id kept in `localStorage`.

use kconnect_core::domain::Session;

const TOKEN_KEY: &str = "token";
const USER_ID_KEY: &str = "user_id";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

/// Session found in storage (anonymous when storage is unavailable)
pub fn load_session() -> Session {
    let Some(storage) = local_storage() else {
        tracing::warn!("localStorage unavailable, starting anonymous");
        return Session::anonymous();
    };
    let token = storage.get_item(TOKEN_KEY).ok().flatten();
    let user_id = storage.get_item(USER_ID_KEY).ok().flatten();
    Session::from_stored(token, user_id)
}

pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_ID_KEY);
    }
}
