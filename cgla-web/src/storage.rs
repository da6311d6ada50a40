//! Durable session persistence.
//!
//! The repository owns two physical stores: a pair of local-storage entries
//! (token + serialized user record) and a short-lived cookie copy of the
//! token kept for server-side render compatibility. Consumers only see the
//! `save`/`load`/`clear` contract.

use gloo_storage::{LocalStorage, Storage};
use shared::models::AuthenticatedUser;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const TOKEN_KEY: &str = "cgla.token";
const USER_KEY: &str = "cgla.user";
const TOKEN_COOKIE: &str = "cgla_token";
const COOKIE_MAX_AGE_SECS: u32 = 7 * 24 * 60 * 60;

/// Durable client-side storage for the session.
#[derive(Debug)]
pub struct SessionRepository;

impl SessionRepository {
    /// Persist the token and user record, mirroring the token into a cookie.
    pub fn save(token: &str, user: &AuthenticatedUser) {
        if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
            log::error!("failed to persist session token: {err}");
        }
        if let Err(err) = LocalStorage::set(USER_KEY, user) {
            log::error!("failed to persist session user: {err}");
        }
        write_token_cookie(Some(token));
    }

    /// Read back the persisted session, if both halves are present and
    /// parseable. A malformed user record reads as `None`.
    pub fn load() -> Option<(String, AuthenticatedUser)> {
        let token: String = LocalStorage::get(TOKEN_KEY).ok()?;
        let user: AuthenticatedUser = LocalStorage::get(USER_KEY).ok()?;
        Some((token, user))
    }

    /// Remove every persisted trace of the session.
    pub fn clear() {
        LocalStorage::delete(TOKEN_KEY);
        LocalStorage::delete(USER_KEY);
        write_token_cookie(None);
    }
}

fn write_token_cookie(token: Option<&str>) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(html_doc) = document.dyn_into::<HtmlDocument>() else {
        return;
    };
    let cookie = match token {
        Some(value) => format!(
            "{TOKEN_COOKIE}={value}; max-age={COOKIE_MAX_AGE_SECS}; path=/; samesite=strict{}",
            secure_attribute()
        ),
        None => format!("{TOKEN_COOKIE}=; max-age=0; path=/; samesite=strict"),
    };
    if let Err(err) = html_doc.set_cookie(&cookie) {
        log::error!("failed to write session cookie: {err:?}");
    }
}

// The secure flag would make the cookie invisible over plain-http local
// development, so it is only set on non-local hosts.
fn secure_attribute() -> &'static str {
    let is_local = web_sys::window()
        .and_then(|window| window.location().hostname().ok())
        .is_some_and(|host| host == "localhost" || host == "127.0.0.1");
    if is_local { "" } else { "; secure" }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::models::Role;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn alice() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            username: "alice".to_string(),
            firstname: None,
            lastname: None,
            email: "a@x.com".to_string(),
            role: Role::SuperAdmin,
        }
    }

    #[wasm_bindgen_test]
    fn test_save_load_round_trip() {
        SessionRepository::save("tok123", &alice());
        let (token, user) = SessionRepository::load().expect("session should load back");
        assert_eq!(token, "tok123");
        assert_eq!(user.username, "alice");
        SessionRepository::clear();
    }

    #[wasm_bindgen_test]
    fn test_clear_removes_session() {
        SessionRepository::save("tok123", &alice());
        SessionRepository::clear();
        assert!(SessionRepository::load().is_none());
    }

    #[wasm_bindgen_test]
    fn test_corrupt_user_record_reads_as_none() {
        LocalStorage::set(TOKEN_KEY, "tok123").unwrap();
        LocalStorage::raw().set_item(USER_KEY, "{not json").unwrap();
        assert!(SessionRepository::load().is_none());
        SessionRepository::clear();
    }
}
