//! Session mutation API.
//!
//! The session store is mutated exclusively through [`login`], [`logout`]
//! and [`refresh_auth`]; every other component reads snapshots through
//! yewdux selectors.

use shared::models::AuthenticatedUser;
use wasm_bindgen_futures::spawn_local;
use yewdux::Dispatch;

use crate::api::{ApiError, CglaClient};
use crate::models::session_state::SessionState;
use crate::storage::SessionRepository;

/// Adopt a freshly exchanged token and user record.
///
/// Persists both halves before committing the in-memory state, so a reload
/// observes the same session. An empty token is refused.
pub fn login(dispatch: &Dispatch<SessionState>, token: String, user: AuthenticatedUser) {
    if token.is_empty() {
        log::warn!("ignoring login with an empty token");
        return;
    }
    SessionRepository::save(&token, &user);
    dispatch.set(SessionState::authenticated(token, user));
}

/// Tear down the session.
///
/// The backend is notified on a best-effort basis; a failed notification is
/// logged and swallowed so local cleanup is unconditional. Idempotent: when
/// no session exists this only re-commits the cleared state.
pub async fn logout(dispatch: &Dispatch<SessionState>) {
    if let Some(token) = dispatch.get().token.clone() {
        if let Err(err) = CglaClient::shared().logout(&token).await {
            log::warn!("logout notification failed: {err}");
        }
    }
    SessionRepository::clear();
    dispatch.set(SessionState::cleared());
}

/// Restore the session from durable storage.
///
/// Invoked once on startup and exposed for manual retry. Always leaves the
/// store with `is_loading == false`, whatever the storage contained. An
/// adopted session is then revalidated against the server in the background:
/// a stale token tears the session down, a fresh one refreshes the cached
/// user record, and an unreachable backend leaves the local session alone.
pub fn refresh_auth(dispatch: &Dispatch<SessionState>) {
    let state = resolve_rehydration(SessionRepository::load());
    if !state.is_authenticated() {
        // Corrupt or partial persisted state: degrade silently to logged out.
        SessionRepository::clear();
    }
    let token = state.token.clone();
    dispatch.set(state);

    if let Some(token) = token {
        let dispatch = dispatch.clone();
        spawn_local(async move {
            match CglaClient::shared().me(&token).await {
                Ok(user) => {
                    SessionRepository::save(&token, &user);
                    dispatch.set(SessionState::authenticated(token, user));
                }
                Err(ApiError::InvalidCredentials | ApiError::Status(401)) => {
                    log::warn!("persisted token rejected by the server; logging out");
                    SessionRepository::clear();
                    dispatch.set(SessionState::cleared());
                }
                Err(err) => log::warn!("session revalidation skipped: {err}"),
            }
        });
    }
}

/// Decide what a persisted record rehydrates to.
///
/// A session is adopted only when the token is non-empty and the user record
/// carries a real id; anything else settles as unauthenticated.
fn resolve_rehydration(loaded: Option<(String, AuthenticatedUser)>) -> SessionState {
    match loaded {
        Some((token, user)) if !token.is_empty() && user.is_well_formed() => {
            SessionState::authenticated(token, user)
        }
        _ => SessionState::cleared(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

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

    /// A persisted token plus a well-formed user rehydrates authenticated
    #[test]
    fn test_rehydration_adopts_valid_session() {
        let state = resolve_rehydration(Some(("tok123".to_string(), alice())));
        assert!(state.is_authenticated());
        assert!(!state.is_loading);
        assert_eq!(state.token.as_deref(), Some("tok123"));
    }

    /// Nothing persisted rehydrates unauthenticated and settled
    #[test]
    fn test_rehydration_without_persisted_state() {
        let state = resolve_rehydration(None);
        assert!(!state.is_authenticated());
        assert!(state.token.is_none());
        assert!(!state.is_loading);
    }

    /// An empty persisted token is not adopted
    #[test]
    fn test_rehydration_rejects_empty_token() {
        let state = resolve_rehydration(Some((String::new(), alice())));
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
    }

    /// A user record without a real id is not adopted
    #[test]
    fn test_rehydration_rejects_malformed_user() {
        let mut user = alice();
        user.id = 0;
        let state = resolve_rehydration(Some(("tok123".to_string(), user)));
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
        assert!(!state.is_loading);
    }

    /// Rehydration output always couples user and token
    #[test]
    fn test_rehydration_preserves_coupling() {
        for loaded in [
            None,
            Some((String::new(), alice())),
            Some(("tok123".to_string(), alice())),
        ] {
            let state = resolve_rehydration(loaded);
            assert_eq!(state.user.is_some(), state.token.is_some());
        }
    }
}
