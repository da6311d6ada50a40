use shared::models::AuthenticatedUser;
use yewdux::Store;

/// Single source of truth for "who is logged in".
///
/// Mutation happens only through the operations in [`crate::session`];
/// `user` and `token` are always set and cleared together.
#[derive(Clone, Debug, PartialEq, Store)]
pub struct SessionState {
    pub user: Option<AuthenticatedUser>,
    pub token: Option<String>,
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        // Loading until the rehydration pass has run once.
        Self {
            user: None,
            token: None,
            is_loading: true,
        }
    }
}

impl SessionState {
    /// The unauthenticated, fully-settled state.
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            user: None,
            token: None,
            is_loading: false,
        }
    }

    /// The authenticated, fully-settled state.
    #[must_use]
    pub fn authenticated(token: String, user: AuthenticatedUser) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_loading: false,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
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

    /// The default state is loading and unauthenticated
    #[test]
    fn test_default_state_is_loading() {
        let state = SessionState::default();
        assert!(state.is_loading);
        assert!(!state.is_authenticated());
        assert!(state.token.is_none());
    }

    /// User and token are set and cleared together
    #[test]
    fn test_session_coupling() {
        let authenticated = SessionState::authenticated("tok123".to_string(), alice());
        assert_eq!(
            authenticated.user.is_some(),
            authenticated.token.is_some(),
            "authenticated state must carry both user and token"
        );

        let cleared = SessionState::cleared();
        assert_eq!(cleared.user.is_none(), cleared.token.is_none());
        assert!(!cleared.is_authenticated());
    }

    /// Clearing twice yields the same settled state
    #[test]
    fn test_cleared_is_idempotent() {
        let first = SessionState::cleared();
        let second = SessionState::cleared();
        assert_eq!(first, second);
        assert!(!second.is_loading);
    }
}
