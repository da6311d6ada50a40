//! Tests for the API client
//!
//! Validates URL shaping, the error taxonomy's user-facing messages, and the
//! request shapes sent to the backend.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, CglaClient};
    use shared::models::LoginRequest;

    /// Tests API client creation and base URL normalization
    #[test]
    fn test_api_client_creation() {
        let client = CglaClient::new("http://localhost:8000/api/");
        assert_eq!(
            client.api_url("auth/login"),
            "http://localhost:8000/api/auth/login"
        );
    }

    /// Leading slashes in paths do not double up
    #[test]
    fn test_api_url_join() {
        let client = CglaClient::new("/api");
        assert_eq!(client.api_url("/auth/me"), "/api/auth/me");
        assert_eq!(client.api_url("users"), "/api/users");
    }

    /// CRUD endpoint shapes follow the resource conventions
    #[test]
    fn test_crud_url_shapes() {
        let client = CglaClient::new("/api");
        assert_eq!(client.api_url("garages"), "/api/garages");
        assert_eq!(client.api_url("garages/create"), "/api/garages/create");
        assert_eq!(client.api_url("garages/edit/7"), "/api/garages/edit/7");
        assert_eq!(client.api_url("garages/delete/7"), "/api/garages/delete/7");
    }

    /// Error taxonomy maps to distinct user-facing messages
    #[test]
    fn test_error_toast_messages() {
        assert_eq!(
            ApiError::InvalidCredentials.toast_message(),
            "Identifiants invalides"
        );
        let validation = ApiError::Validation(vec![
            "username requis".to_string(),
            "mot de passe trop court".to_string(),
        ]);
        assert_eq!(
            validation.toast_message(),
            "username requis · mot de passe trop court"
        );
        assert!(
            ApiError::Unreachable("dns".to_string())
                .toast_message()
                .contains("injoignable")
        );
        assert_eq!(ApiError::Status(500).toast_message(), "Erreur serveur (500)");
    }

    /// Error display carries the underlying detail
    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ApiError::InvalidCredentials),
            "invalid credentials"
        );
        assert_eq!(
            format!("{}", ApiError::Validation(vec!["a".to_string(), "b".to_string()])),
            "validation failed: a; b"
        );
        assert_eq!(format!("{}", ApiError::Status(503)), "unexpected status 503");
    }

    /// Login requests carry both credential fields
    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["username"], "alice");
        assert_eq!(encoded["password"], "secret");
    }
}
