use serde::{Deserialize, Serialize};

use super::user::AuthenticatedUser;

/// Credentials submitted to `POST /auth/login`, form-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// The user's login name.
    pub username: String,

    /// The user's password.
    pub password: String,
}

/// Successful login exchange payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub access_token: String,

    /// Token scheme, `bearer` in practice.
    pub token_type: String,

    /// The authenticated identity.
    pub user: AuthenticatedUser,
}

/// Error body returned with HTTP 401 responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// Human-readable failure description.
    pub detail: String,
}

/// One field-level message inside a 422 validation response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// The validation message for one field.
    pub msg: String,
}

/// Error body returned with HTTP 422 responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationErrorBody {
    /// Field-level validation messages.
    pub detail: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Role;

    /// Tests login response deserialization from the wire shape
    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{
            "access_token": "tok123",
            "token_type": "bearer",
            "user": {"id": 1, "username": "alice", "email": "a@x.com", "role": "super_admin"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "tok123");
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.user.role, Role::SuperAdmin);
    }

    /// Tests that login requests form-encode both fields
    #[test]
    fn test_login_request_fields() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "secret");
    }

    /// Tests the 422 validation body shape
    #[test]
    fn test_validation_body_deserialization() {
        let json = r#"{"detail": [{"msg": "username required"}, {"msg": "password too short"}]}"#;
        let body: ValidationErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.detail.len(), 2);
        assert_eq!(body.detail[0].msg, "username required");
    }
}
