use once_cell::unsync::OnceCell;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    ApiEnvelope, AuthenticatedUser, Benefit, Garage, LoginRequest, LoginResponse, ManagerQuota,
    Offer, Payment, ValidationErrorBody,
};
use thiserror::Error;

use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<CglaClient> = OnceCell::new();
}

/// Failures surfaced by the API client, mapped from HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The login exchange was rejected (HTTP 401).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The request failed field validation (HTTP 422).
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The request never reached the backend.
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// Any other non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
}

impl ApiError {
    /// A short message suitable for a user-facing toast.
    #[must_use]
    pub fn toast_message(&self) -> String {
        match self {
            Self::InvalidCredentials => "Identifiants invalides".to_string(),
            Self::Validation(messages) => messages.join(" · "),
            Self::Unreachable(_) => "Serveur injoignable, veuillez réessayer".to_string(),
            Self::Status(status) => format!("Erreur serveur ({status})"),
        }
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Unreachable(err.to_string())
}

/// Lightweight API client for CGLA-PRO backend interactions.
#[derive(Clone, Debug)]
pub struct CglaClient {
    base_url: String,
    client: Client,
}

impl CglaClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client, bound to the configured API base URL.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Exchange credentials for a bearer token. Credentials travel
    /// form-encoded, matching the backend's login endpoint.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self
            .client
            .post(url)
            .form(request)
            .send()
            .await
            .map_err(transport)?;
        match response.status() {
            StatusCode::OK | StatusCode::CREATED => response.json().await.map_err(transport),
            StatusCode::UNAUTHORIZED => Err(ApiError::InvalidCredentials),
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body: ValidationErrorBody = response.json().await.map_err(transport)?;
                Err(ApiError::Validation(
                    body.detail.into_iter().map(|field| field.msg).collect(),
                ))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }

    /// Retrieve the profile attached to a bearer token.
    pub async fn me(&self, token: &str) -> Result<AuthenticatedUser, ApiError> {
        let url = self.api_url("auth/me");
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_success(&response)?;
        response.json().await.map_err(transport)
    }

    /// Notify the backend that a token is invalidated. Callers treat a
    /// failure here as non-fatal.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let url = self.api_url("api/logout");
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_success(&response)
    }

    /// Ask the backend to start a password reset for an email address.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let url = self.api_url("auth/password-reset");
        let response = self
            .client
            .post(url)
            .form(&[("email", email)])
            .send()
            .await
            .map_err(transport)?;
        Self::expect_success(&response)
    }

    /// List a CRUD resource collection.
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.api_url(resource);
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_success(&response)?;
        let envelope: ApiEnvelope<Vec<T>> = response.json().await.map_err(transport)?;
        Ok(envelope.into_data())
    }

    /// Create a CRUD resource.
    pub async fn create<Req: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        token: &str,
        payload: &Req,
    ) -> Result<T, ApiError> {
        let url = self.api_url(&format!("{resource}/create"));
        let response = self
            .client
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        Self::read_envelope(response).await
    }

    /// Edit a CRUD resource.
    pub async fn update<Req: Serialize, T: DeserializeOwned>(
        &self,
        resource: &str,
        token: &str,
        id: i64,
        payload: &Req,
    ) -> Result<T, ApiError> {
        let url = self.api_url(&format!("{resource}/edit/{id}"));
        let response = self
            .client
            .put(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(transport)?;
        Self::read_envelope(response).await
    }

    /// Delete a CRUD resource.
    pub async fn delete_resource(
        &self,
        resource: &str,
        token: &str,
        id: i64,
    ) -> Result<(), ApiError> {
        let url = self.api_url(&format!("{resource}/delete/{id}"));
        let response = self
            .client
            .delete(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_success(&response)
    }

    /// List platform users.
    pub async fn list_users(&self, token: &str) -> Result<Vec<AuthenticatedUser>, ApiError> {
        self.list("users", token).await
    }

    /// List garages.
    pub async fn list_garages(&self, token: &str) -> Result<Vec<Garage>, ApiError> {
        self.list("garages", token).await
    }

    /// List commercial offers.
    pub async fn list_offers(&self, token: &str) -> Result<Vec<Offer>, ApiError> {
        self.list("offers", token).await
    }

    /// List customer benefits.
    pub async fn list_benefits(&self, token: &str) -> Result<Vec<Benefit>, ApiError> {
        self.list("benefits", token).await
    }

    /// List payment records.
    pub async fn list_payments(&self, token: &str) -> Result<Vec<Payment>, ApiError> {
        self.list("payments", token).await
    }

    /// List manager quotas.
    pub async fn list_quotas(&self, token: &str) -> Result<Vec<ManagerQuota>, ApiError> {
        self.list("quotas", token).await
    }

    fn expect_success(response: &reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(status.as_u16()))
        }
    }

    // Write endpoints report validation problems with the same 422 body as login.
    async fn read_envelope<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        match response.status() {
            status if status.is_success() => {
                let envelope: ApiEnvelope<T> = response.json().await.map_err(transport)?;
                Ok(envelope.into_data())
            }
            StatusCode::UNPROCESSABLE_ENTITY => {
                let body: ValidationErrorBody = response.json().await.map_err(transport)?;
                Err(ApiError::Validation(
                    body.detail.into_iter().map(|field| field.msg).collect(),
                ))
            }
            status => Err(ApiError::Status(status.as_u16())),
        }
    }
}
