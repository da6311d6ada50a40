use serde::{Deserialize, Serialize};

/// The uniform `{status, data}` envelope wrapping every CRUD response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiEnvelope<T> {
    /// Outcome marker reported by the backend, `success` on the happy path.
    pub status: String,

    /// The wrapped resource payload.
    pub data: T,
}

impl<T> ApiEnvelope<T> {
    /// Whether the backend reported a successful outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Unwrap the payload, discarding the status marker.
    #[must_use]
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests envelope deserialization around a list payload
    #[test]
    fn test_envelope_deserialization() {
        let json = r#"{"status": "success", "data": [1, 2, 3]}"#;
        let envelope: ApiEnvelope<Vec<i64>> = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.into_data(), vec![1, 2, 3]);
    }

    /// Tests non-success status detection
    #[test]
    fn test_envelope_failure_status() {
        let json = r#"{"status": "error", "data": null}"#;
        let envelope: ApiEnvelope<Option<i64>> = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
    }
}
