use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded payment from a garage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    /// Unique identifier.
    pub id: i64,

    /// The paying garage.
    pub garage_id: i64,

    /// Amount in euros.
    pub amount: f64,

    /// Payment method label (card, transfer, ...).
    pub method: String,

    /// When the payment was recorded.
    pub paid_at: DateTime<Utc>,
}

/// Payload for creating or editing a payment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentRequest {
    /// The paying garage.
    pub garage_id: i64,

    /// Amount in euros.
    pub amount: f64,

    /// Payment method label.
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests payment deserialization including the timestamp
    #[test]
    fn test_payment_deserialization() {
        let json = r#"{
            "id": 9,
            "garage_id": 3,
            "amount": 120.5,
            "method": "card",
            "paid_at": "2026-08-01T10:30:00Z"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.garage_id, 3);
        assert_eq!(payment.method, "card");
    }
}
