use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A commercial offer available to garages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    /// Unique identifier.
    pub id: i64,

    /// Offer title shown to customers.
    pub title: String,

    /// Marketing description.
    pub description: String,

    /// Price in euros.
    pub price: f64,

    /// First day the offer is valid.
    pub valid_from: NaiveDate,

    /// Last day the offer is valid.
    pub valid_until: NaiveDate,

    /// Whether the offer is currently purchasable.
    pub active: bool,
}

/// Payload for creating or editing an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferRequest {
    /// Offer title shown to customers.
    pub title: String,

    /// Marketing description.
    pub description: String,

    /// Price in euros.
    pub price: f64,

    /// First day the offer is valid.
    pub valid_from: NaiveDate,

    /// Last day the offer is valid.
    pub valid_until: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests offer deserialization including date fields
    #[test]
    fn test_offer_deserialization() {
        let json = r#"{
            "id": 5,
            "title": "Lavage intégral",
            "description": "Intérieur et extérieur",
            "price": 29.9,
            "valid_from": "2026-01-01",
            "valid_until": "2026-12-31",
            "active": true
        }"#;
        let offer: Offer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.id, 5);
        assert_eq!(offer.valid_from, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(offer.active);
    }
}
