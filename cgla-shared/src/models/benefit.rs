use serde::{Deserialize, Serialize};

/// A customer benefit granted alongside an offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Benefit {
    /// Unique identifier.
    pub id: i64,

    /// Benefit title.
    pub title: String,

    /// Benefit description.
    pub description: String,

    /// Offer this benefit is attached to, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<i64>,
}

/// Payload for creating or editing a benefit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenefitRequest {
    /// Benefit title.
    pub title: String,

    /// Benefit description.
    pub description: String,

    /// Offer this benefit is attached to, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<i64>,
}
