use serde::{Deserialize, Serialize};

/// A wash garage operated under the franchise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Garage {
    /// Unique identifier.
    pub id: i64,

    /// Commercial name of the garage.
    pub name: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Whether the garage is currently operating.
    pub active: bool,
}

/// Payload for creating or editing a garage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GarageRequest {
    /// Commercial name of the garage.
    pub name: String,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
