use serde::{Deserialize, Serialize};

/// The monthly activity quota assigned to a manager.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerQuota {
    /// Unique identifier.
    pub id: i64,

    /// The manager this quota applies to.
    pub manager_id: i64,

    /// Maximum garages the manager may administer.
    pub garage_limit: u32,

    /// Garages currently administered.
    pub garages_used: u32,
}

impl ManagerQuota {
    /// Whether the manager has reached the assigned limit.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.garages_used >= self.garage_limit
    }
}

/// Payload for creating or editing a manager quota.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManagerQuotaRequest {
    /// The manager this quota applies to.
    pub manager_id: i64,

    /// Maximum garages the manager may administer.
    pub garage_limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests quota exhaustion boundary
    #[test]
    fn test_quota_exhaustion() {
        let mut quota = ManagerQuota {
            id: 1,
            manager_id: 4,
            garage_limit: 3,
            garages_used: 2,
        };
        assert!(!quota.is_exhausted());
        quota.garages_used = 3;
        assert!(quota.is_exhausted());
    }
}
