use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Access roles recognized by the platform.
///
/// The set is closed: any role string outside this enumeration fails to
/// parse and is treated as "no elevated access" by every consumer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Manager,
    AdminGarage,
    EmployeeGarage,
    ClientGarage,
}

impl Role {
    /// All recognized roles, in declaration order.
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Manager,
        Role::AdminGarage,
        Role::EmployeeGarage,
        Role::ClientGarage,
    ];

    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Manager => "manager",
            Self::AdminGarage => "admin_garage",
            Self::EmployeeGarage => "employee_garage",
            Self::ClientGarage => "client_garage",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "super_admin" => Ok(Self::SuperAdmin),
            "manager" => Ok(Self::Manager),
            "admin_garage" => Ok(Self::AdminGarage),
            "employee_garage" => Ok(Self::EmployeeGarage),
            "client_garage" => Ok(Self::ClientGarage),
            _ => Err("unknown role"),
        }
    }
}

/// The identity record attached to an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Unique identifier for the user.
    pub id: i64,

    /// The user's login name.
    pub username: String,

    /// Optional given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    /// Optional family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    /// The user's email address.
    pub email: String,

    /// The user's access role.
    pub role: Role,
}

impl AuthenticatedUser {
    /// A persisted record is adoptable only when it carries a real id.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.id > 0
    }

    /// Preferred display string: full name when present, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.firstname, &self.lastname) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            _ => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> AuthenticatedUser {
        AuthenticatedUser {
            id: 1,
            username: "alice".to_string(),
            firstname: None,
            lastname: None,
            email: "alice@example.com".to_string(),
            role,
        }
    }

    /// Tests the role round trip through its canonical strings
    #[test]
    fn test_role_string_round_trip() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
            assert_eq!(format!("{role}"), role.as_str());
        }
    }

    /// Tests that unknown role strings are rejected
    #[test]
    fn test_unknown_role_rejected() {
        assert!("system_manager".parse::<Role>().is_err());
        assert!("station_owner".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        assert!("SUPER_ADMIN".parse::<Role>().is_err());
    }

    /// Tests serde snake_case representation
    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::AdminGarage).unwrap();
        assert_eq!(json, "\"admin_garage\"");
        let role: Role = serde_json::from_str("\"client_garage\"").unwrap();
        assert_eq!(role, Role::ClientGarage);
        assert!(serde_json::from_str::<Role>("\"owner\"").is_err());
    }

    /// Tests user record deserialization with optional names absent
    #[test]
    fn test_user_deserialization_without_names() {
        let json = r#"{"id":7,"username":"bob","email":"b@x.com","role":"manager"}"#;
        let user: AuthenticatedUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Manager);
        assert!(user.firstname.is_none());
        assert!(user.is_well_formed());
    }

    /// Tests that a zero id is not a well-formed record
    #[test]
    fn test_zero_id_not_well_formed() {
        let mut record = user(Role::ClientGarage);
        record.id = 0;
        assert!(!record.is_well_formed());
    }

    /// Tests display name preference order
    #[test]
    fn test_display_name() {
        let mut record = user(Role::Manager);
        assert_eq!(record.display_name(), "alice");
        record.firstname = Some("Alice".to_string());
        assert_eq!(record.display_name(), "Alice");
        record.lastname = Some("Martin".to_string());
        assert_eq!(record.display_name(), "Alice Martin");
    }
}
