use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Access role of a directory user
///
/// Closed enumeration: values outside {Admin, Manager, User} are
/// unrepresentable, so membership never has to be re-checked at runtime.
/// Serializes with the exact variant name (`"Admin"`, ...), which is the
/// wire format the presentation layer expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    User,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Manager => write!(f, "Manager"),
            Role::User => write!(f, "User"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    /// Exact-match parse, used for query-string filters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Manager" => Ok(Role::Manager),
            "User" => Ok(Role::User),
            _ => Err("Invalid role".to_string()),
        }
    }
}

/// Account status of a directory user
///
/// New records default to `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Inactive,
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Active => write!(f, "Active"),
            Status::Inactive => write!(f, "Inactive"),
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Status::Active),
            "Inactive" => Ok(Status::Inactive),
            _ => Err("Invalid status".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn role_display_matches_wire_format() {
        assert_eq!(Role::Admin.to_string(), "Admin");
        assert_eq!(Role::Manager.to_string(), "Manager");
        assert_eq!(Role::User.to_string(), "User");
    }

    #[test]
    fn status_display_matches_wire_format() {
        assert_eq!(Status::Active.to_string(), "Active");
        assert_eq!(Status::Inactive.to_string(), "Inactive");
    }

    #[test]
    fn role_parses_exact_names() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("Manager".parse::<Role>(), Ok(Role::Manager));
        assert_eq!("User".parse::<Role>(), Ok(Role::User));
    }

    #[test]
    fn role_parse_rejects_unknown_and_wrong_case() {
        assert!("Wizard".parse::<Role>().is_err());
        assert!("admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn status_parse_rejects_unknown() {
        assert_eq!("Active".parse::<Status>(), Ok(Status::Active));
        assert!("Suspended".parse::<Status>().is_err());
    }

    #[test]
    fn role_serializes_as_variant_name() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
        let parsed: Role = serde_json::from_str("\"Manager\"").unwrap();
        assert_eq!(parsed, Role::Manager);
    }

    #[test]
    fn status_deserialization_rejects_invalid_variant() {
        assert!(serde_json::from_str::<Status>("\"Disabled\"").is_err());
    }
}
