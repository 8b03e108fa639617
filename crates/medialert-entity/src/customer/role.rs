//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles known to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Administrator: full access to the admin dashboard.
    #[serde(rename = "admin")]
    Admin,
    /// Customer: sees only their own alerts and prescriptions.
    #[serde(rename = "cliente")]
    Customer,
}

impl UserRole {
    /// Check if this role may use the admin dashboard.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Customer => "cliente",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = medialert_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "cliente" => Ok(Self::Customer),
            _ => Err(medialert_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, cliente"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("CLIENTE".parse::<UserRole>().unwrap(), UserRole::Customer);
        assert!("doctor".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_wire_round_trip() {
        let json = serde_json::to_string(&UserRole::Customer).unwrap();
        assert_eq!(json, "\"cliente\"");
        let back: UserRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UserRole::Customer);
    }
}
