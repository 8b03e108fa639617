//! Customer account status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account status for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerStatus {
    /// Account is active and can log in.
    #[serde(rename = "activo")]
    Active,
    /// Account was deactivated by an admin.
    #[serde(rename = "inactivo")]
    Inactive,
}

impl CustomerStatus {
    /// Check if the customer can log in with this status.
    pub fn can_login(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "activo",
            Self::Inactive => "inactivo",
        }
    }
}

impl fmt::Display for CustomerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CustomerStatus {
    type Err = medialert_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activo" => Ok(Self::Active),
            "inactivo" => Ok(Self::Inactive),
            _ => Err(medialert_core::AppError::validation(format!(
                "Invalid customer status: '{s}'. Expected one of: activo, inactivo"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "activo".parse::<CustomerStatus>().unwrap(),
            CustomerStatus::Active
        );
        assert!("bloqueado".parse::<CustomerStatus>().is_err());
    }
}
