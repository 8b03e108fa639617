//! Alert lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a medication reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertStatus {
    /// Reminder is running.
    #[serde(rename = "activa")]
    Active,
    /// Treatment finished.
    #[serde(rename = "completada")]
    Completed,
    /// Paused by an admin.
    #[serde(rename = "inactiva")]
    Inactive,
    /// Delivery failed.
    #[serde(rename = "fallida")]
    Failed,
}

impl AlertStatus {
    /// Check if the reminder is currently running.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "activa",
            Self::Completed => "completada",
            Self::Inactive => "inactiva",
            Self::Failed => "fallida",
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AlertStatus {
    type Err = medialert_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "activa" => Ok(Self::Active),
            "completada" => Ok(Self::Completed),
            "inactiva" => Ok(Self::Inactive),
            "fallida" => Ok(Self::Failed),
            _ => Err(medialert_core::AppError::validation(format!(
                "Invalid alert status: '{s}'. Expected one of: activa, completada, inactiva, fallida"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("activa".parse::<AlertStatus>().unwrap(), AlertStatus::Active);
        assert_eq!(
            "FALLIDA".parse::<AlertStatus>().unwrap(),
            AlertStatus::Failed
        );
        assert!("pausada".parse::<AlertStatus>().is_err());
    }
}
