//! Medication availability status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability status of a catalog medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MedicationStatus {
    /// Can be prescribed and assigned to alerts.
    #[serde(rename = "disponible")]
    Available,
    /// Withdrawn from the catalog; existing alerts keep referencing it.
    #[serde(rename = "discontinuado")]
    Discontinued,
}

impl MedicationStatus {
    /// Check if the medication can be assigned to new alerts.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "disponible",
            Self::Discontinued => "discontinuado",
        }
    }
}

impl fmt::Display for MedicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MedicationStatus {
    type Err = medialert_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disponible" => Ok(Self::Available),
            "discontinuado" => Ok(Self::Discontinued),
            _ => Err(medialert_core::AppError::validation(format!(
                "Invalid medication status: '{s}'. Expected one of: disponible, discontinuado"
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
            "Disponible".parse::<MedicationStatus>().unwrap(),
            MedicationStatus::Available
        );
        assert!("agotado".parse::<MedicationStatus>().is_err());
    }
}
