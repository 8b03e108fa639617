//! Medication entity model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::MedicationStatus;

/// A medication in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    /// Unique medication identifier.
    pub id: i64,
    /// Commercial name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-text description.
    #[serde(rename = "descripcion", default)]
    pub description: Option<String>,
    /// Active-ingredient composition.
    #[serde(rename = "composicion", default)]
    pub composition: Option<String>,
    /// Known side effects.
    #[serde(rename = "sintomas_secundarios", default)]
    pub side_effects: Option<String>,
    /// Indications for use.
    #[serde(rename = "indicaciones", default)]
    pub indications: Option<String>,
    /// Recommended age range.
    #[serde(rename = "rango_edad", default)]
    pub age_range: Option<String>,
    /// Availability status.
    #[serde(rename = "estado_medicamento")]
    pub status: MedicationStatus,
}

/// Payload for adding a medication to the catalog.
///
/// New medications always start as `disponible`; the backend sets the status.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateMedication {
    /// Commercial name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "El nombre del medicamento es requerido"))]
    pub name: String,
    /// Free-text description.
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Active-ingredient composition.
    #[serde(rename = "composicion", skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    /// Known side effects.
    #[serde(rename = "sintomas_secundarios", skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    /// Indications for use.
    #[serde(rename = "indicaciones", skip_serializing_if = "Option::is_none")]
    pub indications: Option<String>,
    /// Recommended age range.
    #[serde(rename = "rango_edad", skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
}

/// Partial-update payload for an existing medication.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateMedication {
    /// New commercial name.
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New composition.
    #[serde(rename = "composicion", skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    /// New side effects.
    #[serde(rename = "sintomas_secundarios", skip_serializing_if = "Option::is_none")]
    pub side_effects: Option<String>,
    /// New indications.
    #[serde(rename = "indicaciones", skip_serializing_if = "Option::is_none")]
    pub indications: Option<String>,
    /// New age range.
    #[serde(rename = "rango_edad", skip_serializing_if = "Option::is_none")]
    pub age_range: Option<String>,
    /// New availability status (discontinue/reactivate).
    #[serde(rename = "estado_medicamento", skip_serializing_if = "Option::is_none")]
    pub status: Option<MedicationStatus>,
}

impl UpdateMedication {
    /// Payload that only flips the availability status.
    pub fn set_status(status: MedicationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_deserialize_wire_row() {
        let row = json!({
            "id": 4,
            "nombre": "Ibuprofeno",
            "descripcion": "Antiinflamatorio no esteroideo",
            "composicion": "Ibuprofeno 400mg",
            "sintomas_secundarios": "Dolor estomacal",
            "indicaciones": "Tomar con alimentos",
            "rango_edad": "12+",
            "estado_medicamento": "disponible"
        });
        let med: Medication = serde_json::from_value(row).unwrap();
        assert_eq!(med.name, "Ibuprofeno");
        assert!(med.status.is_available());
    }

    #[test]
    fn test_create_requires_name() {
        let bad = CreateMedication {
            name: String::new(),
            description: None,
            composition: None,
            side_effects: None,
            indications: None,
            age_range: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_discontinue_payload() {
        let update = UpdateMedication::set_status(MedicationStatus::Discontinued);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "estado_medicamento": "discontinuado" }));
    }
}
