//! Consolidated prescription rows.
//!
//! The backend flattens alert + customer + medication + insurer + assigner
//! into one row per active alert; the report layer groups these into a
//! printable prescription.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::alert::AlertStatus;
use crate::customer::UserRole;

/// One active-alert line of a consolidated prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionRow {
    /// Source alert identifier.
    #[serde(rename = "alerta_id")]
    pub alert_id: i64,
    /// Dose instructions.
    #[serde(rename = "dosis", default)]
    pub dose: Option<String>,
    /// Frequency instructions.
    #[serde(rename = "frecuencia", default)]
    pub frequency: Option<String>,
    /// First day of treatment.
    #[serde(rename = "fecha_inicio", default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of treatment.
    #[serde(rename = "fecha_fin", default)]
    pub end_date: Option<NaiveDate>,
    /// Preferred intake time.
    #[serde(rename = "hora_preferida", default)]
    pub preferred_time: Option<NaiveTime>,
    /// Alert lifecycle status.
    #[serde(rename = "estado_alerta")]
    pub status: AlertStatus,
    /// Patient name.
    #[serde(rename = "cliente_nombre")]
    pub customer_name: String,
    /// Patient national id.
    #[serde(rename = "cliente_cedula")]
    pub customer_national_id: String,
    /// Patient date of birth.
    #[serde(rename = "cliente_fecha_nacimiento", default)]
    pub customer_birth_date: Option<NaiveDate>,
    /// Patient phone.
    #[serde(rename = "cliente_telefono", default)]
    pub customer_phone: Option<String>,
    /// Patient city.
    #[serde(rename = "cliente_ciudad", default)]
    pub customer_city: Option<String>,
    /// Medication name.
    #[serde(rename = "medicamento_nombre")]
    pub medication_name: String,
    /// Medication description.
    #[serde(rename = "medicamento_descripcion", default)]
    pub medication_description: Option<String>,
    /// Medication composition.
    #[serde(rename = "medicamento_composicion", default)]
    pub medication_composition: Option<String>,
    /// Medication indications.
    #[serde(rename = "medicamento_indicaciones", default)]
    pub medication_indications: Option<String>,
    /// Medication side effects.
    #[serde(rename = "medicamento_sintomas_secundarios", default)]
    pub medication_side_effects: Option<String>,
    /// Medication recommended age range.
    #[serde(rename = "medicamento_rango_edad", default)]
    pub medication_age_range: Option<String>,
    /// Insurer name.
    #[serde(rename = "eps_nombre", default)]
    pub insurer_name: Option<String>,
    /// Insurer tax id (NIT).
    #[serde(rename = "eps_nit", default)]
    pub insurer_tax_id: Option<String>,
    /// Prescribing admin name.
    #[serde(rename = "asignador_nombre", default)]
    pub assigner_name: Option<String>,
    /// Prescribing admin national id.
    #[serde(rename = "asignador_cedula", default)]
    pub assigner_national_id: Option<String>,
    /// Prescribing admin role.
    #[serde(rename = "asignador_rol", default)]
    pub assigner_role: Option<UserRole>,
}

impl PrescriptionRow {
    /// Patient age in whole years on the given date, when known.
    pub fn patient_age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = self.customer_birth_date?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_row() {
        let row = json!({
            "alerta_id": 31,
            "dosis": "400mg",
            "frecuencia": "cada 8 horas",
            "fecha_inicio": "2024-05-01",
            "fecha_fin": null,
            "hora_preferida": "08:00:00",
            "estado_alerta": "activa",
            "cliente_nombre": "Ana María Vélez",
            "cliente_cedula": "10945821",
            "cliente_fecha_nacimiento": "1990-03-08",
            "cliente_telefono": "3001234567",
            "cliente_ciudad": "Armenia",
            "medicamento_nombre": "Ibuprofeno",
            "medicamento_descripcion": "AINE",
            "medicamento_composicion": "Ibuprofeno 400mg",
            "medicamento_indicaciones": "Tomar con alimentos",
            "medicamento_sintomas_secundarios": "Dolor estomacal",
            "medicamento_rango_edad": "12+",
            "eps_nombre": "Sanitas",
            "eps_nit": "800251440-6",
            "asignador_nombre": "Admin",
            "asignador_cedula": "1",
            "asignador_rol": "admin"
        });
        let receta: PrescriptionRow = serde_json::from_value(row).unwrap();
        assert_eq!(receta.medication_name, "Ibuprofeno");
        assert_eq!(receta.assigner_role, Some(UserRole::Admin));
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(receta.patient_age_on(today), Some(34));
    }
}
