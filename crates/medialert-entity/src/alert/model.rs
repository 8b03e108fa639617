//! Alert entity model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::status::AlertStatus;
use crate::customer::CustomerStatus;
use crate::medication::MedicationStatus;

/// A scheduled medication reminder linking a customer to a medication.
///
/// List endpoints join in customer/medication/assigner names; the customer's
/// own-alerts projection omits the id columns, so those are optional here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: i64,
    /// The customer the reminder belongs to.
    #[serde(rename = "usuario_id", default)]
    pub customer_id: Option<i64>,
    /// Joined customer name.
    #[serde(rename = "cliente_nombre", default)]
    pub customer_name: Option<String>,
    /// Joined customer national id.
    #[serde(rename = "cliente_cedula", default)]
    pub customer_national_id: Option<String>,
    /// Joined customer account status.
    #[serde(rename = "estado_usuario", default)]
    pub customer_status: Option<CustomerStatus>,
    /// The medication being reminded about.
    #[serde(rename = "medicamento_id", default)]
    pub medication_id: Option<i64>,
    /// Joined medication name.
    #[serde(rename = "medicamento_nombre", default)]
    pub medication_name: Option<String>,
    /// Joined medication availability.
    #[serde(rename = "estado_medicamento", default)]
    pub medication_status: Option<MedicationStatus>,
    /// Dose instructions (e.g. `"400mg"`).
    #[serde(rename = "dosis", default)]
    pub dose: Option<String>,
    /// Frequency instructions (e.g. `"cada 8 horas"`).
    #[serde(rename = "frecuencia", default)]
    pub frequency: Option<String>,
    /// First day of treatment.
    #[serde(rename = "fecha_inicio", default)]
    pub start_date: Option<NaiveDate>,
    /// Last day of treatment (open-ended when absent).
    #[serde(rename = "fecha_fin", default)]
    pub end_date: Option<NaiveDate>,
    /// Preferred reminder time of day.
    #[serde(rename = "hora_preferida", default)]
    pub preferred_time: Option<NaiveTime>,
    /// Lifecycle status.
    #[serde(rename = "estado", alias = "estado_alerta")]
    pub status: AlertStatus,
    /// The admin who assigned the reminder.
    #[serde(rename = "asignado_por_usuario_id", default)]
    pub assigned_by: Option<i64>,
    /// Joined assigner name.
    #[serde(rename = "asignador_nombre", default)]
    pub assigner_name: Option<String>,
}

impl Alert {
    /// Check if the reminder's treatment window has already closed.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.end_date.map(|end| end < today).unwrap_or(false)
    }
}

/// Per-customer rollup used by the grouped alerts view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAlertSummary {
    /// Customer identifier.
    #[serde(rename = "usuario_id")]
    pub customer_id: i64,
    /// Customer name.
    #[serde(rename = "cliente_nombre")]
    pub customer_name: String,
    /// Customer national id.
    #[serde(rename = "cedula")]
    pub national_id: String,
    /// Customer account status.
    #[serde(rename = "estado_usuario")]
    pub customer_status: CustomerStatus,
    /// Number of currently active reminders.
    #[serde(rename = "alertas_activas_count")]
    pub active_alerts: i64,
    /// Total reminders ever assigned.
    #[serde(rename = "total_alertas_count")]
    pub total_alerts: i64,
}

/// Payload for assigning a new reminder.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateAlert {
    /// Target customer (must be an active `cliente`).
    #[serde(rename = "usuario_id")]
    #[validate(range(min = 1, message = "El cliente es requerido"))]
    pub customer_id: i64,
    /// Medication to remind about (must be `disponible`).
    #[serde(rename = "medicamento_id")]
    #[validate(range(min = 1, message = "El medicamento es requerido"))]
    pub medication_id: i64,
    /// Dose instructions.
    #[serde(rename = "dosis", skip_serializing_if = "Option::is_none")]
    pub dose: Option<String>,
    /// Frequency instructions.
    #[serde(rename = "frecuencia", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// First day of treatment.
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    /// Last day of treatment (open-ended when absent).
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Preferred reminder time.
    #[serde(rename = "hora_preferida", skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<NaiveTime>,
    /// Initial lifecycle status (backend defaults to `activa`).
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
}

/// Partial-update payload for an existing reminder.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAlert {
    /// Reassigned customer.
    #[serde(rename = "usuario_id", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    /// Reassigned medication.
    #[serde(rename = "medicamento_id", skip_serializing_if = "Option::is_none")]
    pub medication_id: Option<i64>,
    /// New dose instructions.
    #[serde(rename = "dosis", skip_serializing_if = "Option::is_none")]
    pub dose: Option<String>,
    /// New frequency instructions.
    #[serde(rename = "frecuencia", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// New start date.
    #[serde(rename = "fecha_inicio", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// New end date.
    #[serde(rename = "fecha_fin", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// New preferred time.
    #[serde(rename = "hora_preferida", skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<NaiveTime>,
    /// New lifecycle status.
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub status: Option<AlertStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_admin_row_with_status_alias() {
        let row = json!({
            "id": 31,
            "usuario_id": 12,
            "cliente_nombre": "Ana María Vélez",
            "cliente_cedula": "10945821",
            "estado_usuario": "activo",
            "medicamento_id": 4,
            "medicamento_nombre": "Ibuprofeno",
            "estado_medicamento": "disponible",
            "dosis": "400mg",
            "frecuencia": "cada 8 horas",
            "fecha_inicio": "2024-05-01",
            "fecha_fin": "2024-05-15",
            "hora_preferida": "08:00:00",
            "estado_alerta": "activa",
            "asignado_por_usuario_id": 1,
            "asignador_nombre": "Admin"
        });
        let alert: Alert = serde_json::from_value(row).unwrap();
        assert_eq!(alert.status, AlertStatus::Active);
        assert_eq!(alert.customer_id, Some(12));
        assert_eq!(
            alert.preferred_time,
            NaiveTime::from_hms_opt(8, 0, 0)
        );
    }

    #[test]
    fn test_deserialize_own_alerts_projection() {
        // The customer dashboard endpoint returns no id columns.
        let row = json!({
            "id": 31,
            "medicamento_nombre": "Ibuprofeno",
            "dosis": "400mg",
            "frecuencia": "cada 8 horas",
            "fecha_inicio": "2024-05-01",
            "fecha_fin": null,
            "hora_preferida": null,
            "estado": "completada"
        });
        let alert: Alert = serde_json::from_value(row).unwrap();
        assert_eq!(alert.status, AlertStatus::Completed);
        assert!(alert.customer_id.is_none());
        assert!(alert.end_date.is_none());
    }

    #[test]
    fn test_is_expired() {
        let row = json!({
            "id": 1,
            "fecha_fin": "2024-01-31",
            "estado": "inactiva"
        });
        let alert: Alert = serde_json::from_value(row).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert!(!alert.is_expired(before));
        assert!(alert.is_expired(after));
    }
}
