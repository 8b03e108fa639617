//! Prescription data endpoints.
//!
//! The backend answers these with a plain array when there is data and with
//! a `{"message": ...}` object (still HTTP 200) when there is none, so the
//! decoding is two-phased.

use medialert_core::result::AppResult;
use medialert_entity::PrescriptionRow;
use serde_json::Value;
use tracing::debug;

use crate::http::ApiClient;

fn rows_or_empty(value: Value) -> AppResult<Vec<PrescriptionRow>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(map) if map.contains_key("message") => {
            debug!("Backend reported no active alerts for prescription");
            Ok(Vec::new())
        }
        other => Err(medialert_core::AppError::external_service(format!(
            "Unexpected prescription payload shape: {other}"
        ))),
    }
}

impl ApiClient {
    /// The signed-in customer's consolidated prescription rows.
    pub async fn my_prescriptions(&self) -> AppResult<Vec<PrescriptionRow>> {
        let value: Value = self
            .get_json("/api/cliente/recetas_consolidadas", &[])
            .await?;
        rows_or_empty(value)
    }

    /// Consolidated prescription rows for one customer (admin view).
    pub async fn customer_prescriptions(&self, customer_id: i64) -> AppResult<Vec<PrescriptionRow>> {
        let value: Value = self
            .get_json(
                "/api/cliente/recetas_consolidadas",
                &[("user_id", customer_id.to_string())],
            )
            .await?;
        rows_or_empty(value)
    }

    /// Consolidated prescription rows for every active customer (admin view).
    pub async fn all_prescriptions(&self) -> AppResult<Vec<PrescriptionRow>> {
        let value: Value = self
            .get_json("/api/admin/recetas_consolidadas", &[])
            .await?;
        rows_or_empty(value)
    }

    /// Prescription data for a single reminder.
    pub async fn prescription_for_alert(&self, alert_id: i64) -> AppResult<PrescriptionRow> {
        self.get_json(&format!("/api/receta_medica/{alert_id}"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_object_means_empty() {
        let value = json!({ "message": "No hay alertas activas." });
        assert!(rows_or_empty(value).unwrap().is_empty());
    }

    #[test]
    fn test_array_decodes_rows() {
        let value = json!([{
            "alerta_id": 1,
            "estado_alerta": "activa",
            "cliente_nombre": "Ana",
            "cliente_cedula": "123",
            "medicamento_nombre": "Ibuprofeno"
        }]);
        let rows = rows_or_empty(value).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].medication_name, "Ibuprofeno");
    }

    #[test]
    fn test_unexpected_shape_is_an_error() {
        assert!(rows_or_empty(json!(42)).is_err());
    }
}
