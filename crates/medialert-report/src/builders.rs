//! Per-report assembly: collection in, printable `ReportSpec` out.
//!
//! Each report has a pure builder over already-fetched rows (unit-testable)
//! and an async wrapper that fetches through the API client. Builders fail
//! with `NotFound` when there is nothing to print, which the dashboard
//! surfaces as a message instead of uploading an empty document.

use medialert_client::{ApiClient, AuditQuery, CustomerQuery, MedicationFilter};
use medialert_core::error::AppError;
use medialert_core::result::AppResult;
use medialert_core::types::format::{format_date, format_time, format_timestamp, NOT_AVAILABLE};
use medialert_entity::{Alert, AuditLogEntry, Customer, Medication, PrescriptionRow};
use serde_json::Value;

use medialert_audit::friendly_table_name;

use crate::document::{ColumnSpec, Orientation, PaperSize, ReportSpec};

/// Entries pulled for the audit report.
const AUDIT_REPORT_LIMIT: u32 = 100;
/// Cell truncation inside the summarized-details column.
const DETAIL_VALUE_LEN: usize = 30;

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

// ---------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------

/// Build the system-users report from already-fetched customers + admins.
pub fn build_users_report(users: &[Customer]) -> AppResult<ReportSpec> {
    if users.is_empty() {
        return Err(AppError::not_found(
            "No hay datos de usuarios para generar el reporte.",
        ));
    }
    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.name.clone(),
                u.national_id.clone(),
                u.email.clone(),
                capitalize(u.role.as_str()),
                capitalize(u.status.as_str()),
            ]
        })
        .collect();
    Ok(ReportSpec {
        title: "Reporte de Usuarios del Sistema".into(),
        filename_stem: "Reporte_Usuarios".into(),
        log_kind: Some("usuarios".into()),
        orientation: Orientation::Portrait,
        paper: PaperSize::A4,
        columns: vec![
            ColumnSpec::new("Nombre", 11),
            ColumnSpec::new("Cédula", 7),
            ColumnSpec::new("Email", 13),
            ColumnSpec::new("Rol", 6),
            ColumnSpec::new("Estado", 6),
        ],
        rows,
    })
}

/// Fetch customers and admins, then build the users report.
pub async fn users_report(client: &ApiClient) -> AppResult<ReportSpec> {
    let mut users = client.list_customers(&CustomerQuery::all_customers()).await?;
    users.extend(client.list_customers(&CustomerQuery::all_admins()).await?);
    build_users_report(&users)
}

// ---------------------------------------------------------------------
// Medications
// ---------------------------------------------------------------------

/// Build the catalog report from already-fetched medications.
pub fn build_medications_report(medications: &[Medication]) -> AppResult<ReportSpec> {
    if medications.is_empty() {
        return Err(AppError::not_found(
            "No hay datos de medicamentos para generar el reporte.",
        ));
    }
    let rows = medications
        .iter()
        .map(|m| {
            vec![
                m.name.clone(),
                or_na(m.description.as_deref()),
                or_na(m.composition.as_deref()),
                or_na(m.indications.as_deref()),
                or_na(m.age_range.as_deref()),
                capitalize(m.status.as_str()),
            ]
        })
        .collect();
    Ok(ReportSpec {
        title: "Reporte de Catálogo de Medicamentos".into(),
        filename_stem: "Reporte_Medicamentos".into(),
        log_kind: Some("medicamentos".into()),
        orientation: Orientation::Landscape,
        paper: PaperSize::A4,
        columns: vec![
            ColumnSpec::new("Nombre", 12),
            ColumnSpec::new("Descripción", 18),
            ColumnSpec::new("Composición", 18),
            ColumnSpec::new("Indicaciones", 18),
            ColumnSpec::new("Rango Edad", 7),
            ColumnSpec::new("Estado", 7),
        ],
        rows,
    })
}

/// Fetch the whole catalog, then build the medications report.
pub async fn medications_report(client: &ApiClient) -> AppResult<ReportSpec> {
    let medications = client.list_medications(MedicationFilter::All).await?;
    build_medications_report(&medications)
}

// ---------------------------------------------------------------------
// Active alerts
// ---------------------------------------------------------------------

/// Build the active-alerts report; inactive reminders are skipped here.
pub fn build_active_alerts_report(alerts: &[Alert]) -> AppResult<ReportSpec> {
    let active: Vec<&Alert> = alerts.iter().filter(|a| a.status.is_active()).collect();
    if active.is_empty() {
        return Err(AppError::not_found(
            "No hay alertas activas para generar el reporte.",
        ));
    }
    let rows = active
        .iter()
        .map(|a| {
            vec![
                or_na(a.customer_name.as_deref()),
                or_na(a.medication_name.as_deref()),
                or_na(a.dose.as_deref()),
                or_na(a.frequency.as_deref()),
                format_date(a.start_date),
                a.end_date
                    .map(|d| format_date(Some(d)))
                    .unwrap_or_else(|| "Indefinido".to_string()),
                format_time(a.preferred_time),
            ]
        })
        .collect();
    Ok(ReportSpec {
        title: "Reporte de Alertas Activas".into(),
        filename_stem: "Reporte_Alertas_Activas".into(),
        log_kind: Some("alertas_activas".into()),
        orientation: Orientation::Landscape,
        paper: PaperSize::A4,
        columns: vec![
            ColumnSpec::new("Cliente", 12),
            ColumnSpec::new("Medicamento", 12),
            ColumnSpec::new("Dosis", 6),
            ColumnSpec::new("Frecuencia", 8),
            ColumnSpec::new("Inicio", 7),
            ColumnSpec::new("Fin", 7),
            ColumnSpec::new("Hora Pref.", 6),
        ],
        rows,
    })
}

/// Fetch every reminder, then build the active-alerts report.
pub async fn active_alerts_report(client: &ApiClient) -> AppResult<ReportSpec> {
    let alerts = client.list_alerts(None).await?;
    build_active_alerts_report(&alerts)
}

// ---------------------------------------------------------------------
// Audit trail
// ---------------------------------------------------------------------

/// Compact one audit entry's payload for the summarized-details column.
fn summarize_details(entry: &AuditLogEntry) -> String {
    fn join_fields(map: &serde_json::Map<String, Value>, exclude_secrets: bool) -> String {
        map.iter()
            .filter(|(k, _)| {
                !exclude_secrets || !matches!(k.as_str(), "contrasena" | "hashed_password")
            })
            .map(|(k, v)| {
                let text = match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("{k}: {}", text.chars().take(DETAIL_VALUE_LEN).collect::<String>())
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    match (&entry.new_data, &entry.details) {
        (Value::Object(map), _) if !map.is_empty() => join_fields(map, true),
        (_, Value::Object(map)) if !map.is_empty() => join_fields(map, false),
        (_, Value::String(s)) => s.chars().take(100).collect(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Build the audit report from already-fetched entries (newest first).
pub fn build_audit_report(entries: &[AuditLogEntry]) -> AppResult<ReportSpec> {
    if entries.is_empty() {
        return Err(AppError::not_found(
            "No hay datos de auditoría para generar el reporte.",
        ));
    }
    let rows = entries
        .iter()
        .take(AUDIT_REPORT_LIMIT as usize)
        .map(|e| {
            vec![
                format_timestamp(e.occurred_at),
                e.actor_display().to_string(),
                e.action_display(),
                friendly_table_name(e.table.as_deref()),
                or_na(e.record_id.as_deref()),
                summarize_details(e),
            ]
        })
        .collect();
    Ok(ReportSpec {
        title: format!("Reporte de Auditoría del Sistema (Últimos {AUDIT_REPORT_LIMIT})"),
        filename_stem: "Reporte_Auditoria".into(),
        log_kind: Some("auditoria".into()),
        orientation: Orientation::Landscape,
        paper: PaperSize::A3,
        columns: vec![
            ColumnSpec::new("Fecha y Hora", 11),
            ColumnSpec::new("Usuario", 8),
            ColumnSpec::new("Acción", 12),
            ColumnSpec::new("Módulo", 8),
            ColumnSpec::new("ID Afectado", 6),
            ColumnSpec::new("Detalles Resumidos", 30),
        ],
        rows,
    })
}

/// Fetch the newest audit entries, then build the audit report.
pub async fn audit_report(client: &ApiClient) -> AppResult<ReportSpec> {
    let entries = client
        .list_audit(&AuditQuery {
            table: None,
            user_id: None,
            limit: Some(AUDIT_REPORT_LIMIT),
        })
        .await?;
    build_audit_report(&entries)
}

// ---------------------------------------------------------------------
// Consolidated prescription
// ---------------------------------------------------------------------

/// Build a consolidated prescription from already-fetched rows.
pub fn build_prescription_report(rows: &[PrescriptionRow]) -> AppResult<ReportSpec> {
    if rows.is_empty() {
        return Err(AppError::not_found(
            "No hay alertas activas para generar una receta consolidada.",
        ));
    }
    let today = chrono::Utc::now().date_naive();
    let table_rows = rows
        .iter()
        .map(|r| {
            let birth = match (r.customer_birth_date, r.patient_age_on(today)) {
                (Some(date), Some(age)) => {
                    format!("{} (Edad: {age})", format_date(Some(date)))
                }
                _ => NOT_AVAILABLE.to_string(),
            };
            vec![
                r.customer_name.clone(),
                r.customer_national_id.clone(),
                birth,
                r.medication_name.clone(),
                or_na(r.dose.as_deref()),
                or_na(r.frequency.as_deref()),
                format_date(r.start_date),
                r.end_date
                    .map(|d| format_date(Some(d)))
                    .unwrap_or_else(|| "Indefinido".to_string()),
                or_na(r.insurer_name.as_deref()),
            ]
        })
        .collect();
    Ok(ReportSpec {
        title: "Receta Médica Consolidada".into(),
        filename_stem: "Receta_Medica_Consolidada".into(),
        log_kind: Some("recetas_consolidadas".into()),
        orientation: Orientation::Landscape,
        paper: PaperSize::A4,
        columns: vec![
            ColumnSpec::new("Cliente", 11),
            ColumnSpec::new("Cédula", 6),
            ColumnSpec::new("Nacimiento", 10),
            ColumnSpec::new("Medicamento", 11),
            ColumnSpec::new("Dosis", 6),
            ColumnSpec::new("Frecuencia", 8),
            ColumnSpec::new("Inicio", 7),
            ColumnSpec::new("Fin", 7),
            ColumnSpec::new("EPS", 7),
        ],
        rows: table_rows,
    })
}

/// Fetch prescription rows (for one customer or everyone) and build the report.
pub async fn prescription_report(
    client: &ApiClient,
    customer_id: Option<i64>,
) -> AppResult<ReportSpec> {
    let rows = match customer_id {
        Some(id) => client.customer_prescriptions(id).await?,
        None => client.all_prescriptions().await?,
    };
    build_prescription_report(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_collections_refuse_to_build() {
        assert!(build_users_report(&[]).is_err());
        assert!(build_medications_report(&[]).is_err());
        assert!(build_audit_report(&[]).is_err());
        assert!(build_prescription_report(&[]).is_err());
    }

    #[test]
    fn test_users_report_capitalizes_role_and_status() {
        let users: Vec<Customer> = vec![serde_json::from_value(json!({
            "id": 1, "nombre": "Ana", "cedula": "123", "email": "a@b.co",
            "rol": "cliente", "estado_usuario": "activo"
        }))
        .unwrap()];
        let spec = build_users_report(&users).unwrap();
        assert_eq!(spec.rows[0][3], "Cliente");
        assert_eq!(spec.rows[0][4], "Activo");
        assert_eq!(spec.log_kind.as_deref(), Some("usuarios"));
    }

    #[test]
    fn test_active_alerts_report_filters_inactive() {
        let alerts: Vec<Alert> = serde_json::from_value(json!([
            { "id": 1, "cliente_nombre": "Ana", "medicamento_nombre": "Ibuprofeno",
              "fecha_inicio": "2024-05-01", "estado": "activa" },
            { "id": 2, "cliente_nombre": "Pedro", "medicamento_nombre": "Loratadina",
              "estado": "completada" }
        ]))
        .unwrap();
        let spec = build_active_alerts_report(&alerts).unwrap();
        assert_eq!(spec.rows.len(), 1);
        assert_eq!(spec.rows[0][0], "Ana");
        // Open-ended treatments print as Indefinido.
        assert_eq!(spec.rows[0][5], "Indefinido");
    }

    #[test]
    fn test_all_alerts_inactive_refuses_to_build() {
        let alerts: Vec<Alert> = serde_json::from_value(json!([
            { "id": 2, "estado": "fallida" }
        ]))
        .unwrap();
        assert!(build_active_alerts_report(&alerts).is_err());
    }

    #[test]
    fn test_audit_report_summarizes_and_hides_secrets() {
        let entries: Vec<AuditLogEntry> = serde_json::from_value(json!([{
            "id": 1,
            "fecha_hora": "2024-05-14T10:30:00Z",
            "nombre_usuario_app": "Admin",
            "accion": "EDICION_CLIENTE",
            "tabla_afectada": "usuarios",
            "registro_id_afectado": "12",
            "datos_nuevos": { "nombre": "Ana", "contrasena": "secreta" }
        }]))
        .unwrap();
        let spec = build_audit_report(&entries).unwrap();
        let details = &spec.rows[0][5];
        assert!(details.contains("nombre: Ana"));
        assert!(!details.contains("contrasena"));
        assert_eq!(spec.rows[0][3], "Usuarios/Clientes");
    }

    #[test]
    fn test_prescription_rows_carry_age() {
        let rows: Vec<PrescriptionRow> = serde_json::from_value(json!([{
            "alerta_id": 1,
            "estado_alerta": "activa",
            "cliente_nombre": "Ana",
            "cliente_cedula": "123",
            "cliente_fecha_nacimiento": "1990-03-08",
            "medicamento_nombre": "Ibuprofeno",
            "eps_nombre": "Sanitas"
        }]))
        .unwrap();
        let spec = build_prescription_report(&rows).unwrap();
        assert!(spec.rows[0][2].contains("08/03/1990"));
        assert!(spec.rows[0][2].contains("Edad:"));
        assert_eq!(spec.rows[0][8], "Sanitas");
    }
}
