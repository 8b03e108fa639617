//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An immutable audit log entry recording an administrative action.
///
/// The before/after snapshots are kept as raw [`Value`]s on purpose: the
/// backend stores them as free-form JSON and older rows carry them as
/// JSON-encoded *strings*. Normalization happens in the audit summary
/// layer, which tolerates every historical shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: i64,
    /// When the action occurred.
    #[serde(rename = "fecha_hora")]
    pub occurred_at: DateTime<Utc>,
    /// Display name of the acting application user (absent for system events).
    #[serde(rename = "nombre_usuario_app", default)]
    pub user_name: Option<String>,
    /// National id of the acting application user.
    #[serde(rename = "cedula_usuario_app", default)]
    pub user_national_id: Option<String>,
    /// Database role the action ran under.
    #[serde(rename = "usuario_postgres", default)]
    pub db_user: Option<String>,
    /// Action code (e.g. `"CREACION_CLIENTE"`, `"EDICION_ALERTA"`).
    #[serde(rename = "accion")]
    pub action: String,
    /// Affected backend table.
    #[serde(rename = "tabla_afectada", default)]
    pub table: Option<String>,
    /// Affected record id (stringly typed on the wire).
    #[serde(rename = "registro_id_afectado", default)]
    pub record_id: Option<String>,
    /// Snapshot of the record before the action.
    #[serde(rename = "datos_anteriores", default)]
    pub old_data: Value,
    /// Snapshot of the record after the action.
    #[serde(rename = "datos_nuevos", default)]
    pub new_data: Value,
    /// Free-form extra details.
    #[serde(rename = "detalles_adicionales", default)]
    pub details: Value,
}

impl AuditLogEntry {
    /// Action code with underscores replaced for display.
    pub fn action_display(&self) -> String {
        self.action.replace('_', " ")
    }

    /// Acting user display name, `"Sistema"` for system events.
    pub fn actor_display(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Sistema")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_string_snapshot() {
        // Older rows store snapshots as JSON-encoded strings; they must
        // survive deserialization untouched.
        let row = json!({
            "id": 99,
            "fecha_hora": "2024-05-14T10:30:00Z",
            "nombre_usuario_app": "Admin",
            "accion": "EDICION_CLIENTE",
            "tabla_afectada": "usuarios",
            "registro_id_afectado": "12",
            "datos_anteriores": "{\"nombre\":\"Ana\"}",
            "datos_nuevos": { "nombre": "Ana María" },
            "detalles_adicionales": null
        });
        let entry: AuditLogEntry = serde_json::from_value(row).unwrap();
        assert!(entry.old_data.is_string());
        assert!(entry.new_data.is_object());
        assert!(entry.details.is_null());
        assert_eq!(entry.action_display(), "EDICION CLIENTE");
    }

    #[test]
    fn test_system_actor_fallback() {
        let row = json!({
            "id": 1,
            "fecha_hora": "2024-01-01T00:00:00Z",
            "accion": "MANTENIMIENTO"
        });
        let entry: AuditLogEntry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.actor_display(), "Sistema");
    }
}
