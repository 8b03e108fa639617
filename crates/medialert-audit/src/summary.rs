//! Change-summary generation from before/after snapshots.

use std::collections::BTreeSet;
use std::fmt;

use serde_json::Value;

use crate::snapshot::Snapshot;
use crate::value::format_value;

/// Keys that never appear in a summary, regardless of action.
///
/// Password-like fields and audit bookkeeping timestamps. Matched
/// case-insensitively against snapshot keys.
pub const EXCLUDED_KEYS: &[&str] = &[
    "contrasena",
    "hashed_password",
    "contrasena_nueva",
    "updated_at",
    "created_at",
    "last_login",
    "usuario_id_app",
    "usuario_db",
];

fn is_excluded(key: &str) -> bool {
    let lower = key.to_lowercase();
    EXCLUDED_KEYS.contains(&lower.as_str())
}

/// Classification of an audit action code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// A record was created.
    Create,
    /// A record was deleted.
    Delete,
    /// A record was modified (or the action is unrecognized but carries data).
    Update,
    /// No data-bearing classification applies.
    Other,
}

impl ActionKind {
    /// Classify an action code by case-insensitive substring match.
    pub fn classify(action: &str, old: &Snapshot, new: &Snapshot) -> Self {
        let upper = action.to_uppercase();
        if ["CREACI", "INSERT", "NUEVO"].iter().any(|p| upper.contains(p)) {
            Self::Create
        } else if ["ELIMINA", "DELETE", "BORRADO"]
            .iter()
            .any(|p| upper.contains(p))
        {
            Self::Delete
        } else if !old.is_empty() || !new.is_empty() {
            Self::Update
        } else {
            Self::Other
        }
    }
}

/// One reported field change.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLine {
    /// The snapshot field name.
    pub field: String,
    /// Old formatted value (absent for creations).
    pub old: Option<String>,
    /// New formatted value (absent for deletions).
    pub new: Option<String>,
}

impl fmt::Display for ChangeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.old, &self.new) {
            (Some(old), Some(new)) => write!(f, "{}: {} → {}", self.field, old, new),
            (None, Some(new)) => write!(f, "{}: {}", self.field, new),
            (Some(old), None) => write!(f, "{}: {}", self.field, old),
            (None, None) => write!(f, "{}", self.field),
        }
    }
}

/// A rendered change summary for one audit entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeSummary {
    /// A record was created with the listed fields.
    Created(Vec<ChangeLine>),
    /// A record was deleted; the lines carry its last values.
    Deleted(Vec<ChangeLine>),
    /// Field-level differences between the snapshots.
    Updated(Vec<ChangeLine>),
    /// No field changes to report; carries the fallback line.
    Event(String),
}

impl ChangeSummary {
    /// Whether any field-level change was reported.
    pub fn has_changes(&self) -> bool {
        match self {
            Self::Created(lines) | Self::Deleted(lines) | Self::Updated(lines) => {
                !lines.is_empty()
            }
            Self::Event(_) => false,
        }
    }

    /// The reported lines, empty for events.
    pub fn lines(&self) -> &[ChangeLine] {
        match self {
            Self::Created(lines) | Self::Deleted(lines) | Self::Updated(lines) => lines,
            Self::Event(_) => &[],
        }
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (heading, lines) = match self {
            Self::Created(lines) => ("Registro Creado:", lines),
            Self::Deleted(lines) => ("Registro Eliminado. Datos Anteriores:", lines),
            Self::Updated(lines) => ("Cambios Detectados:", lines),
            Self::Event(line) => return writeln!(f, "{line}"),
        };
        writeln!(f, "{heading}")?;
        for line in lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}

/// Generate the change summary for one audit entry.
///
/// `old` and `new` are the raw snapshot values as served (object, encoded
/// string, or null); normalization is handled here and never fails.
pub fn generate_change_summary(action: &str, old: &Value, new: &Value) -> ChangeSummary {
    let old = Snapshot::parse(old);
    let new = Snapshot::parse(new);

    let summary = match ActionKind::classify(action, &old, &new) {
        ActionKind::Create => ChangeSummary::Created(list_fields(&new)),
        ActionKind::Delete => ChangeSummary::Deleted(list_fields(&old)),
        ActionKind::Update => ChangeSummary::Updated(diff_fields(&old, &new)),
        ActionKind::Other => ChangeSummary::Event(fallback_line(action)),
    };

    if summary.has_changes() {
        summary
    } else {
        ChangeSummary::Event(fallback_line(action))
    }
}

fn list_fields(snapshot: &Snapshot) -> Vec<ChangeLine> {
    snapshot
        .iter()
        .filter(|(key, _)| !is_excluded(key))
        .map(|(key, value)| ChangeLine {
            field: key.clone(),
            old: None,
            new: Some(format_value(value)),
        })
        .collect()
}

fn diff_fields(old: &Snapshot, new: &Snapshot) -> Vec<ChangeLine> {
    // Union of both key sets; a key on only one side counts as a change.
    let keys: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    keys.into_iter()
        .filter(|key| !is_excluded(key))
        .filter_map(|key| {
            let before = old.get(key);
            let after = new.get(key);
            if before == after {
                return None;
            }
            Some(ChangeLine {
                field: key.clone(),
                old: Some(format_value(before.unwrap_or(&Value::Null))),
                new: Some(format_value(after.unwrap_or(&Value::Null))),
            })
        })
        .collect()
}

fn fallback_line(action: &str) -> String {
    let upper = action.to_uppercase();
    let readable = action.to_lowercase().replace('_', " ");
    if upper.contains("SESION") || upper.contains("LOGIN") {
        format!("Evento de {readable}.")
    } else if upper.contains("PREVENIDO") {
        format!("Intento de acción prevenido: {readable}.")
    } else {
        "No se detectaron cambios de datos detallados o es un evento general.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_by_substring() {
        let empty = Snapshot::empty();
        let data = Snapshot::parse(&json!({ "a": 1 }));
        assert_eq!(
            ActionKind::classify("CREACION_CLIENTE", &empty, &data),
            ActionKind::Create
        );
        assert_eq!(
            ActionKind::classify("ELIMINACION_ALERTA", &data, &empty),
            ActionKind::Delete
        );
        assert_eq!(
            ActionKind::classify("EDICION_MEDICAMENTO", &data, &data),
            ActionKind::Update
        );
        assert_eq!(
            ActionKind::classify("INICIO_SESION_EXITOSO", &empty, &empty),
            ActionKind::Other
        );
    }

    #[test]
    fn test_update_reports_only_differing_keys() {
        let old = json!({ "nombre": "Ana", "estado_usuario": "activo" });
        let new = json!({ "nombre": "Ana", "estado_usuario": "inactivo" });
        let summary = generate_change_summary("ACTUALIZACION_CLIENTE", &old, &new);
        let lines = summary.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].field, "estado_usuario");
        assert_eq!(lines[0].old.as_deref(), Some("activo"));
        assert_eq!(lines[0].new.as_deref(), Some("inactivo"));
    }

    #[test]
    fn test_equal_snapshots_report_no_changes() {
        let data = json!({ "nombre": "Ana", "ciudad": "Armenia" });
        let summary = generate_change_summary("EDICION_CLIENTE", &data, &data);
        assert!(!summary.has_changes());
        assert!(matches!(summary, ChangeSummary::Event(_)));
    }

    #[test]
    fn test_key_only_on_one_side_counts() {
        let old = json!({ "nombre": "Ana" });
        let new = json!({ "nombre": "Ana", "telefono": "3001234567" });
        let summary = generate_change_summary("EDICION_CLIENTE", &old, &new);
        let lines = summary.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].field, "telefono");
        assert_eq!(lines[0].old.as_deref(), Some("N/A"));
    }

    #[test]
    fn test_excluded_keys_never_appear() {
        let old = json!({ "contrasena": "****", "updated_at": "2024-01-01T00:00:00Z" });
        let new = json!({ "contrasena": "????", "updated_at": "2024-02-01T00:00:00Z" });
        let summary = generate_change_summary("EDICION_CLIENTE", &old, &new);
        assert!(!summary.has_changes());

        let create = generate_change_summary("CREACION_CLIENTE", &Value::Null, &new);
        assert!(!create.has_changes());
    }

    #[test]
    fn test_create_lists_new_fields() {
        let new = json!({ "nombre": "Ibuprofeno" });
        let summary = generate_change_summary("CREACION_MEDICAMENTO", &Value::Null, &new);
        match &summary {
            ChangeSummary::Created(lines) => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].field, "nombre");
                assert_eq!(lines[0].new.as_deref(), Some("Ibuprofeno"));
            }
            other => panic!("expected Created, got {other:?}"),
        }
        assert!(summary.to_string().starts_with("Registro Creado:"));
    }

    #[test]
    fn test_session_fallback_line() {
        let summary =
            generate_change_summary("INICIO_SESION_EXITOSO", &Value::Null, &Value::Null);
        assert_eq!(
            summary,
            ChangeSummary::Event("Evento de inicio sesion exitoso.".to_string())
        );
    }

    #[test]
    fn test_prevented_fallback_line() {
        let summary = generate_change_summary("BORRADO_PREVENIDO", &Value::Null, &Value::Null);
        // DELETE classification with an empty old snapshot falls back.
        assert_eq!(
            summary,
            ChangeSummary::Event("Intento de acción prevenido: borrado prevenido.".to_string())
        );
    }

    #[test]
    fn test_malformed_string_snapshots_degrade() {
        let old = json!("{broken");
        let new = json!("also broken}");
        let summary = generate_change_summary("EDICION_CLIENTE", &old, &new);
        assert!(!summary.has_changes());
    }

    #[test]
    fn test_structural_value_comparison() {
        let old = json!({ "detalle": { "a": 1, "b": 2 } });
        let new = json!({ "detalle": { "b": 2, "a": 1 } });
        // Same structure, different key order: not a change.
        let summary = generate_change_summary("EDICION_CLIENTE", &old, &new);
        assert!(!summary.has_changes());
    }
}
