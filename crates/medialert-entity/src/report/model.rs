//! Report log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record of a generated report stored on the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLogEntry {
    /// Unique log identifier.
    pub id: i64,
    /// Machine-readable report type (e.g. `"usuarios"`, `"alertas_activas"`).
    #[serde(rename = "tipo_reporte")]
    pub kind: String,
    /// Human-readable report title.
    #[serde(rename = "nombre_reporte")]
    pub name: String,
    /// Stored file name assigned by the backend on upload.
    #[serde(rename = "pdf_filename", default)]
    pub stored_filename: Option<String>,
    /// When the report was generated.
    #[serde(rename = "fecha_generacion")]
    pub generated_at: DateTime<Utc>,
    /// Display name of the generating user.
    #[serde(rename = "generado_por_nombre", default)]
    pub generated_by: Option<String>,
}

impl ReportLogEntry {
    /// Report type with underscores replaced and words capitalized.
    pub fn kind_display(&self) -> String {
        self.kind
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Payload appending an entry to the report log after an upload.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReportLog {
    /// Machine-readable report type.
    #[serde(rename = "tipo_reporte")]
    pub kind: String,
    /// Human-readable report title.
    #[serde(rename = "nombre_reporte")]
    pub name: String,
    /// Stored file name returned by the upload endpoint.
    #[serde(rename = "pdf_filename")]
    pub stored_filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_display() {
        let row = json!({
            "id": 1,
            "tipo_reporte": "alertas_activas",
            "nombre_reporte": "Reporte de Alertas Activas",
            "pdf_filename": "9b2f.pdf",
            "fecha_generacion": "2024-05-14T10:30:00Z",
            "generado_por_nombre": "Admin"
        });
        let entry: ReportLogEntry = serde_json::from_value(row).unwrap();
        assert_eq!(entry.kind_display(), "Alertas Activas");
    }
}
