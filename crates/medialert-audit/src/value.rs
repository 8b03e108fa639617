//! Per-type formatting of individual snapshot values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use medialert_core::types::format::{format_date, NOT_AVAILABLE};

/// Maximum entries for the compact `k: v; …` object rendering.
const COMPACT_OBJECT_MAX_FIELDS: usize = 3;
/// Value truncation length inside compact object rendering.
const COMPACT_VALUE_LEN: usize = 20;

/// Format one snapshot value for display.
///
/// Booleans render as `Sí`/`No`; strings that look like dates or
/// timestamps are reformatted; small flat objects compact to one line and
/// anything deeper pretty-prints.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Bool(true) => "Sí".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::String(s) => format_string(s),
        Value::Number(n) => n.to_string(),
        Value::Object(map) if map.is_empty() => NOT_AVAILABLE.to_string(),
        Value::Object(map)
            if map.len() <= COMPACT_OBJECT_MAX_FIELDS
                && map.values().all(|v| !v.is_object() && !v.is_array()) =>
        {
            map.iter()
                .map(|(k, v)| format!("{k}: {}", truncate(&plain(v), COMPACT_VALUE_LEN)))
                .collect::<Vec<_>>()
                .join("; ")
        }
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

fn format_string(s: &str) -> String {
    if let Some(ts) = parse_timestamp(s) {
        return ts.format("%d/%m/%Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return format_date(Some(date));
    }
    s.to_string()
}

/// Parse an ISO-8601 timestamp, with or without offset/fraction.
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(s) {
        return Some(with_offset.naive_utc());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Render a scalar without quotes, unlike `Value::to_string`.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

/// Format the free-form extra-details blob of an audit entry.
///
/// Shown in its own column; unlike snapshots it is rendered field-per-line
/// without diffing. Encoded-string payloads are decoded first.
pub fn format_details(value: &Value) -> String {
    let value = match value {
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(decoded) => decoded,
            Err(_) => return encoded.clone(),
        },
        other => other.clone(),
    };
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Object(map) if map.is_empty() => NOT_AVAILABLE.to_string(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{k}: {}", format_value(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        other => plain(&other),
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        s.chars().take(max_chars).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_and_bools() {
        assert_eq!(format_value(&Value::Null), "N/A");
        assert_eq!(format_value(&json!(true)), "Sí");
        assert_eq!(format_value(&json!(false)), "No");
    }

    #[test]
    fn test_date_only_string() {
        assert_eq!(format_value(&json!("2024-05-14")), "14/05/2024");
    }

    #[test]
    fn test_timestamp_strings() {
        assert_eq!(
            format_value(&json!("2024-05-14T10:30:00Z")),
            "14/05/2024 10:30"
        );
        assert_eq!(
            format_value(&json!("2024-05-14T10:30:00")),
            "14/05/2024 10:30"
        );
        assert_eq!(
            format_value(&json!("2024-05-14T10:30:00.123456")),
            "14/05/2024 10:30"
        );
    }

    #[test]
    fn test_plain_strings_pass_through() {
        assert_eq!(format_value(&json!("cada 8 horas")), "cada 8 horas");
        // Not a complete date: left alone.
        assert_eq!(format_value(&json!("2024-05")), "2024-05");
    }

    #[test]
    fn test_small_flat_object_compacts() {
        let v = json!({ "usuario_inactivado_id": 123, "motivo": "duplicado" });
        let rendered = format_value(&v);
        assert!(rendered.contains("usuario_inactivado_id: 123"));
        assert!(rendered.contains("; "));
    }

    #[test]
    fn test_nested_object_pretty_prints() {
        let v = json!({ "a": { "b": 1 }, "c": 2 });
        let rendered = format_value(&v);
        assert!(rendered.contains('\n'));
    }

    #[test]
    fn test_empty_object_is_not_available() {
        assert_eq!(format_value(&json!({})), "N/A");
    }

    #[test]
    fn test_format_details() {
        assert_eq!(format_details(&Value::Null), "N/A");
        let details = json!({ "creado_por_admin_id": 1, "motivo": "alta" });
        let rendered = format_details(&details);
        assert!(rendered.contains("creado_por_admin_id: 1"));
        assert!(rendered.contains("motivo: alta"));
        // Encoded strings are decoded first.
        assert_eq!(
            format_details(&json!("{\"usuario_cedula\":\"123\"}")),
            "usuario_cedula: 123"
        );
    }

    #[test]
    fn test_compact_truncates_long_values() {
        let v = json!({ "nota": "una descripción larguísima que no cabe" });
        let rendered = format_value(&v);
        assert_eq!(rendered, format!("nota: {}", "una descripción larg"));
    }
}
