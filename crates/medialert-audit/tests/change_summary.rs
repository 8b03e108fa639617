//! End-to-end scenarios for the audit change-summary renderer, driven
//! through `AuditLogEntry` rows exactly as the backend serves them.

use medialert_audit::{summarize_entry, ChangeSummary};
use medialert_entity::AuditLogEntry;
use serde_json::json;

fn entry(action: &str, old: serde_json::Value, new: serde_json::Value) -> AuditLogEntry {
    serde_json::from_value(json!({
        "id": 1,
        "fecha_hora": "2024-05-14T10:30:00Z",
        "nombre_usuario_app": "Admin",
        "accion": action,
        "tabla_afectada": "usuarios",
        "registro_id_afectado": "12",
        "datos_anteriores": old,
        "datos_nuevos": new,
        "detalles_adicionales": null
    }))
    .expect("audit entry fixture")
}

#[test]
fn customer_status_flip_reports_exactly_one_change() {
    let row = entry(
        "ACTUALIZACION_CLIENTE",
        json!({ "nombre": "Ana", "estado_usuario": "activo" }),
        json!({ "nombre": "Ana", "estado_usuario": "inactivo" }),
    );
    let summary = summarize_entry(&row);
    let lines = summary.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].field, "estado_usuario");
    let rendered = summary.to_string();
    assert!(rendered.contains("estado_usuario: activo → inactivo"));
    assert!(!rendered.contains("nombre"));
}

#[test]
fn medication_creation_lists_registro_creado() {
    let row = entry(
        "CREACION_MEDICAMENTO",
        serde_json::Value::Null,
        json!({ "nombre": "Ibuprofeno" }),
    );
    let summary = summarize_entry(&row);
    let rendered = summary.to_string();
    assert!(rendered.starts_with("Registro Creado:"));
    assert!(rendered.contains("nombre: Ibuprofeno"));
}

#[test]
fn deletion_lists_previous_values() {
    let row = entry(
        "ELIMINACION_ALERTA",
        json!({ "dosis": "400mg", "estado": "activa" }),
        serde_json::Value::Null,
    );
    let summary = summarize_entry(&row);
    let rendered = summary.to_string();
    assert!(rendered.starts_with("Registro Eliminado"));
    assert!(rendered.contains("dosis: 400mg"));
}

#[test]
fn structurally_equal_snapshots_report_no_changes() {
    let data = json!({
        "nombre": "Ana",
        "eps_id": 3,
        "fecha_nacimiento": "1990-03-08"
    });
    let row = entry("EDICION_CLIENTE", data.clone(), data);
    let summary = summarize_entry(&row);
    assert!(!summary.has_changes());
}

#[test]
fn excluded_keys_are_invisible_under_every_action() {
    let secret_old = json!({ "contrasena": "********", "last_login": "2024-01-01T00:00:00Z" });
    let secret_new = json!({ "contrasena": "########", "last_login": "2024-02-01T00:00:00Z" });

    for action in ["CREACION_CLIENTE", "ELIMINACION_CLIENTE", "EDICION_CLIENTE"] {
        let row = entry(action, secret_old.clone(), secret_new.clone());
        let summary = summarize_entry(&row);
        let rendered = summary.to_string();
        assert!(
            !rendered.to_lowercase().contains("contrasena"),
            "{action} leaked an excluded key: {rendered}"
        );
        assert!(!summary.has_changes(), "{action} reported excluded keys");
    }
}

#[test]
fn string_snapshots_are_decoded_and_diffed() {
    // Older audit rows carry snapshots as JSON-encoded strings.
    let row = entry(
        "EDICION_MEDICAMENTO",
        json!("{\"estado_medicamento\":\"disponible\"}"),
        json!("{\"estado_medicamento\":\"discontinuado\"}"),
    );
    let summary = summarize_entry(&row);
    assert_eq!(summary.lines().len(), 1);
    assert!(summary
        .to_string()
        .contains("estado_medicamento: disponible → discontinuado"));
}

#[test]
fn malformed_string_snapshots_degrade_to_event() {
    let row = entry("EDICION_CLIENTE", json!("{oops"), json!("not json at all"));
    let summary = summarize_entry(&row);
    assert!(matches!(summary, ChangeSummary::Event(_)));
}

#[test]
fn session_events_render_as_events() {
    let row = entry(
        "INICIO_SESION_EXITOSO",
        serde_json::Value::Null,
        serde_json::Value::Null,
    );
    let summary = summarize_entry(&row);
    assert_eq!(
        summary.to_string().trim(),
        "Evento de inicio sesion exitoso."
    );
}

#[test]
fn dates_and_booleans_are_formatted_in_diffs() {
    let row = entry(
        "EDICION_ALERTA",
        json!({ "fecha_fin": "2024-05-01", "notificado": false }),
        json!({ "fecha_fin": "2024-06-01", "notificado": true }),
    );
    let summary = summarize_entry(&row);
    let rendered = summary.to_string();
    assert!(rendered.contains("fecha_fin: 01/05/2024 → 01/06/2024"));
    assert!(rendered.contains("notificado: No → Sí"));
}
