//! Friendly names for backend table identifiers.

/// Map an internal table name to the label shown in the audit view.
///
/// Unknown names are capitalized; session/login pseudo-tables collapse to
/// `Sesión`.
pub fn friendly_table_name(table: Option<&str>) -> String {
    let Some(table) = table else {
        return "N/A".to_string();
    };
    match table.to_lowercase().as_str() {
        "usuarios" => "Usuarios/Clientes".to_string(),
        "medicamentos" => "Medicamentos".to_string(),
        "alertas" => "Alertas".to_string(),
        "auditoria" => "Auditoría".to_string(),
        "reportes_log" => "Log de Reportes".to_string(),
        "eps" => "EPS".to_string(),
        _ => {
            let upper = table.to_uppercase();
            if upper.contains("_SESION") || upper.contains("_LOGIN") {
                "Sesión".to_string()
            } else {
                let mut chars = table.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => "N/A".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tables() {
        assert_eq!(friendly_table_name(Some("usuarios")), "Usuarios/Clientes");
        assert_eq!(friendly_table_name(Some("Reportes_Log")), "Log de Reportes");
        assert_eq!(friendly_table_name(Some("eps")), "EPS");
    }

    #[test]
    fn test_session_pseudo_tables() {
        assert_eq!(friendly_table_name(Some("APP_SESION")), "Sesión");
        assert_eq!(friendly_table_name(Some("intento_login")), "Sesión");
    }

    #[test]
    fn test_unknown_is_capitalized_and_absent_is_na() {
        assert_eq!(friendly_table_name(Some("recetas")), "Recetas");
        assert_eq!(friendly_table_name(None), "N/A");
    }
}
