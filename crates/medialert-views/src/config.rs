//! Declarative view configuration.
//!
//! One table drives every list view: title, empty-state message, and
//! column headers. The renderers look their view up here instead of
//! hard-coding a near-duplicate load function per entity.

/// The list views of the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    /// Admin: customer management.
    Customers,
    /// Admin: medication catalog.
    Medications,
    /// Admin: reminder management.
    Alerts,
    /// Admin: per-customer reminder rollup.
    AlertsGrouped,
    /// Admin: audit trail.
    Audit,
    /// Admin: report history.
    Reports,
    /// Customer: own reminders.
    MyAlerts,
}

/// Static configuration of one list view.
#[derive(Debug, Clone, Copy)]
pub struct ViewConfig {
    /// View identifier.
    pub key: ViewKey,
    /// Heading shown above the table.
    pub title: &'static str,
    /// Message shown when the (filtered) collection is empty.
    pub empty_message: &'static str,
    /// Column headers, in render order.
    pub columns: &'static [&'static str],
}

const VIEWS: &[ViewConfig] = &[
    ViewConfig {
        key: ViewKey::Customers,
        title: "Clientes",
        empty_message: "No hay clientes registrados.",
        columns: &["ID", "Nombre", "Cédula", "Email", "Ciudad", "EPS", "Estado"],
    },
    ViewConfig {
        key: ViewKey::Medications,
        title: "Medicamentos",
        empty_message: "No hay medicamentos registrados.",
        columns: &["ID", "Nombre", "Descripción", "Composición", "Rango Edad", "Estado"],
    },
    ViewConfig {
        key: ViewKey::Alerts,
        title: "Alertas",
        empty_message: "No hay alertas registradas.",
        columns: &[
            "ID",
            "Cliente",
            "Cédula",
            "Medicamento",
            "Dosis",
            "Frecuencia",
            "Inicio",
            "Fin",
            "Hora Pref.",
            "Estado",
        ],
    },
    ViewConfig {
        key: ViewKey::AlertsGrouped,
        title: "Alertas por Cliente",
        empty_message: "No hay clientes con alertas.",
        columns: &["ID", "Cliente", "Cédula", "Estado", "Activas", "Total"],
    },
    ViewConfig {
        key: ViewKey::Audit,
        title: "Auditoría",
        empty_message: "No hay registros de auditoría disponibles para este filtro.",
        columns: &[
            "Fecha y Hora",
            "Usuario",
            "Acción",
            "Módulo",
            "ID Afectado",
            "Cambios",
            "Detalles",
        ],
    },
    ViewConfig {
        key: ViewKey::Reports,
        title: "Historial de Reportes",
        empty_message: "No hay reportes generados en el historial.",
        columns: &["ID", "Generado", "Nombre", "Tipo", "Generado Por"],
    },
    ViewConfig {
        key: ViewKey::MyAlerts,
        title: "Mis Alertas",
        empty_message: "No tienes alertas asignadas.",
        columns: &[
            "Medicamento",
            "Dosis",
            "Frecuencia",
            "Inicio",
            "Fin",
            "Hora Pref.",
            "Estado",
        ],
    },
];

/// Look up the configuration for one view.
pub fn view_config(key: ViewKey) -> &'static ViewConfig {
    VIEWS
        .iter()
        .find(|v| v.key == key)
        .expect("every ViewKey has a config entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves() {
        for key in [
            ViewKey::Customers,
            ViewKey::Medications,
            ViewKey::Alerts,
            ViewKey::AlertsGrouped,
            ViewKey::Audit,
            ViewKey::Reports,
            ViewKey::MyAlerts,
        ] {
            let config = view_config(key);
            assert!(!config.columns.is_empty());
            assert!(!config.empty_message.is_empty());
        }
    }
}
