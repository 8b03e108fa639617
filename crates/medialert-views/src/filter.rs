//! Client-side substring filtering over cached rows.

use medialert_core::types::SearchQuery;
use medialert_entity::{Alert, Customer, CustomerAlertSummary, Medication};

/// Rows that expose the text fields the search box matches against.
pub trait Searchable {
    /// The candidate fields, in match order.
    fn search_fields(&self) -> Vec<Option<&str>>;
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), Some(self.national_id.as_str())]
    }
}

impl Searchable for Medication {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.name.as_str()), self.description.as_deref()]
    }
}

impl Searchable for Alert {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.customer_name.as_deref(),
            self.customer_national_id.as_deref(),
            self.medication_name.as_deref(),
        ]
    }
}

impl Searchable for CustomerAlertSummary {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.customer_name.as_str()),
            Some(self.national_id.as_str()),
        ]
    }
}

/// Filter cached rows by the query; pure and restartable.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &SearchQuery) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| query.matches_any(row.search_fields()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(name: &str, national_id: &str) -> Customer {
        serde_json::from_value(json!({
            "id": 1,
            "nombre": name,
            "cedula": national_id,
            "email": "x@y.co",
            "rol": "cliente",
            "estado_usuario": "activo"
        }))
        .unwrap()
    }

    #[test]
    fn test_matches_name_or_national_id() {
        let rows = vec![customer("Ana María", "10945821"), customer("Pedro", "52")];
        let by_name = filter_rows(&rows, &SearchQuery::new("ana"));
        assert_eq!(by_name.len(), 1);
        let by_id = filter_rows(&rows, &SearchQuery::new("1094"));
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].name, "Ana María");
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let rows = vec![customer("Ana", "1"), customer("Pedro", "2")];
        assert_eq!(filter_rows(&rows, &SearchQuery::new("")).len(), 2);
    }

    #[test]
    fn test_alert_matches_joined_medication_name() {
        let alert: Alert = serde_json::from_value(json!({
            "id": 1,
            "cliente_nombre": "Ana",
            "cliente_cedula": "10945821",
            "medicamento_nombre": "Ibuprofeno",
            "estado": "activa"
        }))
        .unwrap();
        let rows = vec![alert];
        assert_eq!(filter_rows(&rows, &SearchQuery::new("ibu")).len(), 1);
        assert_eq!(filter_rows(&rows, &SearchQuery::new("aceta")).len(), 0);
    }
}
