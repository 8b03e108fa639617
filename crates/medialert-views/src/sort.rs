//! Status-group-then-name ordering for list views.

use medialert_entity::{Alert, AlertStatus, Customer, CustomerStatus, Medication};

/// Rows that sort by status group first, then display name.
pub trait StatusGrouped {
    /// Group rank; lower ranks sort first (active-like before inactive-like).
    fn status_rank(&self) -> u8;
    /// The name used to break ties, compared case-insensitively.
    fn sort_name(&self) -> &str;
}

impl StatusGrouped for Customer {
    fn status_rank(&self) -> u8 {
        match self.status {
            CustomerStatus::Active => 0,
            CustomerStatus::Inactive => 1,
        }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl StatusGrouped for Medication {
    fn status_rank(&self) -> u8 {
        if self.status.is_available() { 0 } else { 1 }
    }

    fn sort_name(&self) -> &str {
        &self.name
    }
}

impl StatusGrouped for Alert {
    fn status_rank(&self) -> u8 {
        match self.status {
            AlertStatus::Active => 0,
            AlertStatus::Completed => 1,
            AlertStatus::Inactive => 2,
            AlertStatus::Failed => 3,
        }
    }

    fn sort_name(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("")
    }
}

/// Sort rows in place: status group first, then name, lexicographic.
pub fn sort_by_status_then_name<T: StatusGrouped>(rows: &mut [T]) {
    rows.sort_by(|a, b| {
        a.status_rank()
            .cmp(&b.status_rank())
            .then_with(|| a.sort_name().to_lowercase().cmp(&b.sort_name().to_lowercase()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(name: &str, status: &str) -> Customer {
        serde_json::from_value(json!({
            "id": 1,
            "nombre": name,
            "cedula": "1",
            "email": "x@y.co",
            "rol": "cliente",
            "estado_usuario": status
        }))
        .unwrap()
    }

    #[test]
    fn test_active_group_sorts_first() {
        let mut rows = vec![
            customer("zoe", "inactivo"),
            customer("ana", "inactivo"),
            customer("Zulema", "activo"),
            customer("beto", "activo"),
        ];
        sort_by_status_then_name(&mut rows);
        let names: Vec<&str> = rows.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["beto", "Zulema", "ana", "zoe"]);
    }

    #[test]
    fn test_name_tiebreak_is_case_insensitive() {
        let mut rows = vec![customer("beto", "activo"), customer("Ana", "activo")];
        sort_by_status_then_name(&mut rows);
        assert_eq!(rows[0].name, "Ana");
    }
}
