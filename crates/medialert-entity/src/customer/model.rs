//! Customer entity model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::UserRole;
use super::status::CustomerStatus;

/// A registered user of the MediAlert system.
///
/// Customers and administrators share the backend `usuarios` table; the
/// admin dashboard manages rows with the `cliente` role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Unique user identifier.
    pub id: i64,
    /// Full display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// National identity number (cédula), also the login identifier.
    #[serde(rename = "cedula")]
    pub national_id: String,
    /// Email address.
    pub email: String,
    /// User role.
    #[serde(rename = "rol")]
    pub role: UserRole,
    /// Account status.
    #[serde(rename = "estado_usuario")]
    pub status: CustomerStatus,
    /// Date of birth.
    #[serde(rename = "fecha_nacimiento", default)]
    pub birth_date: Option<NaiveDate>,
    /// Contact phone number.
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    /// City of residence.
    #[serde(rename = "ciudad", default)]
    pub city: Option<String>,
    /// Date the account was registered.
    #[serde(rename = "fecha_registro", default)]
    pub registered_on: Option<NaiveDate>,
    /// Health-insurer (EPS) reference.
    #[serde(rename = "eps_id", default)]
    pub insurer_id: Option<i64>,
    /// Resolved insurer name (joined by the backend).
    #[serde(rename = "eps_nombre", default)]
    pub insurer_name: Option<String>,
}

impl Customer {
    /// Check if the account is currently active.
    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }

    /// Age in whole years on the given date, when the birth date is known.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = self.birth_date?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }
}

/// Payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateCustomer {
    /// Full display name.
    #[serde(rename = "nombre")]
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub name: String,
    /// National identity number.
    #[serde(rename = "cedula")]
    #[validate(length(min = 1, message = "La cédula es requerida"))]
    pub national_id: String,
    /// Email address.
    #[validate(email(message = "Formato de email inválido"))]
    pub email: String,
    /// Initial password (hashed server-side).
    #[serde(rename = "contrasena")]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub password: String,
    /// Date of birth (optional).
    #[serde(rename = "fecha_nacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Contact phone (optional).
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// City (optional).
    #[serde(rename = "ciudad", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Insurer reference (optional).
    #[serde(rename = "eps_id", skip_serializing_if = "Option::is_none")]
    pub insurer_id: Option<i64>,
}

/// Partial-update payload for an existing customer.
///
/// Absent fields keep their current value on the backend.
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateCustomer {
    /// New display name.
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New national identity number.
    #[serde(rename = "cedula", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
    /// New email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Formato de email inválido"))]
    pub email: Option<String>,
    /// New account status (activate/deactivate).
    #[serde(rename = "estado_usuario", skip_serializing_if = "Option::is_none")]
    pub status: Option<CustomerStatus>,
    /// New date of birth.
    #[serde(rename = "fecha_nacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// New contact phone.
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New city.
    #[serde(rename = "ciudad", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// New insurer reference.
    #[serde(rename = "eps_id", skip_serializing_if = "Option::is_none")]
    pub insurer_id: Option<i64>,
    /// Replacement password (optional).
    #[serde(rename = "contrasena_nueva", skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 6, message = "La contraseña debe tener al menos 6 caracteres"))]
    pub new_password: Option<String>,
}

impl UpdateCustomer {
    /// Payload that only flips the account status.
    pub fn set_status(status: CustomerStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn test_deserialize_wire_row() {
        let row = json!({
            "id": 12,
            "nombre": "Ana María Vélez",
            "cedula": "10945821",
            "email": "ana@example.com",
            "rol": "cliente",
            "estado_usuario": "activo",
            "fecha_nacimiento": "1990-03-08",
            "telefono": "3001234567",
            "ciudad": "Armenia",
            "fecha_registro": "2024-01-15",
            "eps_id": 3,
            "eps_nombre": "Sanitas"
        });
        let customer: Customer = serde_json::from_value(row).unwrap();
        assert_eq!(customer.name, "Ana María Vélez");
        assert_eq!(customer.role, UserRole::Customer);
        assert!(customer.is_active());
        assert_eq!(customer.insurer_name.as_deref(), Some("Sanitas"));
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let row = json!({
            "id": 1,
            "nombre": "Admin",
            "cedula": "1",
            "email": "admin@medialert.co",
            "rol": "admin",
            "estado_usuario": "activo"
        });
        let customer: Customer = serde_json::from_value(row).unwrap();
        assert!(customer.birth_date.is_none());
        assert!(customer.insurer_id.is_none());
    }

    #[test]
    fn test_age_on() {
        let row = json!({
            "id": 2, "nombre": "X", "cedula": "2", "email": "x@y.co",
            "rol": "cliente", "estado_usuario": "activo",
            "fecha_nacimiento": "2000-06-15"
        });
        let customer: Customer = serde_json::from_value(row).unwrap();
        let before = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert_eq!(customer.age_on(before), Some(23));
        assert_eq!(customer.age_on(after), Some(24));
    }

    #[test]
    fn test_create_payload_validation() {
        let bad = CreateCustomer {
            name: "Nuevo Cliente".into(),
            national_id: "555".into(),
            email: "not-an-email".into(),
            password: "123".into(),
            birth_date: None,
            phone: None,
            city: None,
            insurer_id: None,
        };
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = UpdateCustomer::set_status(CustomerStatus::Inactive);
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({ "estado_usuario": "inactivo" }));
    }
}
