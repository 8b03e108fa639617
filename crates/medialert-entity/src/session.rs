//! Session and account-settings payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::customer::UserRole;

/// The signed-in identity returned by login and session-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    /// User identifier (`id` on login, `user_id` on session-check).
    #[serde(rename = "user_id", alias = "id")]
    pub user_id: i64,
    /// Display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Role the session was opened with.
    #[serde(rename = "rol")]
    pub role: UserRole,
}

/// Credentials for opening a session.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    /// National identity number.
    #[serde(rename = "cedula")]
    #[validate(length(min = 1, message = "La cédula es requerida"))]
    pub national_id: String,
    /// Password.
    #[serde(rename = "contrasena")]
    #[validate(length(min = 1, message = "La contraseña es requerida"))]
    pub password: String,
}

/// Payload for the change-password form.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[serde(rename = "contrasena_actual")]
    #[validate(length(min = 1, message = "La contraseña actual es requerida"))]
    pub current_password: String,
    /// New password.
    #[serde(rename = "contrasena_nueva")]
    #[validate(length(min = 6, message = "La nueva contraseña debe tener al menos 6 caracteres"))]
    pub new_password: String,
    /// Confirmation of the new password.
    #[serde(rename = "contrasena_nueva_confirmacion")]
    pub confirmation: String,
}

impl ChangePasswordRequest {
    /// Check that the confirmation matches the new password.
    pub fn confirmation_matches(&self) -> bool {
        self.new_password == self.confirmation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_info_accepts_both_id_keys() {
        let login: SessionInfo =
            serde_json::from_value(json!({ "id": 5, "nombre": "Ana", "rol": "cliente" })).unwrap();
        let check: SessionInfo =
            serde_json::from_value(json!({ "user_id": 5, "nombre": "Ana", "rol": "cliente" }))
                .unwrap();
        assert_eq!(login.user_id, check.user_id);
    }

    #[test]
    fn test_change_password_confirmation() {
        let req = ChangePasswordRequest {
            current_password: "old".into(),
            new_password: "secret1".into(),
            confirmation: "secret2".into(),
        };
        assert!(!req.confirmation_matches());
    }
}
