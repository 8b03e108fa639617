//! Session endpoints: login, logout, session check, account settings.

use medialert_core::result::AppResult;
use medialert_entity::{ChangePasswordRequest, Customer, LoginRequest, SessionInfo};
use tracing::info;

use crate::http::{ApiClient, MessageResponse};

impl ApiClient {
    /// Open a session. The backend sets the session cookie, which the
    /// client captures for replay in later processes.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<SessionInfo> {
        let response = self.post_raw("/api/login", request).await?;
        self.remember_session(&response);
        let session: SessionInfo = response.json().await.map_err(|e| {
            medialert_core::AppError::with_source(
                medialert_core::error::ErrorKind::Serialization,
                format!("Failed to decode login response: {e}"),
                e,
            )
        })?;
        info!(user = %session.name, role = %session.role, "Session opened");
        Ok(session)
    }

    /// Close the current session.
    pub async fn logout(&self) -> AppResult<()> {
        let _: MessageResponse = self.post_json("/api/logout", &serde_json::json!({})).await?;
        self.clear_session();
        Ok(())
    }

    /// Verify the current session and return the signed-in identity.
    pub async fn session_check(&self) -> AppResult<SessionInfo> {
        self.get_json("/api/session_check", &[]).await
    }

    /// Fetch the signed-in user's own profile (account settings view).
    pub async fn own_profile(&self) -> AppResult<Customer> {
        self.get_json("/api/configuracion/usuario", &[]).await
    }

    /// Change the signed-in user's password.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> AppResult<String> {
        let response: MessageResponse = self
            .post_json("/api/configuracion/cambiar_contrasena", request)
            .await?;
        Ok(response.message)
    }
}
