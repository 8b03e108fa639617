//! Health-insurer (EPS) lookup endpoint.

use medialert_core::result::AppResult;
use medialert_entity::Insurer;

use crate::http::ApiClient;

impl ApiClient {
    /// List active insurers for the customer form's dropdown.
    pub async fn list_insurers(&self) -> AppResult<Vec<Insurer>> {
        self.get_json("/api/eps", &[]).await
    }
}
