//! Alert (medication reminder) endpoints.

use medialert_core::result::AppResult;
use medialert_entity::{Alert, CreateAlert, CustomerAlertSummary, UpdateAlert};

use crate::http::{ApiClient, CreatedResponse, MessageResponse};

impl ApiClient {
    /// List reminders, optionally restricted to one customer.
    pub async fn list_alerts(&self, customer_id: Option<i64>) -> AppResult<Vec<Alert>> {
        let mut params = Vec::new();
        if let Some(id) = customer_id {
            params.push(("usuario_id", id.to_string()));
        }
        self.get_json("/api/admin/alertas", &params).await
    }

    /// Per-customer rollup for the grouped alerts view.
    pub async fn list_alerts_grouped(&self) -> AppResult<Vec<CustomerAlertSummary>> {
        self.get_json(
            "/api/admin/alertas",
            &[("group_by_client", "true".to_string())],
        )
        .await
    }

    /// Fetch a single reminder by id.
    pub async fn get_alert(&self, id: i64) -> AppResult<Alert> {
        self.get_json(&format!("/api/admin/alertas/{id}"), &[]).await
    }

    /// Assign a new reminder and return its id.
    pub async fn create_alert(&self, payload: &CreateAlert) -> AppResult<i64> {
        let response: CreatedResponse = self.post_json("/api/admin/alertas", payload).await?;
        Ok(response.id)
    }

    /// Update an existing reminder.
    pub async fn update_alert(&self, id: i64, payload: &UpdateAlert) -> AppResult<String> {
        let response: MessageResponse = self
            .put_json(&format!("/api/admin/alertas/{id}"), payload)
            .await?;
        Ok(response.message)
    }

    /// Delete a reminder.
    pub async fn delete_alert(&self, id: i64) -> AppResult<String> {
        let response: MessageResponse =
            self.delete_json(&format!("/api/admin/alertas/{id}")).await?;
        Ok(response.message)
    }

    /// The signed-in customer's own reminders.
    pub async fn my_alerts(&self) -> AppResult<Vec<Alert>> {
        self.get_json("/api/cliente/mis_alertas", &[]).await
    }
}
