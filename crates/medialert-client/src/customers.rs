//! Customer management endpoints.

use medialert_core::result::AppResult;
use medialert_entity::{CreateCustomer, Customer, CustomerStatus, UpdateCustomer, UserRole};

use crate::http::{ApiClient, CreatedResponse, MessageResponse};

/// Server-side filters for the customer list.
///
/// The admin dashboard fetches with `status: None` (`todos`) and filters
/// client-side; the role filter selects the dashboard population.
#[derive(Debug, Clone, Default)]
pub struct CustomerQuery {
    /// Restrict to one role.
    pub role: Option<UserRole>,
    /// Restrict to one account status; `None` requests every status.
    pub status: Option<CustomerStatus>,
    /// Optional server-side name/national-id search.
    pub search: Option<String>,
}

impl CustomerQuery {
    /// The admin dashboard population: every customer, any status.
    pub fn all_customers() -> Self {
        Self {
            role: Some(UserRole::Customer),
            status: None,
            search: None,
        }
    }

    /// Every administrator, any status.
    pub fn all_admins() -> Self {
        Self {
            role: Some(UserRole::Admin),
            status: None,
            search: None,
        }
    }

    fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(role) = self.role {
            params.push(("rol", role.as_str().to_string()));
        }
        match self.status {
            Some(status) => params.push(("estado", status.as_str().to_string())),
            None => params.push(("estado", "todos".to_string())),
        }
        if let Some(search) = &self.search {
            params.push(("query", search.clone()));
        }
        params
    }
}

impl ApiClient {
    /// List customers/admins matching the query.
    pub async fn list_customers(&self, query: &CustomerQuery) -> AppResult<Vec<Customer>> {
        self.get_json("/api/admin/clientes", &query.to_params())
            .await
    }

    /// Fetch a single customer by id.
    pub async fn get_customer(&self, id: i64) -> AppResult<Customer> {
        self.get_json(&format!("/api/admin/clientes/{id}"), &[])
            .await
    }

    /// Register a new customer and return its id.
    pub async fn create_customer(&self, payload: &CreateCustomer) -> AppResult<i64> {
        let response: CreatedResponse = self.post_json("/api/admin/clientes", payload).await?;
        Ok(response.id)
    }

    /// Update an existing customer.
    pub async fn update_customer(&self, id: i64, payload: &UpdateCustomer) -> AppResult<String> {
        let response: MessageResponse = self
            .put_json(&format!("/api/admin/clientes/{id}"), payload)
            .await?;
        Ok(response.message)
    }

    /// Flip a customer's account status (deactivate/reactivate).
    pub async fn set_customer_status(
        &self,
        id: i64,
        status: CustomerStatus,
    ) -> AppResult<String> {
        self.update_customer(id, &UpdateCustomer::set_status(status))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_requests_all_statuses() {
        let params = CustomerQuery::all_customers().to_params();
        assert!(params.contains(&("rol", "cliente".to_string())));
        assert!(params.contains(&("estado", "todos".to_string())));
    }

    #[test]
    fn test_explicit_status_filter() {
        let query = CustomerQuery {
            role: None,
            status: Some(CustomerStatus::Inactive),
            search: Some("ana".into()),
        };
        let params = query.to_params();
        assert!(params.contains(&("estado", "inactivo".to_string())));
        assert!(params.contains(&("query", "ana".to_string())));
    }
}
