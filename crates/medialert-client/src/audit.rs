//! Audit log query endpoint.

use medialert_core::result::AppResult;
use medialert_entity::AuditLogEntry;

use crate::http::ApiClient;

/// Filters for the audit log query.
#[derive(Debug, Clone, Default)]
pub struct AuditQuery {
    /// Restrict to one affected table (e.g. `"usuarios"`).
    pub table: Option<String>,
    /// Restrict to one acting application user.
    pub user_id: Option<i64>,
    /// Maximum number of entries (newest first).
    pub limit: Option<u32>,
}

impl ApiClient {
    /// Query the audit trail, newest entries first.
    pub async fn list_audit(&self, query: &AuditQuery) -> AppResult<Vec<AuditLogEntry>> {
        let mut params = Vec::new();
        if let Some(table) = &query.table {
            params.push(("tabla", table.clone()));
        }
        if let Some(user_id) = query.user_id {
            params.push(("usuario_id", user_id.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_json("/api/admin/auditoria", &params).await
    }
}
