//! The dashboard view controller.
//!
//! Owns every per-view cache and ties fetch, sort, and filter together.
//! One controller lives for the duration of a dashboard session; mutations
//! invalidate the affected view so the next activation refetches.

use tracing::debug;

use medialert_client::{ApiClient, AuditQuery, CustomerQuery, MedicationFilter};
use medialert_core::result::AppResult;
use medialert_core::types::SearchQuery;
use medialert_entity::{Alert, AuditLogEntry, Customer, CustomerAlertSummary, Medication};

use crate::filter::filter_rows;
use crate::sort::sort_by_status_then_name;
use crate::state::ViewState;

/// Cached state for every list view of a dashboard session.
#[derive(Debug, Default)]
pub struct ViewController {
    customers: ViewState<Customer>,
    medications: ViewState<Medication>,
    alerts: ViewState<Alert>,
    grouped_alerts: ViewState<CustomerAlertSummary>,
    audit: ViewState<AuditLogEntry>,
}

impl ViewController {
    /// A controller with every cache cold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every cache (logout / full refresh).
    pub fn reset(&mut self) {
        debug!("Resetting all view caches");
        self.customers.invalidate();
        self.medications.invalidate();
        self.alerts.invalidate();
        self.grouped_alerts.invalidate();
        self.audit.invalidate();
    }

    /// Invalidate the customer-derived views after a customer mutation.
    pub fn customers_changed(&mut self) {
        self.customers.invalidate();
        self.alerts.invalidate();
        self.grouped_alerts.invalidate();
    }

    /// Invalidate the medication-derived views after a catalog mutation.
    pub fn medications_changed(&mut self) {
        self.medications.invalidate();
        self.alerts.invalidate();
    }

    /// Invalidate the alert views after a reminder mutation.
    pub fn alerts_changed(&mut self) {
        self.alerts.invalidate();
        self.grouped_alerts.invalidate();
    }

    /// Invalidate the audit view (any mutation appends to the trail).
    pub fn audit_changed(&mut self) {
        self.audit.invalidate();
    }

    /// Customers view: fetch-once, sorted, filtered.
    pub async fn customers(
        &mut self,
        client: &ApiClient,
        search: &SearchQuery,
    ) -> AppResult<Vec<&Customer>> {
        let rows = self
            .customers
            .ensure_with(|| async {
                let mut rows = client.list_customers(&CustomerQuery::all_customers()).await?;
                sort_by_status_then_name(&mut rows);
                Ok(rows)
            })
            .await?;
        Ok(filter_rows(rows, search))
    }

    /// Medications view: fetch-once, sorted, filtered.
    pub async fn medications(
        &mut self,
        client: &ApiClient,
        search: &SearchQuery,
    ) -> AppResult<Vec<&Medication>> {
        let rows = self
            .medications
            .ensure_with(|| async {
                let mut rows = client.list_medications(MedicationFilter::All).await?;
                sort_by_status_then_name(&mut rows);
                Ok(rows)
            })
            .await?;
        Ok(filter_rows(rows, search))
    }

    /// Alerts view: fetch-once, sorted, filtered.
    pub async fn alerts(
        &mut self,
        client: &ApiClient,
        search: &SearchQuery,
    ) -> AppResult<Vec<&Alert>> {
        let rows = self
            .alerts
            .ensure_with(|| async {
                let mut rows = client.list_alerts(None).await?;
                sort_by_status_then_name(&mut rows);
                Ok(rows)
            })
            .await?;
        Ok(filter_rows(rows, search))
    }

    /// Grouped alerts view: fetch-once, filtered.
    pub async fn grouped_alerts(
        &mut self,
        client: &ApiClient,
        search: &SearchQuery,
    ) -> AppResult<Vec<&CustomerAlertSummary>> {
        let rows = self
            .grouped_alerts
            .ensure_with(|| client.list_alerts_grouped())
            .await?;
        Ok(filter_rows(rows, search))
    }

    /// Audit view: fetch-once per (table, limit) activation.
    ///
    /// The audit view refetches when its server-side filter changes, so the
    /// caller invalidates before passing a different query.
    pub async fn audit(
        &mut self,
        client: &ApiClient,
        query: &AuditQuery,
    ) -> AppResult<&[AuditLogEntry]> {
        self.audit.ensure_with(|| client.list_audit(query)).await
    }

    /// Explicitly drop the audit cache (filter change).
    pub fn reset_audit(&mut self) {
        self.audit.invalidate();
    }
}
