//! Medication catalog endpoints.

use medialert_core::result::AppResult;
use medialert_entity::{CreateMedication, Medication, MedicationStatus, UpdateMedication};

use crate::http::{ApiClient, CreatedResponse, MessageResponse};

/// Availability filter for the catalog list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MedicationFilter {
    /// Every medication regardless of availability.
    #[default]
    All,
    /// Only one availability status.
    Status(MedicationStatus),
}

impl MedicationFilter {
    fn as_param(&self) -> String {
        match self {
            Self::All => "todos".to_string(),
            Self::Status(status) => status.as_str().to_string(),
        }
    }
}

impl ApiClient {
    /// List catalog medications.
    pub async fn list_medications(&self, filter: MedicationFilter) -> AppResult<Vec<Medication>> {
        self.get_json("/api/admin/medicamentos", &[("estado", filter.as_param())])
            .await
    }

    /// Fetch a single medication by id.
    pub async fn get_medication(&self, id: i64) -> AppResult<Medication> {
        self.get_json(&format!("/api/admin/medicamentos/{id}"), &[])
            .await
    }

    /// Add a medication to the catalog and return its id.
    pub async fn create_medication(&self, payload: &CreateMedication) -> AppResult<i64> {
        let response: CreatedResponse = self.post_json("/api/admin/medicamentos", payload).await?;
        Ok(response.id)
    }

    /// Update an existing medication.
    pub async fn update_medication(
        &self,
        id: i64,
        payload: &UpdateMedication,
    ) -> AppResult<String> {
        let response: MessageResponse = self
            .put_json(&format!("/api/admin/medicamentos/{id}"), payload)
            .await?;
        Ok(response.message)
    }

    /// Flip a medication's availability (discontinue/reactivate).
    pub async fn set_medication_status(
        &self,
        id: i64,
        status: MedicationStatus,
    ) -> AppResult<String> {
        self.update_medication(id, &UpdateMedication::set_status(status))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_params() {
        assert_eq!(MedicationFilter::All.as_param(), "todos");
        assert_eq!(
            MedicationFilter::Status(MedicationStatus::Discontinued).as_param(),
            "discontinuado"
        );
    }
}
