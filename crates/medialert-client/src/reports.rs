//! Report storage endpoints: binary upload, log append, list, download.

use medialert_core::result::AppResult;
use medialert_entity::{CreateReportLog, ReportLogEntry};
use serde::Deserialize;

use crate::http::ApiClient;

/// Response of the binary upload endpoint.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Stored file name assigned by the backend.
    filename: String,
}

/// Response of the report-log append endpoint.
#[derive(Debug, Deserialize)]
struct LogCreatedResponse {
    log_id: i64,
}

impl ApiClient {
    /// Upload a rendered report binary; returns the stored file name.
    pub async fn upload_report(&self, filename: &str, bytes: Vec<u8>) -> AppResult<String> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")
            .map_err(|e| {
                medialert_core::AppError::internal(format!("Invalid upload part: {e}"))
            })?;
        let form = reqwest::multipart::Form::new().part("report_pdf", part);
        let response: UploadResponse = self
            .post_multipart("/api/admin/reportes/upload_pdf", form)
            .await?;
        Ok(response.filename)
    }

    /// Append an entry to the report log; returns the log id.
    pub async fn append_report_log(&self, payload: &CreateReportLog) -> AppResult<i64> {
        let response: LogCreatedResponse =
            self.post_json("/api/admin/reportes_log", payload).await?;
        Ok(response.log_id)
    }

    /// List the most recent report log entries (newest first).
    pub async fn list_report_log(&self) -> AppResult<Vec<ReportLogEntry>> {
        self.get_json("/api/admin/reportes_log", &[]).await
    }

    /// Download a stored report binary by log id.
    pub async fn download_report(&self, log_id: i64) -> AppResult<Vec<u8>> {
        self.get_bytes(&format!("/api/admin/reportes/download/{log_id}"))
            .await
    }
}
