//! Render → upload → log orchestration.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{error, info};

use medialert_client::ApiClient;
use medialert_core::result::AppResult;
use medialert_entity::CreateReportLog;

use crate::document::{RenderedReport, ReportSpec};
use crate::ReportRenderer;

/// What happened to a published report.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    /// File name the report was rendered under.
    pub filename: String,
    /// Stored file name assigned by the backend.
    pub stored_filename: String,
    /// Report-log id, when the log entry was accepted.
    pub log_id: Option<i64>,
    /// Local copy, when an output directory was given.
    pub local_path: Option<PathBuf>,
}

/// Render a report, upload the bytes, and append the report-log entry.
///
/// A failed log append after a successful upload is reported but not
/// fatal; the stored file already exists and the outcome says so.
pub async fn publish_report(
    client: &ApiClient,
    renderer: &dyn ReportRenderer,
    spec: &ReportSpec,
    output_dir: Option<&Path>,
) -> AppResult<PublishOutcome> {
    let rendered = render_named(renderer, spec)?;

    let local_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(&rendered.filename);
            std::fs::write(&path, &rendered.bytes)?;
            Some(path)
        }
        None => None,
    };

    let stored_filename = client
        .upload_report(&rendered.filename, rendered.bytes)
        .await?;
    info!(stored = %stored_filename, "Report uploaded");

    let log_id = match &spec.log_kind {
        Some(kind) => {
            let payload = CreateReportLog {
                kind: kind.clone(),
                name: spec.title.clone(),
                stored_filename: stored_filename.clone(),
            };
            match client.append_report_log(&payload).await {
                Ok(id) => Some(id),
                Err(e) => {
                    error!(error = %e, "Report uploaded but log entry failed");
                    None
                }
            }
        }
        None => None,
    };

    Ok(PublishOutcome {
        filename: rendered.filename,
        stored_filename,
        log_id,
        local_path,
    })
}

/// Render a spec under its dated file name.
pub fn render_named(renderer: &dyn ReportRenderer, spec: &ReportSpec) -> AppResult<RenderedReport> {
    let bytes = renderer.render(spec)?;
    let filename = format!(
        "{}_{}.{}",
        spec.filename_stem,
        Utc::now().format("%Y-%m-%d"),
        renderer.file_extension()
    );
    Ok(RenderedReport { filename, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ColumnSpec, Orientation, PaperSize};
    use crate::text::TextRenderer;

    #[test]
    fn test_render_named_appends_date_and_extension() {
        let spec = ReportSpec {
            title: "T".into(),
            filename_stem: "Reporte_Usuarios".into(),
            log_kind: None,
            orientation: Orientation::Portrait,
            paper: PaperSize::A4,
            columns: vec![ColumnSpec::new("A", 1)],
            rows: vec![],
        };
        let renderer = TextRenderer::new(10, Utc::now());
        let rendered = render_named(&renderer, &spec).unwrap();
        assert!(rendered.filename.starts_with("Reporte_Usuarios_"));
        assert!(rendered.filename.ends_with(".txt"));
    }
}
