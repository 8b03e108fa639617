//! Report generation and history CLI commands.

use std::path::Path;

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use medialert_core::error::AppError;
use medialert_core::types::format_timestamp;
use medialert_entity::UserRole;
use medialert_report::{builders, publish_report, TextRenderer};
use medialert_views::{view_config, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for report commands
#[derive(Debug, Args)]
pub struct ReportsArgs {
    /// Report subcommand
    #[command(subcommand)]
    pub command: ReportsCommand,
}

/// The reports the dashboard can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// System users (customers + admins)
    Users,
    /// Medication catalog
    Medications,
    /// Active reminders
    ActiveAlerts,
    /// Audit trail (latest 100)
    Audit,
    /// Consolidated prescription
    Prescription,
}

/// Report subcommands
#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// Generate a report, upload it, and append the report log
    Generate {
        /// Which report to generate
        #[arg(value_enum)]
        kind: ReportKind,
        /// Restrict the prescription report to one customer
        #[arg(long)]
        customer: Option<i64>,
    },
    /// List the report history
    List,
    /// Download a stored report by log id
    Download {
        /// Report log id
        log_id: i64,
        /// Output file path (defaults to the stored name)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Report history display row
#[derive(Debug, Serialize, Tabled)]
struct ReportRow {
    /// ID
    id: i64,
    /// Generado
    generado: String,
    /// Nombre
    nombre: String,
    /// Tipo
    tipo: String,
    /// Generado Por
    por: String,
}

/// Execute report commands
pub async fn execute(args: &ReportsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Admin).await?;

    match &args.command {
        ReportsCommand::Generate { kind, customer } => {
            let spec = match kind {
                ReportKind::Users => builders::users_report(&client).await?,
                ReportKind::Medications => builders::medications_report(&client).await?,
                ReportKind::ActiveAlerts => builders::active_alerts_report(&client).await?,
                ReportKind::Audit => builders::audit_report(&client).await?,
                ReportKind::Prescription => {
                    builders::prescription_report(&client, *customer).await?
                }
            };

            let renderer = TextRenderer::new(config.reports.rows_per_page, chrono::Utc::now());
            let outcome = publish_report(
                &client,
                &renderer,
                &spec,
                Some(Path::new(&config.reports.output_dir)),
            )
            .await?;

            output::print_success(&format!(
                "Reporte '{}' generado y subido como '{}'.",
                spec.title, outcome.stored_filename
            ));
            if let Some(path) = &outcome.local_path {
                output::print_kv("Copia local", &path.display().to_string());
            }
            match outcome.log_id {
                Some(log_id) => output::print_kv("Log", &log_id.to_string()),
                None => output::print_warning(
                    "El reporte se subió pero no se pudo registrar en el historial.",
                ),
            }
        }
        ReportsCommand::List => {
            let entries = client.list_report_log().await?;
            let rows: Vec<ReportRow> = entries
                .iter()
                .map(|e| ReportRow {
                    id: e.id,
                    generado: format_timestamp(e.generated_at),
                    nombre: e.name.clone(),
                    tipo: e.kind_display(),
                    por: e.generated_by.clone().unwrap_or_else(|| "Desconocido".into()),
                })
                .collect();
            output::print_list(&rows, format, view_config(ViewKey::Reports).empty_message);
        }
        ReportsCommand::Download { log_id, output: out } => {
            let bytes = client.download_report(*log_id).await?;
            let path = out.clone().unwrap_or_else(|| format!("reporte_{log_id}.pdf"));
            tokio::fs::write(&path, bytes)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write file: {e}")))?;
            output::print_success(&format!("Reporte descargado en '{}'.", path));
        }
    }

    Ok(())
}
