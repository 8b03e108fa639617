//! Audit trail CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use medialert_audit::{format_details, friendly_table_name, summarize_entry};
use medialert_client::AuditQuery;
use medialert_core::error::AppError;
use medialert_core::types::format_timestamp;
use medialert_entity::UserRole;
use medialert_views::{view_config, ViewController, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for audit commands
#[derive(Debug, Args)]
pub struct AuditArgs {
    /// Audit subcommand
    #[command(subcommand)]
    pub command: AuditCommand,
}

/// Audit subcommands
#[derive(Debug, Subcommand)]
pub enum AuditCommand {
    /// List audit entries with rendered change summaries
    List {
        /// Filter by affected table (usuarios, medicamentos, alertas, ...)
        #[arg(short, long)]
        table: Option<String>,
        /// Filter by acting user id
        #[arg(short, long)]
        user: Option<i64>,
        /// Number of entries, newest first
        #[arg(short, long, default_value = "50")]
        limit: u32,
    },
    /// Export audit entries to a JSON file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "audit_export.json")]
        output: String,
        /// Number of entries, newest first
        #[arg(short, long, default_value = "500")]
        limit: u32,
    },
}

/// Audit display row
#[derive(Debug, Serialize, Tabled)]
struct AuditRow {
    /// Fecha y Hora
    fecha: String,
    /// Usuario
    usuario: String,
    /// Acción
    accion: String,
    /// Módulo
    modulo: String,
    /// ID Afectado
    registro: String,
    /// Cambios
    cambios: String,
    /// Detalles
    detalles: String,
}

/// Execute audit commands
pub async fn execute(args: &AuditArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Admin).await?;

    match &args.command {
        AuditCommand::List { table, user, limit } => {
            let query = AuditQuery {
                table: table.clone(),
                user_id: *user,
                limit: Some(*limit),
            };
            let mut views = ViewController::new();
            let entries = views.audit(&client, &query).await?;

            let rows: Vec<AuditRow> = entries
                .iter()
                .map(|e| AuditRow {
                    fecha: format_timestamp(e.occurred_at),
                    usuario: e.actor_display().to_string(),
                    accion: e.action_display(),
                    modulo: friendly_table_name(e.table.as_deref()),
                    registro: e.record_id.clone().unwrap_or_else(|| "N/A".into()),
                    cambios: summarize_entry(e).to_string().trim_end().to_string(),
                    detalles: format_details(&e.details),
                })
                .collect();
            output::print_list(&rows, format, view_config(ViewKey::Audit).empty_message);
        }
        AuditCommand::Export { output: path, limit } => {
            let entries = client
                .list_audit(&AuditQuery {
                    table: None,
                    user_id: None,
                    limit: Some(*limit),
                })
                .await?;
            let json = serde_json::to_string_pretty(&entries)?;
            tokio::fs::write(path, json)
                .await
                .map_err(|e| AppError::storage(format!("Failed to write file: {e}")))?;
            output::print_success(&format!(
                "Exportados {} registros de auditoría a '{}'",
                entries.len(),
                path
            ));
        }
    }

    Ok(())
}
