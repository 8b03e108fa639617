//! Reminder (alert) management CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use medialert_core::error::AppError;
use medialert_core::types::{format_date, format_time, SearchQuery};
use medialert_entity::{Alert, AlertStatus, CreateAlert, UpdateAlert, UserRole};
use medialert_views::{view_config, ViewController, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for alert commands
#[derive(Debug, Args)]
pub struct AlertsArgs {
    /// Alert subcommand
    #[command(subcommand)]
    pub command: AlertsCommand,
}

/// Alert subcommands
#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List reminders, filtered client-side by customer or medication
    List {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Per-customer reminder rollup
    Grouped {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one reminder in full
    Show {
        /// Alert id
        id: i64,
    },
    /// Assign a new reminder
    Create {
        /// Target customer id
        #[arg(long)]
        customer: i64,
        /// Medication id
        #[arg(long)]
        medication: i64,
        /// Dose instructions
        #[arg(long)]
        dose: Option<String>,
        /// Frequency instructions
        #[arg(long)]
        frequency: Option<String>,
        /// First day of treatment (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of treatment (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Preferred reminder time (HH:MM:SS)
        #[arg(long)]
        time: Option<NaiveTime>,
        /// Initial status (defaults to activa)
        #[arg(long)]
        status: Option<AlertStatus>,
    },
    /// Update fields of an existing reminder
    Update {
        /// Alert id
        id: i64,
        /// New dose instructions
        #[arg(long)]
        dose: Option<String>,
        /// New frequency instructions
        #[arg(long)]
        frequency: Option<String>,
        /// New start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// New end date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<NaiveDate>,
        /// New preferred time (HH:MM:SS)
        #[arg(long)]
        time: Option<NaiveTime>,
        /// New lifecycle status
        #[arg(long)]
        status: Option<AlertStatus>,
    },
    /// Delete a reminder
    Delete {
        /// Alert id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Alert display row
#[derive(Debug, Serialize, Tabled)]
struct AlertRow {
    /// ID
    id: i64,
    /// Cliente
    cliente: String,
    /// Cédula
    cedula: String,
    /// Medicamento
    medicamento: String,
    /// Dosis
    dosis: String,
    /// Frecuencia
    frecuencia: String,
    /// Inicio
    inicio: String,
    /// Fin
    fin: String,
    /// Hora Pref.
    hora: String,
    /// Estado
    estado: String,
}

impl From<&Alert> for AlertRow {
    fn from(a: &Alert) -> Self {
        Self {
            id: a.id,
            cliente: a.customer_name.clone().unwrap_or_else(|| "N/A".into()),
            cedula: a
                .customer_national_id
                .clone()
                .unwrap_or_else(|| "N/A".into()),
            medicamento: a.medication_name.clone().unwrap_or_else(|| "N/A".into()),
            dosis: a.dose.clone().unwrap_or_else(|| "N/A".into()),
            frecuencia: a.frequency.clone().unwrap_or_else(|| "N/A".into()),
            inicio: format_date(a.start_date),
            fin: format_date(a.end_date),
            hora: format_time(a.preferred_time),
            estado: a.status.to_string(),
        }
    }
}

/// Grouped display row
#[derive(Debug, Serialize, Tabled)]
struct GroupedRow {
    /// ID
    id: i64,
    /// Cliente
    cliente: String,
    /// Cédula
    cedula: String,
    /// Estado
    estado: String,
    /// Activas
    activas: i64,
    /// Total
    total: i64,
}

/// Execute alert commands
pub async fn execute(args: &AlertsArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Admin).await?;

    match &args.command {
        AlertsCommand::List { search } => {
            let mut views = ViewController::new();
            let rows = views.alerts(&client, &SearchQuery::new(search)).await?;
            let display: Vec<AlertRow> = rows.iter().map(|a| AlertRow::from(*a)).collect();
            output::print_list(&display, format, view_config(ViewKey::Alerts).empty_message);
        }
        AlertsCommand::Grouped { search } => {
            let mut views = ViewController::new();
            let rows = views
                .grouped_alerts(&client, &SearchQuery::new(search))
                .await?;
            let display: Vec<GroupedRow> = rows
                .iter()
                .map(|g| GroupedRow {
                    id: g.customer_id,
                    cliente: g.customer_name.clone(),
                    cedula: g.national_id.clone(),
                    estado: g.customer_status.to_string(),
                    activas: g.active_alerts,
                    total: g.total_alerts,
                })
                .collect();
            output::print_list(
                &display,
                format,
                view_config(ViewKey::AlertsGrouped).empty_message,
            );
        }
        AlertsCommand::Show { id } => {
            let alert = client.get_alert(*id).await?;
            match format {
                OutputFormat::Json => output::print_item(&alert, format),
                OutputFormat::Table => {
                    output::print_kv(
                        "Cliente",
                        &alert
                            .customer_id
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "N/A".into()),
                    );
                    output::print_kv(
                        "Medicamento",
                        &alert
                            .medication_id
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "N/A".into()),
                    );
                    output::print_kv("Dosis", alert.dose.as_deref().unwrap_or("N/A"));
                    output::print_kv("Frecuencia", alert.frequency.as_deref().unwrap_or("N/A"));
                    output::print_kv("Inicio", &format_date(alert.start_date));
                    output::print_kv("Fin", &format_date(alert.end_date));
                    output::print_kv("Hora Pref.", &format_time(alert.preferred_time));
                    output::print_kv("Estado", alert.status.as_str());
                }
            }
        }
        AlertsCommand::Create {
            customer,
            medication,
            dose,
            frequency,
            start,
            end,
            time,
            status,
        } => {
            let payload = CreateAlert {
                customer_id: *customer,
                medication_id: *medication,
                dose: dose.clone(),
                frequency: frequency.clone(),
                start_date: *start,
                end_date: *end,
                preferred_time: *time,
                status: *status,
            };
            payload
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let id = client.create_alert(&payload).await?;
            output::print_success(&format!("Alerta creada con éxito (id {id})."));
        }
        AlertsCommand::Update {
            id,
            dose,
            frequency,
            start,
            end,
            time,
            status,
        } => {
            let payload = UpdateAlert {
                dose: dose.clone(),
                frequency: frequency.clone(),
                start_date: *start,
                end_date: *end,
                preferred_time: *time,
                status: *status,
                ..UpdateAlert::default()
            };
            let message = client.update_alert(*id, &payload).await?;
            output::print_success(&message);
        }
        AlertsCommand::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("¿Eliminar la alerta {id}?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                if !confirmed {
                    output::print_warning("Operación cancelada.");
                    return Ok(());
                }
            }
            let message = client.delete_alert(*id).await?;
            output::print_success(&message);
        }
    }

    Ok(())
}
