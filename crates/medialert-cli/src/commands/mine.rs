//! Customer dashboard CLI commands: own alerts and prescriptions.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use medialert_core::error::AppError;
use medialert_core::types::{format_date, format_time};
use medialert_entity::{Alert, UserRole};
use medialert_views::{view_config, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for the customer dashboard
#[derive(Debug, Args)]
pub struct MineArgs {
    /// Customer dashboard subcommand
    #[command(subcommand)]
    pub command: MineCommand,
}

/// Customer dashboard subcommands
#[derive(Debug, Subcommand)]
pub enum MineCommand {
    /// List your own reminders
    Alerts,
    /// Show prescription data for one of your reminders
    Prescription {
        /// Alert id; omit for the consolidated prescription
        alert_id: Option<i64>,
    },
}

/// Own-alert display row
#[derive(Debug, Serialize, Tabled)]
struct MyAlertRow {
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

impl MyAlertRow {
    fn from_alert(a: &Alert, today: chrono::NaiveDate) -> Self {
        let estado = if a.is_expired(today) && !a.status.is_active() {
            format!("{} (vencida)", a.status)
        } else {
            a.status.to_string()
        };
        Self {
            medicamento: a.medication_name.clone().unwrap_or_else(|| "N/A".into()),
            dosis: a.dose.clone().unwrap_or_else(|| "N/A".into()),
            frecuencia: a.frequency.clone().unwrap_or_else(|| "N/A".into()),
            inicio: format_date(a.start_date),
            fin: format_date(a.end_date),
            hora: format_time(a.preferred_time),
            estado,
        }
    }
}

/// Execute customer dashboard commands
pub async fn execute(args: &MineArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Customer).await?;

    match &args.command {
        MineCommand::Alerts => {
            let alerts = client.my_alerts().await?;
            let today = chrono::Utc::now().date_naive();
            let rows: Vec<MyAlertRow> = alerts
                .iter()
                .map(|a| MyAlertRow::from_alert(a, today))
                .collect();
            output::print_list(&rows, format, view_config(ViewKey::MyAlerts).empty_message);
        }
        MineCommand::Prescription { alert_id } => match alert_id {
            Some(id) => {
                let receta = client.prescription_for_alert(*id).await?;
                match format {
                    OutputFormat::Json => output::print_item(&receta, format),
                    OutputFormat::Table => {
                        output::print_kv("Paciente", &receta.customer_name);
                        output::print_kv("Cédula", &receta.customer_national_id);
                        output::print_kv("Medicamento", &receta.medication_name);
                        output::print_kv("Dosis", receta.dose.as_deref().unwrap_or("N/A"));
                        output::print_kv(
                            "Frecuencia",
                            receta.frequency.as_deref().unwrap_or("N/A"),
                        );
                        output::print_kv("Inicio", &format_date(receta.start_date));
                        output::print_kv("Fin", &format_date(receta.end_date));
                        output::print_kv(
                            "Indicaciones",
                            receta.medication_indications.as_deref().unwrap_or("N/A"),
                        );
                        output::print_kv(
                            "EPS",
                            receta.insurer_name.as_deref().unwrap_or("N/A"),
                        );
                        output::print_kv(
                            "Prescrito por",
                            receta.assigner_name.as_deref().unwrap_or("N/A"),
                        );
                    }
                }
            }
            None => {
                let recetas = client.my_prescriptions().await?;
                if recetas.is_empty() {
                    output::print_warning(
                        "No hay alertas activas para generar una receta consolidada.",
                    );
                    return Ok(());
                }
                for receta in &recetas {
                    output::print_kv(
                        &receta.medication_name,
                        &format!(
                            "{} — {}",
                            receta.dose.as_deref().unwrap_or("N/A"),
                            receta.frequency.as_deref().unwrap_or("N/A")
                        ),
                    );
                }
            }
        },
    }

    Ok(())
}
