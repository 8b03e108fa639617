//! Medication catalog CLI commands.

use clap::{Args, Subcommand};
use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use medialert_core::error::AppError;
use medialert_core::types::SearchQuery;
use medialert_entity::{
    CreateMedication, Medication, MedicationStatus, UpdateMedication, UserRole,
};
use medialert_views::{view_config, ViewController, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for medication commands
#[derive(Debug, Args)]
pub struct MedicationsArgs {
    /// Medication subcommand
    #[command(subcommand)]
    pub command: MedicationsCommand,
}

/// Medication subcommands
#[derive(Debug, Subcommand)]
pub enum MedicationsCommand {
    /// List the catalog, filtered client-side by name or description
    List {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one medication in full
    Show {
        /// Medication id
        id: i64,
    },
    /// Add a medication to the catalog
    Create {
        /// Commercial name
        #[arg(long)]
        name: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Composition
        #[arg(long)]
        composition: Option<String>,
        /// Side effects
        #[arg(long)]
        side_effects: Option<String>,
        /// Indications
        #[arg(long)]
        indications: Option<String>,
        /// Recommended age range
        #[arg(long)]
        age_range: Option<String>,
    },
    /// Update fields of an existing medication
    Update {
        /// Medication id
        id: i64,
        /// New commercial name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New composition
        #[arg(long)]
        composition: Option<String>,
        /// New side effects
        #[arg(long)]
        side_effects: Option<String>,
        /// New indications
        #[arg(long)]
        indications: Option<String>,
        /// New age range
        #[arg(long)]
        age_range: Option<String>,
    },
    /// Withdraw a medication from the catalog
    Discontinue {
        /// Medication id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Return a discontinued medication to the catalog
    Reactivate {
        /// Medication id
        id: i64,
    },
}

/// Medication display row
#[derive(Debug, Serialize, Tabled)]
struct MedicationRow {
    /// ID
    id: i64,
    /// Nombre
    nombre: String,
    /// Descripción
    descripcion: String,
    /// Composición
    composicion: String,
    /// Rango Edad
    rango_edad: String,
    /// Estado
    estado: String,
}

impl From<&Medication> for MedicationRow {
    fn from(m: &Medication) -> Self {
        Self {
            id: m.id,
            nombre: m.name.clone(),
            descripcion: m.description.clone().unwrap_or_else(|| "N/A".into()),
            composicion: m.composition.clone().unwrap_or_else(|| "N/A".into()),
            rango_edad: m.age_range.clone().unwrap_or_else(|| "N/A".into()),
            estado: m.status.to_string(),
        }
    }
}

/// Execute medication commands
pub async fn execute(
    args: &MedicationsArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Admin).await?;

    match &args.command {
        MedicationsCommand::List { search } => {
            let mut views = ViewController::new();
            let rows = views
                .medications(&client, &SearchQuery::new(search))
                .await?;
            let display: Vec<MedicationRow> =
                rows.iter().map(|m| MedicationRow::from(*m)).collect();
            output::print_list(
                &display,
                format,
                view_config(ViewKey::Medications).empty_message,
            );
        }
        MedicationsCommand::Show { id } => {
            let medication = client.get_medication(*id).await?;
            match format {
                OutputFormat::Json => output::print_item(&medication, format),
                OutputFormat::Table => {
                    output::print_kv("Nombre", &medication.name);
                    output::print_kv(
                        "Descripción",
                        medication.description.as_deref().unwrap_or("N/A"),
                    );
                    output::print_kv(
                        "Composición",
                        medication.composition.as_deref().unwrap_or("N/A"),
                    );
                    output::print_kv(
                        "Síntomas Secundarios",
                        medication.side_effects.as_deref().unwrap_or("N/A"),
                    );
                    output::print_kv(
                        "Indicaciones",
                        medication.indications.as_deref().unwrap_or("N/A"),
                    );
                    output::print_kv(
                        "Rango Edad",
                        medication.age_range.as_deref().unwrap_or("N/A"),
                    );
                    output::print_kv("Estado", medication.status.as_str());
                }
            }
        }
        MedicationsCommand::Create {
            name,
            description,
            composition,
            side_effects,
            indications,
            age_range,
        } => {
            let payload = CreateMedication {
                name: name.clone(),
                description: description.clone(),
                composition: composition.clone(),
                side_effects: side_effects.clone(),
                indications: indications.clone(),
                age_range: age_range.clone(),
            };
            payload
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let id = client.create_medication(&payload).await?;
            output::print_success(&format!("Medicamento creado con éxito (id {id})."));
        }
        MedicationsCommand::Update {
            id,
            name,
            description,
            composition,
            side_effects,
            indications,
            age_range,
        } => {
            let payload = UpdateMedication {
                name: name.clone(),
                description: description.clone(),
                composition: composition.clone(),
                side_effects: side_effects.clone(),
                indications: indications.clone(),
                age_range: age_range.clone(),
                status: None,
            };
            let message = client.update_medication(*id, &payload).await?;
            output::print_success(&message);
        }
        MedicationsCommand::Discontinue { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "¿Discontinuar el medicamento {id}? Las alertas asociadas lo seguirán mostrando."
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                if !confirmed {
                    output::print_warning("Operación cancelada.");
                    return Ok(());
                }
            }
            let message = client
                .set_medication_status(*id, MedicationStatus::Discontinued)
                .await?;
            output::print_success(&message);
        }
        MedicationsCommand::Reactivate { id } => {
            let message = client
                .set_medication_status(*id, MedicationStatus::Available)
                .await?;
            output::print_success(&message);
        }
    }

    Ok(())
}
