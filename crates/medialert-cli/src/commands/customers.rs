//! Customer management CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{Confirm, Password};
use serde::Serialize;
use tabled::Tabled;
use validator::Validate;

use medialert_core::error::AppError;
use medialert_core::types::{format_date, SearchQuery};
use medialert_entity::{CreateCustomer, Customer, CustomerStatus, UpdateCustomer, UserRole};
use medialert_views::{view_config, ViewController, ViewKey};

use crate::output::{self, OutputFormat};

/// Arguments for customer commands
#[derive(Debug, Args)]
pub struct CustomersArgs {
    /// Customer subcommand
    #[command(subcommand)]
    pub command: CustomersCommand,
}

/// Customer subcommands
#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers, filtered client-side by name or national id
    List {
        /// Case-insensitive substring filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Show one customer in full
    Show {
        /// Customer id
        id: i64,
    },
    /// Register a new customer (password is prompted)
    Create {
        /// Full name
        #[arg(long)]
        name: String,
        /// National id (cédula)
        #[arg(long)]
        national_id: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        /// Phone number
        #[arg(long)]
        phone: Option<String>,
        /// City
        #[arg(long)]
        city: Option<String>,
        /// Insurer (EPS) id; see `medialert customers insurers`
        #[arg(long)]
        insurer: Option<i64>,
    },
    /// Update fields of an existing customer
    Update {
        /// Customer id
        id: i64,
        /// New full name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
        /// New city
        #[arg(long)]
        city: Option<String>,
        /// New insurer (EPS) id
        #[arg(long)]
        insurer: Option<i64>,
        /// Prompt for a replacement password
        #[arg(long)]
        new_password: bool,
    },
    /// Deactivate a customer account
    Deactivate {
        /// Customer id
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Reactivate a customer account
    Reactivate {
        /// Customer id
        id: i64,
    },
    /// List health insurers (EPS) for the create/update forms
    Insurers,
}

/// Customer display row
#[derive(Debug, Serialize, Tabled)]
struct CustomerRow {
    /// ID
    id: i64,
    /// Nombre
    nombre: String,
    /// Cédula
    cedula: String,
    /// Email
    email: String,
    /// Ciudad
    ciudad: String,
    /// EPS
    eps: String,
    /// Estado
    estado: String,
}

impl From<&Customer> for CustomerRow {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id,
            nombre: c.name.clone(),
            cedula: c.national_id.clone(),
            email: c.email.clone(),
            ciudad: c.city.clone().unwrap_or_else(|| "N/A".into()),
            eps: c.insurer_name.clone().unwrap_or_else(|| "N/A".into()),
            estado: c.status.to_string(),
        }
    }
}

/// Execute customer commands
pub async fn execute(
    args: &CustomersArgs,
    env: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    super::require_role(&client, UserRole::Admin).await?;

    match &args.command {
        CustomersCommand::List { search } => {
            let mut views = ViewController::new();
            let rows = views.customers(&client, &SearchQuery::new(search)).await?;
            let display: Vec<CustomerRow> = rows.iter().map(|c| CustomerRow::from(*c)).collect();
            output::print_list(
                &display,
                format,
                view_config(ViewKey::Customers).empty_message,
            );
        }
        CustomersCommand::Show { id } => {
            let customer = client.get_customer(*id).await?;
            match format {
                OutputFormat::Json => output::print_item(&customer, format),
                OutputFormat::Table => {
                    output::print_kv("Nombre", &customer.name);
                    output::print_kv("Cédula", &customer.national_id);
                    output::print_kv("Email", &customer.email);
                    output::print_kv("Estado", customer.status.as_str());
                    output::print_kv("Nacimiento", &format_date(customer.birth_date));
                    output::print_kv("Teléfono", customer.phone.as_deref().unwrap_or("N/A"));
                    output::print_kv("Ciudad", customer.city.as_deref().unwrap_or("N/A"));
                    output::print_kv("EPS", customer.insurer_name.as_deref().unwrap_or("N/A"));
                    output::print_kv("Registro", &format_date(customer.registered_on));
                }
            }
        }
        CustomersCommand::Create {
            name,
            national_id,
            email,
            birth_date,
            phone,
            city,
            insurer,
        } => {
            let password = Password::new()
                .with_prompt("Contraseña del nuevo cliente")
                .with_confirmation("Confirmar contraseña", "Las contraseñas no coinciden")
                .interact()
                .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

            let payload = CreateCustomer {
                name: name.clone(),
                national_id: national_id.clone(),
                email: email.clone(),
                password,
                birth_date: *birth_date,
                phone: phone.clone(),
                city: city.clone(),
                insurer_id: *insurer,
            };
            payload
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let id = client.create_customer(&payload).await?;
            output::print_success(&format!("Cliente creado con éxito (id {id})."));
        }
        CustomersCommand::Update {
            id,
            name,
            email,
            birth_date,
            phone,
            city,
            insurer,
            new_password,
        } => {
            let password = if *new_password {
                Some(
                    Password::new()
                        .with_prompt("Nueva contraseña")
                        .with_confirmation("Confirmar contraseña", "Las contraseñas no coinciden")
                        .interact()
                        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?,
                )
            } else {
                None
            };

            let payload = UpdateCustomer {
                name: name.clone(),
                email: email.clone(),
                birth_date: *birth_date,
                phone: phone.clone(),
                city: city.clone(),
                insurer_id: *insurer,
                new_password: password,
                ..UpdateCustomer::default()
            };
            payload
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let message = client.update_customer(*id, &payload).await?;
            output::print_success(&message);
        }
        CustomersCommand::Deactivate { id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("¿Desactivar el cliente {id}?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
                if !confirmed {
                    output::print_warning("Operación cancelada.");
                    return Ok(());
                }
            }
            let message = client
                .set_customer_status(*id, CustomerStatus::Inactive)
                .await?;
            output::print_success(&message);
        }
        CustomersCommand::Reactivate { id } => {
            let message = client
                .set_customer_status(*id, CustomerStatus::Active)
                .await?;
            output::print_success(&message);
        }
        CustomersCommand::Insurers => {
            let insurers = client.list_insurers().await?;
            for insurer in &insurers {
                output::print_kv(&insurer.id.to_string(), &insurer.name);
            }
            if insurers.is_empty() {
                output::print_warning("No hay EPS activas registradas.");
            }
        }
    }

    Ok(())
}
