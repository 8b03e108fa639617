//! CLI command definitions and dispatch.

pub mod account;
pub mod alerts;
pub mod audit;
pub mod customers;
pub mod medications;
pub mod mine;
pub mod reports;
pub mod session;

use clap::{Parser, Subcommand};

use medialert_client::ApiClient;
use medialert_core::config::AppConfig;
use medialert_core::error::AppError;
use medialert_entity::UserRole;

use crate::output::OutputFormat;

/// MediAlert — Medication Reminder Administration
#[derive(Debug, Parser)]
#[command(name = "medialert", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (config/<env>.toml overlay)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open a session against the backend
    Login(session::LoginArgs),
    /// Close the current session
    Logout,
    /// Show the signed-in identity
    Whoami,
    /// Customer management (admin)
    Customers(customers::CustomersArgs),
    /// Medication catalog management (admin)
    Medications(medications::MedicationsArgs),
    /// Reminder management (admin)
    Alerts(alerts::AlertsArgs),
    /// Audit trail (admin)
    Audit(audit::AuditArgs),
    /// Report generation and history (admin)
    Reports(reports::ReportsArgs),
    /// Account settings for the signed-in user
    Account(account::AccountArgs),
    /// Customer dashboard: own alerts and prescriptions
    Mine(mine::MineArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => session::login(args, &self.env).await,
            Commands::Logout => session::logout(&self.env).await,
            Commands::Whoami => session::whoami(&self.env, self.format).await,
            Commands::Customers(args) => customers::execute(args, &self.env, self.format).await,
            Commands::Medications(args) => {
                medications::execute(args, &self.env, self.format).await
            }
            Commands::Alerts(args) => alerts::execute(args, &self.env, self.format).await,
            Commands::Audit(args) => audit::execute(args, &self.env, self.format).await,
            Commands::Reports(args) => reports::execute(args, &self.env, self.format).await,
            Commands::Account(args) => account::execute(args, &self.env, self.format).await,
            Commands::Mine(args) => mine::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the given environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: build an API client with the saved session restored
pub fn build_client(config: &AppConfig) -> Result<ApiClient, AppError> {
    let client = ApiClient::new(&config.api)?;
    if let Ok(token) = std::fs::read_to_string(&config.api.session_file) {
        let token = token.trim();
        if !token.is_empty() {
            client.set_session_token(Some(token.to_string()));
        }
    }
    Ok(client)
}

/// Helper: persist the current session cookie for later invocations
pub fn save_session(config: &AppConfig, client: &ApiClient) -> Result<(), AppError> {
    match client.session_token() {
        Some(token) => {
            if let Some(parent) = std::path::Path::new(&config.api.session_file).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config.api.session_file, token)?;
            Ok(())
        }
        None => Err(AppError::session(
            "El backend no estableció una cookie de sesión.",
        )),
    }
}

/// Helper: drop the persisted session cookie
pub fn discard_session(config: &AppConfig) {
    let _ = std::fs::remove_file(&config.api.session_file);
}

/// Helper: verify the session and require the given role
pub async fn require_role(client: &ApiClient, role: UserRole) -> Result<(), AppError> {
    let session = client
        .session_check()
        .await
        .map_err(|e| AppError::session(format!("Sesión no válida o expirada: {}", e.message)))?;
    if session.role != role {
        return Err(AppError::session(format!(
            "Acceso denegado: se requiere el rol '{role}'."
        )));
    }
    Ok(())
}
