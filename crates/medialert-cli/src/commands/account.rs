//! Account settings CLI commands (any signed-in role).

use clap::{Args, Subcommand};
use dialoguer::Password;
use validator::Validate;

use medialert_core::error::AppError;
use medialert_core::types::format_date;
use medialert_entity::ChangePasswordRequest;

use crate::output::{self, OutputFormat};

/// Arguments for account commands
#[derive(Debug, Args)]
pub struct AccountArgs {
    /// Account subcommand
    #[command(subcommand)]
    pub command: AccountCommand,
}

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Show the signed-in user's profile
    Show,
    /// Change the signed-in user's password (prompted)
    ChangePassword,
}

/// Execute account commands
pub async fn execute(args: &AccountArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;

    match &args.command {
        AccountCommand::Show => {
            let profile = client.own_profile().await?;
            match format {
                OutputFormat::Json => output::print_item(&profile, format),
                OutputFormat::Table => {
                    output::print_kv("Nombre", &profile.name);
                    output::print_kv("Cédula", &profile.national_id);
                    output::print_kv("Email", &profile.email);
                    output::print_kv("Rol", profile.role.as_str());
                    output::print_kv("Estado", profile.status.as_str());
                    output::print_kv("Nacimiento", &format_date(profile.birth_date));
                    output::print_kv("EPS", profile.insurer_name.as_deref().unwrap_or("N/A"));
                }
            }
        }
        AccountCommand::ChangePassword => {
            let current_password = Password::new()
                .with_prompt("Contraseña actual")
                .interact()
                .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
            let new_password = Password::new()
                .with_prompt("Nueva contraseña")
                .interact()
                .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;
            let confirmation = Password::new()
                .with_prompt("Confirmar nueva contraseña")
                .interact()
                .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

            let request = ChangePasswordRequest {
                current_password,
                new_password,
                confirmation,
            };
            if !request.confirmation_matches() {
                return Err(AppError::validation(
                    "La nueva contraseña y su confirmación no coinciden.",
                ));
            }
            request
                .validate()
                .map_err(|e| AppError::validation(e.to_string()))?;

            let message = client.change_password(&request).await?;
            output::print_success(&message);
        }
    }

    Ok(())
}
