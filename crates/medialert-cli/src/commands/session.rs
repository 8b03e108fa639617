//! Session CLI commands: login, logout, whoami.

use clap::Args;
use dialoguer::{Input, Password};

use medialert_core::error::AppError;
use medialert_entity::LoginRequest;

use crate::output::{self, OutputFormat};

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// National id (cédula); prompted for when omitted
    #[arg(long)]
    pub national_id: Option<String>,
}

/// Open a session and persist its cookie for later invocations
pub async fn login(args: &LoginArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;

    let national_id = match &args.national_id {
        Some(id) => id.clone(),
        None => Input::new()
            .with_prompt("Cédula")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?,
    };
    let password = Password::new()
        .with_prompt("Contraseña")
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))?;

    let session = client
        .login(&LoginRequest {
            national_id,
            password,
        })
        .await?;
    super::save_session(&config, &client)?;

    output::print_success(&format!(
        "Sesión iniciada como {} ({})",
        session.name, session.role
    ));
    Ok(())
}

/// Close the current session and discard the saved cookie
pub async fn logout(env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;

    // The saved cookie is discarded even if the backend call fails.
    let result = client.logout().await;
    super::discard_session(&config);
    result?;

    output::print_success("Sesión cerrada.");
    Ok(())
}

/// Show the signed-in identity
pub async fn whoami(env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let client = super::build_client(&config)?;
    let session = client.session_check().await?;

    match format {
        OutputFormat::Json => output::print_item(&session, format),
        OutputFormat::Table => {
            output::print_kv("Usuario", &session.name);
            output::print_kv("Rol", session.role.as_str());
            output::print_kv("ID", &session.user_id.to_string());
        }
    }
    Ok(())
}
