//! Backend API connection configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the MediAlert REST backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (e.g. `http://localhost:5000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Path of the file holding the saved session cookie between runs.
    #[serde(default = "default_session_file")]
    pub session_file: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            session_file: default_session_file(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_session_file() -> String {
    "data/session".to_string()
}
