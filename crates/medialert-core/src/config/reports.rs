//! Report generation configuration.

use serde::{Deserialize, Serialize};

/// Settings for locally rendered reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Directory where generated reports are also saved locally.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Table rows per rendered page.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            rows_per_page: default_rows_per_page(),
        }
    }
}

fn default_output_dir() -> String {
    "data/reports".to_string()
}

fn default_rows_per_page() -> usize {
    40
}
