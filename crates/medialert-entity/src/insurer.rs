//! Health-insurer (EPS) lookup records.

use serde::{Deserialize, Serialize};

/// A health insurer a customer can be affiliated with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insurer {
    /// Unique insurer identifier.
    pub id: i64,
    /// Insurer name.
    #[serde(rename = "nombre")]
    pub name: String,
}
