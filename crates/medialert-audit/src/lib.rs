//! # medialert-audit
//!
//! Turns a pair of loosely-typed before/after audit snapshots into a
//! human-readable change summary.
//!
//! Snapshots arrive from the backend as free-form JSON: an object, a
//! JSON-encoded *string*, or null. Normalization never fails — anything
//! unusable degrades to an empty snapshot — and excluded keys (passwords
//! and bookkeeping timestamps) never reach the output.

pub mod snapshot;
pub mod summary;
pub mod tables;
pub mod value;

pub use snapshot::Snapshot;
pub use summary::{generate_change_summary, ActionKind, ChangeLine, ChangeSummary};
pub use tables::friendly_table_name;
pub use value::{format_details, format_value};

use medialert_entity::AuditLogEntry;

/// Summarize one audit entry as served by the backend.
pub fn summarize_entry(entry: &AuditLogEntry) -> ChangeSummary {
    generate_change_summary(&entry.action, &entry.old_data, &entry.new_data)
}
