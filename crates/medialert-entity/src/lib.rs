//! # medialert-entity
//!
//! Domain records exchanged with the MediAlert REST backend.
//!
//! The backend serves JSON with Spanish field names; every struct here
//! normalizes those to typed Rust records at the boundary via
//! `#[serde(rename)]`, so nothing downstream touches loosely-typed
//! payloads. The only deliberately loose fields are the audit snapshots,
//! which the backend itself stores as free-form JSON.

pub mod alert;
pub mod audit;
pub mod customer;
pub mod insurer;
pub mod medication;
pub mod prescription;
pub mod report;
pub mod session;

pub use alert::{Alert, AlertStatus, CreateAlert, CustomerAlertSummary, UpdateAlert};
pub use audit::AuditLogEntry;
pub use customer::{CreateCustomer, Customer, CustomerStatus, UpdateCustomer, UserRole};
pub use insurer::Insurer;
pub use medication::{CreateMedication, Medication, MedicationStatus, UpdateMedication};
pub use prescription::PrescriptionRow;
pub use report::{CreateReportLog, ReportLogEntry};
pub use session::{ChangePasswordRequest, LoginRequest, SessionInfo};
