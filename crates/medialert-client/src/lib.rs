//! # medialert-client
//!
//! Typed REST client for the MediAlert backend. One module per backend
//! resource; all requests flow through [`ApiClient`], which owns the
//! session cookie and the error mapping for non-2xx responses.
//!
//! The backend is an external collaborator: this crate defines no wire
//! format of its own, it only normalizes the served JSON into the typed
//! records of `medialert-entity`.

pub mod alerts;
pub mod audit;
pub mod auth;
pub mod customers;
pub mod http;
pub mod insurers;
pub mod medications;
pub mod prescriptions;
pub mod reports;

pub use audit::AuditQuery;
pub use customers::CustomerQuery;
pub use http::ApiClient;
pub use medications::MedicationFilter;
