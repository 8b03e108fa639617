//! # medialert-core
//!
//! Core crate for the MediAlert admin console. Contains configuration
//! schemas, shared list/search types, display formatting helpers, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other MediAlert crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
