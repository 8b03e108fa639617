//! # medialert-views
//!
//! View-layer logic shared by the dashboards: per-view cached state with
//! explicit invalidation, pure client-side filtering and sorting, and the
//! declarative view-configuration table the renderers consume.
//!
//! Nothing here talks to the terminal; the CLI renders what these
//! controllers return.

pub mod config;
pub mod controller;
pub mod filter;
pub mod sort;
pub mod state;

pub use config::{view_config, ViewConfig, ViewKey};
pub use controller::ViewController;
pub use filter::{filter_rows, Searchable};
pub use sort::{sort_by_status_then_name, StatusGrouped};
pub use state::ViewState;
