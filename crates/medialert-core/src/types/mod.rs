//! Shared types used by the view and report layers.

pub mod format;
pub mod search;
pub mod sorting;

pub use format::{format_date, format_time, format_timestamp, NOT_AVAILABLE};
pub use search::SearchQuery;
pub use sorting::SortDirection;
