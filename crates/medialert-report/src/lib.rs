//! # medialert-report
//!
//! Report assembly for the admin dashboard: fetch one or more collections,
//! map them to printable rows, render a paginated document (title header,
//! tabular body, numbered footer), then upload the bytes and append a
//! report-log entry.
//!
//! The binary layout of a real PDF stays with an external renderer; this
//! crate renders behind the [`ReportRenderer`] trait and ships a paginated
//! plain-text implementation.

pub mod builders;
pub mod document;
pub mod publish;
pub mod text;

pub use document::{ColumnSpec, Orientation, PaperSize, RenderedReport, ReportSpec};
pub use publish::{publish_report, PublishOutcome};
pub use text::TextRenderer;

use medialert_core::result::AppResult;

/// Renders an assembled report into uploadable bytes.
pub trait ReportRenderer {
    /// File extension of the rendered format (without the dot).
    fn file_extension(&self) -> &'static str;

    /// Render the document.
    fn render(&self, spec: &ReportSpec) -> AppResult<Vec<u8>>;
}
