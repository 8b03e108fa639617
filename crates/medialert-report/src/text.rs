//! Paginated plain-text rendering.
//!
//! Lays out the same three bands the original reports carry — brand/title
//! header, tabular body, footer with generation timestamp and
//! `Página N de M` — without committing to a binary page format.

use chrono::{DateTime, Utc};

use medialert_core::result::AppResult;

use crate::document::{ColumnSpec, ReportSpec};
use crate::ReportRenderer;

/// Brand line shown on every page header.
const BRAND_LINE: &str = "MediAlert - Reporte Interno";

/// Plain-text renderer with a fixed number of table rows per page.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    rows_per_page: usize,
    /// Generation timestamp stamped into every footer.
    generated_at: DateTime<Utc>,
}

impl TextRenderer {
    /// Create a renderer.
    pub fn new(rows_per_page: usize, generated_at: DateTime<Utc>) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            generated_at,
        }
    }

    fn column_widths(&self, spec: &ReportSpec) -> Vec<usize> {
        let line_width = spec.line_width();
        // One separator space between columns.
        let available = line_width.saturating_sub(spec.columns.len().saturating_sub(1));
        let total_weight: u32 = spec.columns.iter().map(|c| c.weight).sum();
        spec.columns
            .iter()
            .map(|c| {
                let w = (available as u64 * c.weight as u64 / total_weight.max(1) as u64) as usize;
                w.max(4)
            })
            .collect()
    }

    fn format_row(cells: &[String], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            line.push_str(&fit(cell, *width));
        }
        line.trim_end().to_string()
    }

    fn page_header(&self, spec: &ReportSpec, out: &mut String) {
        let width = spec.line_width();
        out.push_str(&center(BRAND_LINE, width));
        out.push('\n');
        out.push_str(&center(&spec.title, width));
        out.push('\n');
        out.push_str(&"=".repeat(width));
        out.push('\n');
    }

    fn page_footer(&self, spec: &ReportSpec, page: usize, pages: usize, out: &mut String) {
        let width = spec.line_width();
        out.push_str(&"-".repeat(width));
        out.push('\n');
        let left = format!(
            "Generado: {}",
            self.generated_at.format("%d/%m/%Y %H:%M")
        );
        let right = format!("Página {page} de {pages}");
        let padding = width.saturating_sub(left.chars().count() + right.chars().count());
        out.push_str(&left);
        out.push_str(&" ".repeat(padding.max(1)));
        out.push_str(&right);
        out.push('\n');
    }
}

impl ReportRenderer for TextRenderer {
    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, spec: &ReportSpec) -> AppResult<Vec<u8>> {
        let widths = self.column_widths(spec);
        let header_cells: Vec<String> = spec
            .columns
            .iter()
            .map(|c: &ColumnSpec| c.header.clone())
            .collect();

        let pages = spec.rows.len().div_ceil(self.rows_per_page).max(1);
        let mut out = String::new();

        for page in 1..=pages {
            if page > 1 {
                out.push('\n');
            }
            self.page_header(spec, &mut out);
            out.push_str(&Self::format_row(&header_cells, &widths));
            out.push('\n');
            out.push_str(&"-".repeat(spec.line_width()));
            out.push('\n');

            let start = (page - 1) * self.rows_per_page;
            let end = (start + self.rows_per_page).min(spec.rows.len());
            for row in &spec.rows[start..end] {
                out.push_str(&Self::format_row(row, &widths));
                out.push('\n');
            }
            self.page_footer(spec, page, pages, &mut out);
        }

        Ok(out.into_bytes())
    }
}

/// Pad or truncate a cell to exactly `width` characters.
fn fit(cell: &str, width: usize) -> String {
    let count = cell.chars().count();
    if count == width {
        cell.to_string()
    } else if count < width {
        format!("{cell}{}", " ".repeat(width - count))
    } else if width > 1 {
        let mut s: String = cell.chars().take(width - 1).collect();
        s.push('…');
        s
    } else {
        cell.chars().take(width).collect()
    }
}

fn center(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count >= width {
        return text.to_string();
    }
    let left = (width - count) / 2;
    format!("{}{}", " ".repeat(left), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Orientation, PaperSize};
    use chrono::TimeZone;

    fn spec(rows: usize) -> ReportSpec {
        ReportSpec {
            title: "Reporte de Prueba".into(),
            filename_stem: "Reporte_Prueba".into(),
            log_kind: None,
            orientation: Orientation::Portrait,
            paper: PaperSize::A4,
            columns: vec![ColumnSpec::new("Nombre", 2), ColumnSpec::new("Estado", 1)],
            rows: (0..rows)
                .map(|i| vec![format!("Fila {i}"), "activa".to_string()])
                .collect(),
        }
    }

    fn renderer(rows_per_page: usize) -> TextRenderer {
        let ts = Utc.with_ymd_and_hms(2024, 5, 14, 10, 30, 0).unwrap();
        TextRenderer::new(rows_per_page, ts)
    }

    #[test]
    fn test_single_page_footer() {
        let bytes = renderer(10).render(&spec(3)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Página 1 de 1"));
        assert!(text.contains("Generado: 14/05/2024 10:30"));
        assert!(text.contains("Reporte de Prueba"));
    }

    #[test]
    fn test_rows_split_across_pages() {
        let bytes = renderer(10).render(&spec(25)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Página 1 de 3"));
        assert!(text.contains("Página 3 de 3"));
        // Every page repeats the header band.
        assert_eq!(text.matches(BRAND_LINE).count(), 3);
        // Every data row survived pagination.
        for i in 0..25 {
            assert!(text.contains(&format!("Fila {i}")), "missing row {i}");
        }
    }

    #[test]
    fn test_empty_report_still_renders_one_page() {
        let bytes = renderer(10).render(&spec(0)).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("Página 1 de 1"));
    }

    #[test]
    fn test_long_cells_are_truncated_with_ellipsis() {
        let mut s = spec(1);
        s.rows[0][0] = "x".repeat(500);
        let bytes = renderer(10).render(&s).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains('…'));
        let max_line = text.lines().map(|l| l.chars().count()).max().unwrap();
        assert!(max_line <= s.line_width());
    }
}
