//! Case-insensitive substring search over cached collections.
//!
//! Filtering never leaves the process: every view fetches its collection
//! once, then re-filters the cached rows on each keystroke-equivalent
//! invocation. The query is normalized once at construction.

use serde::{Deserialize, Serialize};

/// A normalized search needle.
///
/// The raw input is trimmed and lowercased; an empty needle matches
/// every row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Create a query from raw user input.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            needle: raw.as_ref().trim().to_lowercase(),
        }
    }

    /// The normalized needle.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether the query is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check a single candidate field.
    pub fn matches(&self, field: Option<&str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        field
            .map(|f| f.to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }

    /// Check a set of candidate fields; a row matches when any field does.
    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = Option<&'a str>>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields.into_iter().any(|f| self.matches(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_needle_matches_everything() {
        let q = SearchQuery::new("   ");
        assert!(q.is_empty());
        assert!(q.matches(None));
        assert!(q.matches_any(std::iter::empty::<Option<&str>>()));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let q = SearchQuery::new("  ANA ");
        assert!(q.matches(Some("Liliana Rojas")));
        assert!(!q.matches(Some("Pedro Pérez")));
        assert!(!q.matches(None));
    }

    #[test]
    fn test_any_field_wins() {
        let q = SearchQuery::new("1094");
        assert!(q.matches_any([Some("Ana María"), Some("10945821")]));
        assert!(!q.matches_any([Some("Ana María"), None]));
    }
}
