//! Per-view cached state.
//!
//! Each view fetches its collection once per activation and re-filters the
//! cached rows on every keystroke-equivalent query. The cache is owned by
//! the view controller and reset through [`ViewState::invalidate`] — on
//! navigation and after every successful mutation — never by rebinding
//! shared globals.

use std::future::Future;

use medialert_core::result::AppResult;

/// A fetched-once collection cache for one view.
#[derive(Debug)]
pub struct ViewState<T> {
    rows: Option<Vec<T>>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self { rows: None }
    }
}

impl<T> ViewState<T> {
    /// An unloaded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the view has fetched since the last invalidation.
    pub fn is_loaded(&self) -> bool {
        self.rows.is_some()
    }

    /// The cached rows; empty when not loaded.
    pub fn rows(&self) -> &[T] {
        self.rows.as_deref().unwrap_or(&[])
    }

    /// Drop the cache so the next access refetches.
    pub fn invalidate(&mut self) {
        self.rows = None;
    }

    /// Return the cached rows, fetching them first if the cache is cold.
    ///
    /// The fetch closure runs at most once per invalidation; a failed
    /// fetch leaves the cache cold so the next access retries.
    pub async fn ensure_with<F, Fut>(&mut self, fetch: F) -> AppResult<&[T]>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = AppResult<Vec<T>>>,
    {
        if self.rows.is_none() {
            self.rows = Some(fetch().await?);
        }
        Ok(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_fetches_once_until_invalidated() {
        let fetches = AtomicUsize::new(0);
        let mut state = ViewState::new();

        for _ in 0..3 {
            let rows = state
                .ensure_with(|| async {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2, 3])
                })
                .await
                .unwrap();
            assert_eq!(rows, &[1, 2, 3]);
        }
        assert_eq!(fetches.load(Ordering::SeqCst), 1);

        state.invalidate();
        assert!(!state.is_loaded());
        state
            .ensure_with(|| async {
                fetches.fetch_add(1, Ordering::SeqCst);
                Ok(vec![4])
            })
            .await
            .unwrap();
        assert_eq!(fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_cache_cold() {
        let mut state: ViewState<i32> = ViewState::new();
        let result = state
            .ensure_with(|| async { Err(medialert_core::AppError::internal("backend down")) })
            .await;
        assert!(result.is_err());
        assert!(!state.is_loaded());
    }
}
