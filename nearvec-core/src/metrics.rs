//! # Metrics
//!
//! In-process counters for monitoring store activity. Counters are atomic so
//! a snapshot can be read while the owning thread works, but the store itself
//! is not thread-safe; see the store documentation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for a nearest-vector store
#[derive(Clone, Default)]
pub struct StoreMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    vectors_added: AtomicU64,
    vectors_removed: AtomicU64,
    queries_executed: AtomicU64,
    candidates_scored: AtomicU64,
    rehash_passes: AtomicU64,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_add(&self) {
        self.inner.vectors_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_remove(&self) {
        self.inner.vectors_removed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_query(&self, candidates: u64) {
        self.inner.queries_executed.fetch_add(1, Ordering::Relaxed);
        self.inner.candidates_scored.fetch_add(candidates, Ordering::Relaxed);
    }

    pub fn record_rehash(&self) {
        self.inner.rehash_passes.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            vectors_added: self.inner.vectors_added.load(Ordering::Relaxed),
            vectors_removed: self.inner.vectors_removed.load(Ordering::Relaxed),
            queries_executed: self.inner.queries_executed.load(Ordering::Relaxed),
            candidates_scored: self.inner.candidates_scored.load(Ordering::Relaxed),
            rehash_passes: self.inner.rehash_passes.load(Ordering::Relaxed),
        }
    }
}

/// Metrics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub vectors_added: u64,
    pub vectors_removed: u64,
    pub queries_executed: u64,
    pub candidates_scored: u64,
    pub rehash_passes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let metrics = StoreMetrics::new();
        metrics.record_add();
        metrics.record_add();
        metrics.record_remove();
        metrics.record_query(12);
        metrics.record_rehash();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.vectors_added, 2);
        assert_eq!(snapshot.vectors_removed, 1);
        assert_eq!(snapshot.queries_executed, 1);
        assert_eq!(snapshot.candidates_scored, 12);
        assert_eq!(snapshot.rehash_passes, 1);
    }

    #[test]
    fn clones_share_counters() {
        let metrics = StoreMetrics::new();
        let alias = metrics.clone();
        alias.record_add();
        assert_eq!(metrics.snapshot().vectors_added, 1);
    }
}
