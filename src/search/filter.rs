//! Directory filtering over a postcode query.
//!
//! Owns the query normalization policy: trim, empty-means-show-all,
//! truncate to the configured maximum length. Per-area matching is
//! delegated to [`matcher`](crate::search::matcher).

use crate::config::SearchConfig;
use crate::model::Salesman;
use crate::search::matcher;

/// Filter seam used by the pipeline.
///
/// The pipeline hands each search round an immutable snapshot of the
/// directory and runs the filter off its own thread, so implementations
/// must be shareable across threads. Tests inject deliberately slow
/// implementations to exercise cancellation.
pub trait DirectoryFilter: Send + Sync {
    /// Return the salesmen whose areas match `query`, preserving order.
    fn filter(&self, salesmen: &[Salesman], query: &str) -> Vec<Salesman>;
}

/// Production filter: postcode matching with the configured truncation.
#[derive(Debug, Clone)]
pub struct PostcodeFilter {
    max_query_length: usize,
}

impl PostcodeFilter {
    /// Create a filter truncating queries to `max_query_length` characters.
    pub fn new(max_query_length: usize) -> Self {
        Self { max_query_length }
    }
}

impl Default for PostcodeFilter {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_query_length)
    }
}

impl DirectoryFilter for PostcodeFilter {
    fn filter(&self, salesmen: &[Salesman], query: &str) -> Vec<Salesman> {
        filter_salesmen(salesmen, query, self.max_query_length)
    }
}

/// Keep every salesman with at least one area matching `raw_query`.
///
/// Order-preserving relative to the input. An empty (or whitespace-only)
/// query selects everything; longer queries are truncated to
/// `max_query_length` characters before matching. Always returns, possibly
/// with an empty vector - there is no failure outcome.
pub fn filter_salesmen(
    salesmen: &[Salesman],
    raw_query: &str,
    max_query_length: usize,
) -> Vec<Salesman> {
    let trimmed = raw_query.trim();
    if trimmed.is_empty() {
        return salesmen.to_vec();
    }

    let limited: String = trimmed.chars().take(max_query_length).collect();

    salesmen
        .iter()
        .filter(|salesman| {
            salesman
                .areas
                .iter()
                .any(|area| matcher::matches_postcode(area, &limited))
        })
        .cloned()
        .collect()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
