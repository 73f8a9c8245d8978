//! In-memory directory source with test-injection knobs.
//!
//! Stands in for the directory service: a fixed sample directory, optional
//! artificial latency, and optional failure injection. Latency and failure
//! are orthogonal knobs; a failing source still honors its delay.

use crate::config::SearchConfig;
use crate::model::{ParseError, Salesman, SalesmanId, SourceError};
use crate::search::filter_salesmen;
use crate::source::SalesmanSource;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// In-memory salesman directory.
#[derive(Debug, Clone)]
pub struct FakeSalesmanSource {
    salesmen: Vec<Salesman>,
    delay: Duration,
    fail: bool,
}

impl FakeSalesmanSource {
    /// Source holding the canonical sample directory.
    pub fn new() -> Self {
        Self::with_salesmen(sample_directory())
    }

    /// Source holding a caller-supplied directory.
    pub fn with_salesmen(salesmen: Vec<Salesman>) -> Self {
        Self {
            salesmen,
            delay: Duration::ZERO,
            fail: false,
        }
    }

    /// Decode a JSON array of salesman records.
    pub fn from_json(payload: &str) -> Result<Self, ParseError> {
        let salesmen: Vec<Salesman> =
            serde_json::from_str(payload).map_err(|err| ParseError::InvalidPayload {
                message: err.to_string(),
            })?;
        Ok(Self::with_salesmen(salesmen))
    }

    /// Add artificial latency to every fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make every fetch fail (after the configured delay).
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Source-side filtered fetch: the directory service applies the same
    /// normalization and matching as the local filter.
    pub fn fetch_matching(&self, query: &str) -> Result<Vec<Salesman>, SourceError> {
        self.sleep();
        if self.fail {
            return Err(SourceError::Corrupted);
        }
        let max_query_length = SearchConfig::default().max_query_length;
        Ok(filter_salesmen(&self.salesmen, query, max_query_length))
    }

    fn sleep(&self) {
        if self.delay > Duration::ZERO {
            thread::sleep(self.delay);
        }
    }
}

impl Default for FakeSalesmanSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesmanSource for FakeSalesmanSource {
    fn fetch_all(&self) -> Result<Vec<Salesman>, SourceError> {
        self.sleep();
        if self.fail {
            debug!("simulated directory fetch failure");
            return Err(SourceError::Network);
        }
        debug!(count = self.salesmen.len(), "directory fetched");
        Ok(self.salesmen.clone())
    }
}

/// The canonical five-salesman sample directory.
pub fn sample_directory() -> Vec<Salesman> {
    vec![
        salesman("artem-titarenko", "Artem Titarenko", &["76133"]),
        salesman("bernd-schmitt", "Bernd Schmitt", &["7619*"]),
        salesman("chris-krapp", "Chris Krapp", &["762*"]),
        salesman("alex-uber", "Alex Uber", &["86*"]),
        salesman(
            "andrii-bobchuk",
            "Andrii Bobchuk :)",
            &["860*", "44100", "33*", "8140*", "00851", "00865"],
        ),
    ]
}

fn salesman(id: &str, name: &str, areas: &[&str]) -> Salesman {
    // Sample ids are static and non-empty; the constructor cannot fail.
    let id = SalesmanId::new(id).expect("sample ids are non-empty");
    Salesman::new(id, name, areas.iter().map(|a| a.to_string()).collect())
}

// ===== Tests =====
