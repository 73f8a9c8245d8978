//! Directory data sources.
//!
//! The search core consumes a single boundary: fetch the full salesman
//! directory, or fail. Latency and failure are properties of concrete
//! sources, not of the contract.

pub mod fake;

pub use fake::{sample_directory, FakeSalesmanSource};

use crate::model::{Salesman, SourceError};

/// Boundary to whatever supplies the salesman directory.
///
/// `fetch_all` blocks until the directory is available; the pipeline calls
/// it from a helper thread and serializes the outcome through its mailbox,
/// so implementations need no internal concurrency.
pub trait SalesmanSource: Send + Sync {
    /// Fetch the complete directory.
    fn fetch_all(&self) -> Result<Vec<Salesman>, SourceError>;
}
