//! Domain model: salesmen, identifiers, and error taxonomy.

pub mod error;
pub mod salesman;

pub use error::{ParseError, SourceError};
pub use salesman::{InvalidSalesmanId, Salesman, SalesmanId};
