//! Postcode search: pattern matching and directory filtering (pure).
//!
//! Everything here is a total function over plain data, testable without
//! the pipeline or any frontend.

pub mod filter;
pub mod matcher;

pub use filter::{filter_salesmen, DirectoryFilter, PostcodeFilter};
pub use matcher::matches_postcode;
