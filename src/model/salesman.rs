//! Salesman record and identifier newtype.
//!
//! The identifier validates non-empty strings at construction time.
//! The raw constructor is never exported - use the smart constructor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a salesman.
///
/// Round-trips through serde as a plain string; the empty string is
/// rejected on deserialization just as it is at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SalesmanId(String);

impl SalesmanId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidSalesmanId> {
        let s = raw.into();
        if s.is_empty() {
            Err(InvalidSalesmanId::Empty)
        } else {
            Ok(Self(s))
        }
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SalesmanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SalesmanId {
    type Error = InvalidSalesmanId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<SalesmanId> for String {
    fn from(id: SalesmanId) -> Self {
        id.0
    }
}

/// Error returned by the [`SalesmanId`] smart constructor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidSalesmanId {
    /// Identifiers must be non-empty.
    #[error("Salesman ID cannot be empty")]
    Empty,
}

/// A field sales agent and the postcode areas they cover.
///
/// Immutable once constructed; created by the data source and owned by the
/// directory state after a load completes. `areas` holds coverage patterns
/// in assignment order: exact codes (`"76133"`) or wildcard prefixes
/// (`"762*"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salesman {
    /// Unique identifier, assigned by the data source.
    pub id: SalesmanId,
    /// Display name.
    pub name: String,
    /// Assigned coverage patterns, in assignment order.
    pub areas: Vec<String>,
}

impl Salesman {
    /// Create a salesman record.
    pub fn new(id: SalesmanId, name: impl Into<String>, areas: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            areas,
        }
    }

    /// Uppercased initial of the name, for list section headers.
    /// Empty string when the name is empty.
    pub fn first_letter(&self) -> String {
        match self.name.chars().next() {
            Some(first) => first.to_uppercase().collect(),
            None => String::new(),
        }
    }

    /// Coverage areas joined for display (`"860*, 44100, 33*"`).
    pub fn formatted_areas(&self) -> String {
        self.areas.join(", ")
    }
}

// ===== Tests =====
