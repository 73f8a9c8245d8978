//! Directory browsing state (pure data).
//!
//! [`DirectoryState`] is an immutable snapshot of everything a frontend
//! needs to render the directory: the loaded salesmen, the active query,
//! the per-salesman expansion set, and the load/search lifecycle phases.
//! Every transition produces a successor value; superseded snapshots are
//! simply dropped, so there is no shared mutation anywhere.

use crate::model::{Salesman, SalesmanId};
use std::collections::HashSet;

/// Directory load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No load requested yet.
    Idle,
    /// Fetch in flight.
    Loading,
    /// Directory available; search results are authoritative.
    Loaded,
    /// Fetch failed with a human-readable message.
    Failed(String),
}

/// Search lifecycle.
/// Sum type enforces exactly one phase at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// No active search.
    Idle,
    /// User is typing; the debounce interval has not settled yet.
    Typing {
        /// Query text as typed.
        query: String,
    },
    /// Debounce settled; the filter computation is running.
    Searching {
        /// Settled, trimmed query.
        query: String,
    },
    /// Search complete with results.
    Completed {
        /// Settled, trimmed query.
        query: String,
        /// Matching salesmen, in directory order.
        results: Vec<Salesman>,
    },
}

/// Inputs the core accepts from the embedding frontend.
///
/// All are idempotent to replay except [`Intent::ToggleExpansion`], which
/// flips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Fetch the full directory from the data source.
    Load,
    /// A keystroke in the search field: the raw query as currently typed.
    Search(String),
    /// Flip one salesman row's expansion.
    ToggleExpansion(SalesmanId),
    /// Drop the active search and show the full directory again.
    ClearSearch,
}

/// Immutable frontend-facing state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryState {
    /// Full loaded directory, read-only after a load completes.
    pub salesmen: Vec<Salesman>,
    /// Last completed search result. Only meaningful while `search_state`
    /// is [`SearchState::Completed`].
    pub filtered_salesmen: Vec<Salesman>,
    /// Query echo for the input field, updated synchronously per keystroke.
    pub search_query: String,
    /// Expanded rows. Independent of the query and load lifecycles; never
    /// reset by search or reload.
    pub expanded_ids: HashSet<SalesmanId>,
    /// Directory load phase.
    pub load_state: LoadState,
    /// Search phase.
    pub search_state: SearchState,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            salesmen: Vec::new(),
            filtered_salesmen: Vec::new(),
            search_query: String::new(),
            expanded_ids: HashSet::new(),
            load_state: LoadState::Idle,
            search_state: SearchState::Idle,
        }
    }
}

impl DirectoryState {
    /// Salesmen the frontend should render: completed results while a
    /// search is active, the full directory otherwise.
    pub fn displayed_salesmen(&self) -> &[Salesman] {
        match &self.search_state {
            SearchState::Completed { results, .. } => results,
            _ => &self.salesmen,
        }
    }

    /// Loaded, but nothing to display.
    pub fn is_empty(&self) -> bool {
        self.load_state == LoadState::Loaded && self.displayed_salesmen().is_empty()
    }

    /// A completed, non-empty search found nothing in a loaded directory.
    pub fn show_empty_search_result(&self) -> bool {
        if let SearchState::Completed { query, results } = &self.search_state {
            !query.is_empty() && results.is_empty() && self.load_state == LoadState::Loaded
        } else {
            false
        }
    }

    /// Loaded with something to display.
    pub fn show_content(&self) -> bool {
        self.load_state == LoadState::Loaded && !self.displayed_salesmen().is_empty()
    }

    /// The filter computation for a settled query is running.
    pub fn is_searching(&self) -> bool {
        matches!(self.search_state, SearchState::Searching { .. })
    }

    /// A keystroke burst has not settled yet.
    pub fn is_typing(&self) -> bool {
        matches!(self.search_state, SearchState::Typing { .. })
    }

    /// The directory fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// The last load failed.
    pub fn has_error(&self) -> bool {
        matches!(self.load_state, LoadState::Failed(_))
    }

    /// Message of the failed load, if any.
    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a salesman row is expanded.
    pub fn is_expanded(&self, id: &SalesmanId) -> bool {
        self.expanded_ids.contains(id)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "directory_state_tests.rs"]
mod tests;
