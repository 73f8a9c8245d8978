//! Pure state transitions.
//!
//! Every transition is an explicit successor constructor: it names exactly
//! the fields it changes and carries everything else forward unchanged.
//! Synchronous intents go through [`reduce`]; asynchronous outcomes (load
//! and search completions) and debounce-phase changes have dedicated
//! handlers invoked by the pipeline. All functions are total - the
//! "result still current" precondition on [`complete_search`] is enforced
//! by the pipeline's generation check, never here.

use crate::model::Salesman;
use crate::state::{DirectoryState, Intent, LoadState, SearchState};

/// Apply a synchronous intent.
///
/// `Search` only echoes the query into the input field (the pipeline owns
/// debounce and phase changes); `Load` only marks the fetch as started.
pub fn reduce(state: DirectoryState, intent: Intent) -> DirectoryState {
    match intent {
        Intent::Load => DirectoryState {
            load_state: LoadState::Loading,
            ..state
        },
        Intent::Search(query) => DirectoryState {
            search_query: query,
            ..state
        },
        Intent::ToggleExpansion(id) => {
            let mut next = state;
            if !next.expanded_ids.remove(&id) {
                next.expanded_ids.insert(id);
            }
            next
        }
        Intent::ClearSearch => DirectoryState {
            filtered_salesmen: Vec::new(),
            search_query: String::new(),
            search_state: SearchState::Idle,
            ..state
        },
    }
}

/// Directory fetch finished.
///
/// Replaces the loaded set and invalidates any previous filter output.
pub fn complete_load(state: DirectoryState, salesmen: Vec<Salesman>) -> DirectoryState {
    DirectoryState {
        salesmen,
        filtered_salesmen: Vec::new(),
        load_state: LoadState::Loaded,
        ..state
    }
}

/// Directory fetch failed with a human-readable message.
pub fn fail_load(state: DirectoryState, message: impl Into<String>) -> DirectoryState {
    DirectoryState {
        load_state: LoadState::Failed(message.into()),
        ..state
    }
}

/// A still-current filter computation finished.
pub fn complete_search(
    state: DirectoryState,
    query: impl Into<String>,
    results: Vec<Salesman>,
) -> DirectoryState {
    DirectoryState {
        filtered_salesmen: results.clone(),
        search_state: SearchState::Completed {
            query: query.into(),
            results,
        },
        ..state
    }
}

/// Pipeline-only: a non-empty keystroke arrived; the burst has not settled.
pub fn begin_typing(state: DirectoryState, query: impl Into<String>) -> DirectoryState {
    DirectoryState {
        search_state: SearchState::Typing {
            query: query.into(),
        },
        ..state
    }
}

/// Pipeline-only: the debounce settled; the filter computation starts.
pub fn begin_search(state: DirectoryState, query: impl Into<String>) -> DirectoryState {
    DirectoryState {
        search_state: SearchState::Searching {
            query: query.into(),
        },
        ..state
    }
}

/// Pipeline-only: the keystroke returned to already-settled text; restore
/// the committed round's phase instead of re-entering `Typing`.
pub fn restore_search_phase(state: DirectoryState, phase: SearchState) -> DirectoryState {
    DirectoryState {
        search_state: phase,
        ..state
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
