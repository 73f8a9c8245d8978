//! Tests for DirectoryState derived views.

use super::*;

// ===== Test Helpers =====

fn salesman(id: &str, name: &str, areas: &[&str]) -> Salesman {
    Salesman::new(
        SalesmanId::new(id).expect("valid salesman id"),
        name,
        areas.iter().map(|a| a.to_string()).collect(),
    )
}

fn loaded_state() -> DirectoryState {
    DirectoryState {
        salesmen: vec![
            salesman("s-1", "Artem Titarenko", &["76133"]),
            salesman("s-2", "Bernd Schmitt", &["7619*"]),
        ],
        load_state: LoadState::Loaded,
        ..DirectoryState::default()
    }
}

// ===== Default Tests =====

#[test]
fn default_state_is_fully_idle() {
    let state = DirectoryState::default();

    assert!(state.salesmen.is_empty());
    assert!(state.filtered_salesmen.is_empty());
    assert_eq!(state.search_query, "");
    assert!(state.expanded_ids.is_empty());
    assert_eq!(state.load_state, LoadState::Idle);
    assert_eq!(state.search_state, SearchState::Idle);
}

// ===== displayed_salesmen Tests =====

#[test]
fn displayed_salesmen_shows_full_directory_while_idle() {
    let state = loaded_state();
    assert_eq!(state.displayed_salesmen(), &state.salesmen[..]);
}

#[test]
fn displayed_salesmen_shows_full_directory_while_typing() {
    let state = DirectoryState {
        search_state: SearchState::Typing {
            query: "761".to_string(),
        },
        ..loaded_state()
    };
    assert_eq!(state.displayed_salesmen().len(), 2);
}

#[test]
fn displayed_salesmen_shows_full_directory_while_searching() {
    let state = DirectoryState {
        search_state: SearchState::Searching {
            query: "761".to_string(),
        },
        ..loaded_state()
    };
    assert_eq!(state.displayed_salesmen().len(), 2);
}

#[test]
fn displayed_salesmen_shows_results_when_completed() {
    let results = vec![salesman("s-1", "Artem Titarenko", &["76133"])];
    let state = DirectoryState {
        search_state: SearchState::Completed {
            query: "76133".to_string(),
            results: results.clone(),
        },
        ..loaded_state()
    };
    assert_eq!(state.displayed_salesmen(), &results[..]);
}

// ===== Emptiness Views =====

#[test]
fn is_empty_requires_loaded_directory() {
    let state = DirectoryState::default();
    assert!(!state.is_empty(), "An unloaded directory is not 'empty'");

    let loaded_but_bare = DirectoryState {
        load_state: LoadState::Loaded,
        ..DirectoryState::default()
    };
    assert!(loaded_but_bare.is_empty());
}

#[test]
fn show_empty_search_result_only_for_completed_empty_results() {
    let state = DirectoryState {
        search_state: SearchState::Completed {
            query: "99999".to_string(),
            results: vec![],
        },
        ..loaded_state()
    };
    assert!(state.show_empty_search_result());
}

#[test]
fn show_empty_search_result_is_false_while_searching() {
    let state = DirectoryState {
        search_state: SearchState::Searching {
            query: "99999".to_string(),
        },
        ..loaded_state()
    };
    assert!(!state.show_empty_search_result());
}

#[test]
fn show_empty_search_result_is_false_when_not_loaded() {
    let state = DirectoryState {
        load_state: LoadState::Loading,
        search_state: SearchState::Completed {
            query: "99999".to_string(),
            results: vec![],
        },
        ..DirectoryState::default()
    };
    assert!(!state.show_empty_search_result());
}

#[test]
fn show_content_is_complement_of_empty_when_loaded() {
    let state = loaded_state();
    assert!(state.show_content());
    assert!(!state.is_empty());
}

// ===== Phase Views =====

#[test]
fn is_searching_tracks_searching_phase_only() {
    let mut state = loaded_state();
    assert!(!state.is_searching());

    state.search_state = SearchState::Searching {
        query: "761".to_string(),
    };
    assert!(state.is_searching());
    assert!(!state.is_typing());
}

#[test]
fn is_typing_tracks_typing_phase_only() {
    let state = DirectoryState {
        search_state: SearchState::Typing {
            query: "7".to_string(),
        },
        ..loaded_state()
    };
    assert!(state.is_typing());
    assert!(!state.is_searching());
}

#[test]
fn is_loading_tracks_loading_phase() {
    let state = DirectoryState {
        load_state: LoadState::Loading,
        ..DirectoryState::default()
    };
    assert!(state.is_loading());
}

// ===== Error Views =====

#[test]
fn has_error_and_message_surface_failed_load() {
    let state = DirectoryState {
        load_state: LoadState::Failed("Network connection error".to_string()),
        ..DirectoryState::default()
    };
    assert!(state.has_error());
    assert_eq!(state.error_message(), Some("Network connection error"));
}

#[test]
fn error_message_is_none_without_failure() {
    let state = loaded_state();
    assert!(!state.has_error());
    assert_eq!(state.error_message(), None);
}

// ===== Expansion Views =====

#[test]
fn is_expanded_reflects_membership() {
    let id = SalesmanId::new("s-1").expect("valid salesman id");
    let mut state = loaded_state();
    assert!(!state.is_expanded(&id));

    state.expanded_ids.insert(id.clone());
    assert!(state.is_expanded(&id));
}
