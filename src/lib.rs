//! plzfind
//!
//! Locates field sales agents ("salesmen") by postal-code query against
//! their assigned coverage areas. Coverage patterns are exact codes
//! (`"76133"`) or prefix wildcards (`"762*"`); queries match exactly, by
//! prefix, or by the numeric range a wildcard covers.
//!
//! The crate follows a Pure Core / Impure Shell split: pattern matching,
//! filtering, and every state transition are pure functions. The only
//! stateful component is [`pipeline::SearchPipeline`], a single worker
//! thread that debounces keystroke bursts, cancels superseded searches, and
//! publishes immutable [`state::DirectoryState`] snapshots for a frontend
//! to render.

pub mod config;
pub mod model;
pub mod pipeline;
pub mod search;
pub mod source;
pub mod state;
