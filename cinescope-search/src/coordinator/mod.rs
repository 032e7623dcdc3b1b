//! Debounced search coordination.
//!
//! The coordinator owns the search text, its debounced counterpart, and the
//! status and results of the latest fetch. It runs as an actor: callers send
//! commands through a [`SearchHandle`] and observe state through snapshots.

mod actor;
mod commands;
mod handle;
mod state;

pub use actor::spawn_search_coordinator;
pub use handle::SearchHandle;
pub use state::{RequestStatus, SearchSnapshot};
