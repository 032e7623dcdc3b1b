//! HTMX partial update handlers
//!
//! Keystrokes and refreshes come in as small posts; the results panel comes
//! back as a server-rendered fragment.

pub mod search;

pub use search::{ResultsQuery, SearchForm, SessionForm, refresh, results_fragment, search_input};
