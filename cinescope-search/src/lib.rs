//! Cinescope Search - Movie API client and search coordination

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Talks to a TMDB-style movie metadata API and owns the debounced search
//! state that the web and command-line front-ends render.

pub mod client;
pub mod coordinator;
pub mod errors;
pub mod providers;
pub mod transport;

// Re-export main types
pub use client::MovieQueryClient;
pub use coordinator::{RequestStatus, SearchHandle, SearchSnapshot, spawn_search_coordinator};
pub use errors::{FetchError, SearchError};
pub use providers::MovieProvider;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Convenience type alias for Results with FetchError.
pub type Result<T> = std::result::Result<T, FetchError>;
