//! Cinescope Web - Movie search page and API server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Server-rendered search page kept live with HTMX, plus JSON endpoints for
//! per-page search state and one-shot lookups.

pub mod components;
pub mod handlers;
pub mod htmx;
pub mod pages;
pub mod server;
pub mod sessions;

// Re-export main types
pub use server::{AppState, router, run_server, serve};
pub use sessions::SearchSessions;
