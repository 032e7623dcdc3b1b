//! Full page handlers using the component system
//!
//! Pages compose components into complete HTML responses with HTMX and
//! Tailwind loaded from a CDN.

pub mod search;

pub use search::{render_page, search_page};
