//! JSON API handlers for external clients

pub mod api;

pub use api::{MovieQuery, SessionQuery, api_health, api_movies, api_search_state};
