//! Error types for movie search functionality.

use thiserror::Error;

/// Message shown for any failure that is not an explicit API error.
pub const GENERIC_FETCH_FAILURE: &str = "Error fetching movies. Please try again later.";

/// Message used when the API flags a failure without saying why.
pub const DEFAULT_API_FAILURE: &str = "Failed to fetch movies";

/// Errors that can occur while fetching a movie listing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx HTTP status.
    #[error("HTTP error: status {status}")]
    HttpError {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// The API answered 2xx but flagged the request as failed in the body.
    #[error("API error: {message}")]
    ApiError {
        /// Message supplied by the API
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// The response body was not the expected JSON.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}

impl FetchError {
    /// Returns the message shown to users in place of results.
    ///
    /// Only explicit API errors carry their own text; every other failure
    /// collapses into one generic message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::ApiError { message } => message.clone(),
            _ => GENERIC_FETCH_FAILURE.to_string(),
        }
    }
}

/// Errors returned by the search coordinator handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The coordinator task has stopped and no longer accepts commands.
    #[error("Search coordinator has shut down")]
    CoordinatorShutdown,
}
