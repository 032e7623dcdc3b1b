//! Provider seam between the search coordinator and the movie API.

use async_trait::async_trait;
use cinescope_core::MovieSummary;

use crate::errors::FetchError;

#[cfg(any(test, feature = "test-utils"))]
pub mod scripted;

#[cfg(any(test, feature = "test-utils"))]
pub use scripted::ScriptedProvider;

/// Trait for movie listing providers.
///
/// Implementations supply movie listings through different backends
/// (the real API client, scripted providers for testing).
#[async_trait]
pub trait MovieProvider: Send + Sync + std::fmt::Debug {
    /// Fetch movies matching `query`; a blank query means the popular listing.
    ///
    /// # Errors
    /// - `FetchError::HttpError` - Non-2xx status from the API
    /// - `FetchError::ApiError` - API reported a failure in the body
    /// - `FetchError::NetworkError` - Network connectivity issues
    /// - `FetchError::ParseError` - Unexpected response body
    async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError>;
}
