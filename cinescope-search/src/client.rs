//! Client for the remote movie metadata API.
//!
//! An empty query asks for the popular listing, anything else runs a keyword
//! search. Both endpoints answer with a `results` array of movie records.

use async_trait::async_trait;
use cinescope_core::MovieSummary;
use cinescope_core::config::ApiConfig;
use serde::Deserialize;

use crate::errors::{DEFAULT_API_FAILURE, FetchError};
use crate::providers::MovieProvider;
use crate::transport::{HttpRequest, HttpTransport, ReqwestTransport};

/// Listing response shared by the discover and search endpoints.
///
/// `Response`/`Error` is a legacy inline failure flag some compatible APIs
/// still send with a 200 status.
#[derive(Debug, Deserialize)]
struct MovieListResponse {
    #[serde(default)]
    results: Option<Vec<MovieSummary>>,
    #[serde(default, rename = "Response", alias = "response")]
    response: Option<String>,
    #[serde(default, rename = "Error", alias = "error")]
    error: Option<String>,
}

/// Movie API client with an injected configuration and transport.
#[derive(Debug, Clone)]
pub struct MovieQueryClient<T = ReqwestTransport> {
    config: ApiConfig,
    transport: T,
}

impl MovieQueryClient<ReqwestTransport> {
    /// Creates a client that talks to the real API over `reqwest`.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: HttpTransport> MovieQueryClient<T> {
    /// Creates a client with an explicit transport.
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// API configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Transport this client sends requests through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the endpoint URL for a query.
    ///
    /// Blank queries map to the popularity-sorted discover listing. Keyword
    /// queries are percent-encoded, so spaces become `%20`.
    ///
    /// Whitespace-only queries count as blank on purpose, rather than running
    /// a keyword search for encoded spaces.
    pub fn endpoint_url(&self, query: &str) -> String {
        let base = self.config.trimmed_base_url();

        if query.trim().is_empty() {
            format!("{base}/discover/movie?sort_by=popularity.desc")
        } else {
            format!("{base}/search/movie?query={}", urlencoding::encode(query))
        }
    }

    /// Builds the full GET request for a query, headers included.
    pub fn build_request(&self, query: &str) -> HttpRequest {
        HttpRequest {
            url: self.endpoint_url(query),
            headers: vec![
                ("Accept".to_string(), "application/json".to_string()),
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.bearer_token),
                ),
            ],
        }
    }

    /// Fetch movies matching `query`, or the popular listing for a blank query.
    ///
    /// # Errors
    /// - `FetchError::HttpError` - API answered with a non-2xx status
    /// - `FetchError::ApiError` - API flagged the request as failed in the body
    /// - `FetchError::NetworkError` - No response could be obtained
    /// - `FetchError::ParseError` - Body was not a movie listing
    pub async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        let request = self.build_request(query);
        tracing::debug!(url = %request.url, "Fetching movie listing");

        let response = self.transport.get(&request).await?;

        if !response.is_success() {
            return Err(FetchError::HttpError {
                status: response.status,
            });
        }

        let movies = parse_listing(&response.body)?;
        tracing::debug!(count = movies.len(), "Movie listing received");

        Ok(movies)
    }
}

#[async_trait]
impl<T: HttpTransport> MovieProvider for MovieQueryClient<T> {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        MovieQueryClient::fetch_movies(self, query).await
    }
}

/// Parse a listing body into movie summaries.
fn parse_listing(body: &str) -> Result<Vec<MovieSummary>, FetchError> {
    let listing: MovieListResponse =
        serde_json::from_str(body).map_err(|e| FetchError::ParseError {
            reason: format!("JSON parsing failed: {e}"),
        })?;

    if listing.response.as_deref() == Some("False") {
        return Err(FetchError::ApiError {
            message: listing
                .error
                .unwrap_or_else(|| DEFAULT_API_FAILURE.to_string()),
        });
    }

    Ok(listing.results.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    fn client(transport: MockTransport) -> MovieQueryClient<MockTransport> {
        let config = ApiConfig {
            base_url: "https://api.example.com/3/".to_string(),
            bearer_token: "secret-token".to_string(),
            ..Default::default()
        };
        MovieQueryClient::with_transport(config, transport)
    }

    #[test]
    fn test_blank_query_builds_discover_url() {
        let client = client(MockTransport::new());

        assert_eq!(
            client.endpoint_url(""),
            "https://api.example.com/3/discover/movie?sort_by=popularity.desc"
        );
        assert_eq!(client.endpoint_url("   "), client.endpoint_url(""));
    }

    #[test]
    fn test_keyword_query_is_percent_encoded() {
        let client = client(MockTransport::new());

        assert_eq!(
            client.endpoint_url("batman and robin"),
            "https://api.example.com/3/search/movie?query=batman%20and%20robin"
        );
        assert_eq!(
            client.endpoint_url("amélie & co"),
            "https://api.example.com/3/search/movie?query=am%C3%A9lie%20%26%20co"
        );
    }

    #[tokio::test]
    async fn test_request_carries_accept_and_bearer_headers() {
        let client = client(MockTransport::new());

        client.fetch_movies("alien").await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].header("Accept"), Some("application/json"));
        assert_eq!(
            requests[0].header("Authorization"),
            Some("Bearer secret-token")
        );
    }

    #[tokio::test]
    async fn test_success_returns_results_in_order() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 1, "title": "Heat", "vote_average": 7.9},
                {"id": 2, "title": "Ronin", "release_date": "1998-09-25"}
            ],
            "total_pages": 1
        }"#;
        let client = client(MockTransport::new().respond_with(200, body));

        let movies = client.fetch_movies("").await.unwrap();

        let ids: Vec<u64> = movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(movies[0].title, "Heat");
    }

    #[tokio::test]
    async fn test_missing_results_is_empty_list() {
        let client = client(MockTransport::new().respond_with(200, r#"{"page": 1}"#));

        assert!(client.fetch_movies("nothing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let client = client(MockTransport::new().respond_with(401, r#"{"status_code": 7}"#));

        assert_eq!(
            client.fetch_movies("alien").await,
            Err(FetchError::HttpError { status: 401 })
        );
    }

    #[tokio::test]
    async fn test_inline_failure_flag_is_api_error() {
        let client = client(
            MockTransport::new()
                .respond_with(200, r#"{"response": "False", "Error": "boom"}"#)
                .respond_with(200, r#"{"Response": "False"}"#),
        );

        assert_eq!(
            client.fetch_movies("alien").await,
            Err(FetchError::ApiError {
                message: "boom".to_string()
            })
        );
        assert_eq!(
            client.fetch_movies("alien").await,
            Err(FetchError::ApiError {
                message: DEFAULT_API_FAILURE.to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_truthy_response_flag_is_not_an_error() {
        let body = r#"{"Response": "True", "results": [{"id": 9, "title": "Se7en"}]}"#;
        let client = client(MockTransport::new().respond_with(200, body));

        assert_eq!(client.fetch_movies("seven").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_json_is_parse_error() {
        let client = client(MockTransport::new().respond_with(200, "<html>gateway</html>"));

        assert!(matches!(
            client.fetch_movies("alien").await,
            Err(FetchError::ParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let error = FetchError::NetworkError {
            reason: "connection refused".to_string(),
        };
        let client = client(MockTransport::new().fail_with(error.clone()));

        assert_eq!(client.fetch_movies("alien").await, Err(error));
    }
}
