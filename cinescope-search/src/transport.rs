//! HTTP transport used by the movie API client.
//!
//! The client builds requests and interprets responses; the transport only
//! moves bytes. Swapping the transport lets tests run the client without a
//! network.

use async_trait::async_trait;

use crate::errors::FetchError;

/// A GET request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Fully built URL including the query string
    pub url: String,
    /// Header name/value pairs, in send order
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Looks up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for sending HTTP GET requests.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    /// Sends a GET request and returns whatever the server answered.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    ///
    /// # Errors
    /// - `FetchError::NetworkError` - No response could be obtained
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest` client.
    ///
    /// No request timeout is configured; the client's defaults apply.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport around an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut builder = self.client.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::NetworkError {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::NetworkError {
                reason: format!("Reading response body failed: {e}"),
            })?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockTransport;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use parking_lot::Mutex;

    use super::{HttpRequest, HttpResponse, HttpTransport};
    use crate::errors::FetchError;

    /// Transport that replays queued responses and records every request.
    ///
    /// When the queue is empty it answers `200` with an empty listing.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<HttpResponse, FetchError>>>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl MockTransport {
        /// Creates a mock transport with nothing queued.
        pub fn new() -> Self {
            Self::default()
        }

        /// Queues a response with the given status and body.
        pub fn respond_with(self, status: u16, body: impl Into<String>) -> Self {
            self.responses.lock().push_back(Ok(HttpResponse {
                status,
                body: body.into(),
            }));
            self
        }

        /// Queues a transport-level failure.
        pub fn fail_with(self, error: FetchError) -> Self {
            self.responses.lock().push_back(Err(error));
            self
        }

        /// Returns every request sent so far.
        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
            self.requests.lock().push(request.clone());

            self.responses.lock().pop_front().unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: r#"{"results":[]}"#.to_string(),
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            url: "https://api.example.com".to_string(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
        };

        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn test_success_range() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let redirect = HttpResponse {
            status: 301,
            body: String::new(),
        };

        assert!(ok.is_success());
        assert!(!redirect.is_success());
    }

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let transport = MockTransport::new()
            .respond_with(500, "oops")
            .fail_with(FetchError::NetworkError {
                reason: "offline".to_string(),
            });
        let request = HttpRequest {
            url: "https://api.example.com/search".to_string(),
            headers: Vec::new(),
        };

        assert_eq!(transport.get(&request).await.unwrap().status, 500);
        assert!(transport.get(&request).await.is_err());
        assert_eq!(transport.get(&request).await.unwrap().status, 200);
        assert_eq!(transport.requests().len(), 3);
    }
}
