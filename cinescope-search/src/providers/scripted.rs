//! Scripted provider implementation for testing.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use cinescope_core::MovieSummary;
use parking_lot::Mutex;

use super::MovieProvider;
use crate::errors::FetchError;

#[derive(Debug, Clone)]
struct ScriptedResponse {
    delay: Duration,
    result: Result<Vec<MovieSummary>, FetchError>,
}

/// Provider that answers each query with a canned result after a delay.
///
/// Queries without a script answer immediately with an empty list. Every
/// call is recorded, in the order it started.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    responses: Mutex<HashMap<String, ScriptedResponse>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    /// Creates a provider with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts an immediate result for `query`.
    pub fn with_response(
        self,
        query: impl Into<String>,
        result: Result<Vec<MovieSummary>, FetchError>,
    ) -> Self {
        self.with_delayed_response(query, Duration::ZERO, result)
    }

    /// Scripts a result for `query` that arrives after `delay`.
    pub fn with_delayed_response(
        self,
        query: impl Into<String>,
        delay: Duration,
        result: Result<Vec<MovieSummary>, FetchError>,
    ) -> Self {
        self.responses
            .lock()
            .insert(query.into(), ScriptedResponse { delay, result });
        self
    }

    /// Queries fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieProvider for ScriptedProvider {
    async fn fetch_movies(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        self.calls.lock().push(query.to_string());

        let scripted = self.responses.lock().get(query).cloned();
        match scripted {
            Some(response) => {
                if !response.delay.is_zero() {
                    tokio::time::sleep(response.delay).await;
                }
                response.result
            }
            None => Ok(Vec::new()),
        }
    }
}
