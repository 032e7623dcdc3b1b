//! Search state owned by the coordinator and the snapshots it publishes.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use cinescope_core::MovieSummary;
use serde::Serialize;

use crate::errors::FetchError;

/// Observable status of the latest request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RequestStatus {
    /// A fetch for the current debounced text is in flight.
    Loading,
    /// The latest fetch succeeded.
    Success,
    /// The latest fetch failed.
    Error {
        /// Message shown in place of results
        message: String,
    },
}

impl RequestStatus {
    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }

    /// Error message, if the latest fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestStatus::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Consistent view of the search state at one revision.
///
/// Status and result list always come from the same revision, so a reader
/// never pairs a list with the status of a different request.
#[derive(Debug, Clone, Serialize)]
pub struct SearchSnapshot {
    /// Raw text as typed
    pub search_text: String,
    /// Text the latest fetch was issued for
    pub debounced_text: String,
    /// Status of the latest fetch
    #[serde(flatten)]
    pub status: RequestStatus,
    /// Results of the latest successful fetch; empty otherwise
    pub movies: Arc<[MovieSummary]>,
    /// Increases by one with every published change
    pub revision: u64,
    /// When the latest fetch settled
    pub settled_at: Option<DateTime<Utc>>,
}

/// Result of a fetch, tagged with the sequence number it was issued under.
#[derive(Debug)]
pub(crate) struct FetchOutcome {
    pub sequence: u64,
    pub query: String,
    pub result: Result<Vec<MovieSummary>, FetchError>,
}

/// Mutable search state. Only the coordinator actor touches it.
#[derive(Debug)]
pub(crate) struct SearchState {
    search_text: String,
    debounced_text: String,
    status: RequestStatus,
    movies: Arc<[MovieSummary]>,
    revision: u64,
    settled_at: Option<DateTime<Utc>>,
    latest_sequence: u64,
}

impl SearchState {
    /// State before the first fetch: empty text, loading, no results.
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            debounced_text: String::new(),
            status: RequestStatus::Loading,
            movies: Arc::from(Vec::new()),
            revision: 0,
            settled_at: None,
            latest_sequence: 0,
        }
    }

    pub fn debounced_text(&self) -> &str {
        &self.debounced_text
    }

    /// Records new raw text. Returns false if nothing changed.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if self.search_text == text {
            return false;
        }
        self.search_text = text.to_string();
        self.revision += 1;
        true
    }

    /// Enters `Loading` for `query` and returns the sequence number to tag
    /// the fetch with.
    pub fn begin_fetch(&mut self, query: &str) -> u64 {
        self.latest_sequence += 1;
        self.debounced_text = query.to_string();
        self.status = RequestStatus::Loading;
        self.movies = Arc::from(Vec::new());
        self.revision += 1;
        self.latest_sequence
    }

    /// Applies a fetch outcome. Returns false if it was stale and dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.sequence != self.latest_sequence {
            return false;
        }

        match outcome.result {
            Ok(movies) => {
                self.movies = Arc::from(movies);
                self.status = RequestStatus::Success;
            }
            Err(error) => {
                self.movies = Arc::from(Vec::new());
                self.status = RequestStatus::Error {
                    message: error.user_message(),
                };
            }
        }
        self.settled_at = Some(Utc::now());
        self.revision += 1;
        true
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            search_text: self.search_text.clone(),
            debounced_text: self.debounced_text.clone(),
            status: self.status.clone(),
            movies: Arc::clone(&self.movies),
            revision: self.revision,
            settled_at: self.settled_at,
        }
    }
}
