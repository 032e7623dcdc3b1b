//! Handle for communicating with the search coordinator actor.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};

use super::commands::SearchCommand;
use super::state::SearchSnapshot;
use crate::errors::SearchError;

/// Handle for communicating with the search coordinator actor.
///
/// Cheap to clone; every clone talks to the same coordinator.
#[derive(Clone, Debug)]
pub struct SearchHandle {
    sender: mpsc::Sender<SearchCommand>,
    snapshots: watch::Receiver<SearchSnapshot>,
}

impl SearchHandle {
    pub(crate) fn new(
        sender: mpsc::Sender<SearchCommand>,
        snapshots: watch::Receiver<SearchSnapshot>,
    ) -> Self {
        Self { sender, snapshots }
    }

    /// Replaces the raw search text, as typed.
    ///
    /// The text shows up in the next snapshot right away; the fetch for it
    /// starts once it has been stable for the debounce period.
    ///
    /// # Errors
    /// - `SearchError::CoordinatorShutdown` - Coordinator is no longer running
    pub async fn set_search_text(&self, text: impl Into<String>) -> Result<(), SearchError> {
        self.send(SearchCommand::SetSearchText { text: text.into() })
            .await
    }

    /// Re-issues the fetch for the current debounced text.
    ///
    /// # Errors
    /// - `SearchError::CoordinatorShutdown` - Coordinator is no longer running
    pub async fn refresh(&self) -> Result<(), SearchError> {
        self.send(SearchCommand::Refresh).await
    }

    /// Stops the coordinator and waits for it to acknowledge.
    ///
    /// # Errors
    /// - `SearchError::CoordinatorShutdown` - Coordinator had already stopped
    pub async fn shutdown(&self) -> Result<(), SearchError> {
        let (responder, rx) = oneshot::channel();
        self.send(SearchCommand::Shutdown { responder }).await?;
        rx.await.map_err(|_| SearchError::CoordinatorShutdown)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SearchSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SearchSnapshot> {
        self.snapshots.clone()
    }

    /// Waits for a snapshot newer than `revision`, giving up after `timeout`.
    ///
    /// Always returns the latest snapshot, which equals the current one when
    /// the timeout elapsed or the coordinator stopped.
    pub async fn wait_for_revision_after(&self, revision: u64, timeout: Duration) -> SearchSnapshot {
        let mut receiver = self.subscribe();
        let changed = async {
            receiver
                .wait_for(|s| s.revision > revision)
                .await
                .map(|snapshot| snapshot.clone())
        };

        match tokio::time::timeout(timeout, changed).await {
            Ok(Ok(snapshot)) => snapshot,
            _ => self.snapshot(),
        }
    }

    /// Waits until the fetch for `query` has settled.
    ///
    /// Returns immediately if the latest snapshot already matches.
    ///
    /// # Errors
    /// - `SearchError::CoordinatorShutdown` - Coordinator stopped before settling
    pub async fn wait_for_settled(&self, query: &str) -> Result<SearchSnapshot, SearchError> {
        let mut receiver = self.subscribe();
        receiver
            .wait_for(|s| s.debounced_text == query && !s.status.is_loading())
            .await
            .map(|snapshot| snapshot.clone())
            .map_err(|_| SearchError::CoordinatorShutdown)
    }

    async fn send(&self, command: SearchCommand) -> Result<(), SearchError> {
        self.sender
            .send(command)
            .await
            .map_err(|_| SearchError::CoordinatorShutdown)
    }
}
