//! Actor implementation for the search coordinator.

use std::sync::Arc;

use cinescope_core::Debouncer;
use cinescope_core::config::SearchConfig;
use tokio::sync::{mpsc, watch};

use super::commands::SearchCommand;
use super::handle::SearchHandle;
use super::state::{FetchOutcome, SearchSnapshot, SearchState};
use crate::errors::FetchError;
use crate::providers::MovieProvider;

/// Spawns the search coordinator actor and returns its handle.
///
/// The actor immediately fetches the popular listing (empty search text),
/// then fetches again every time the debounced search text changes.
///
/// # Examples
/// ```rust,no_run
/// # #[tokio::main]
/// # async fn main() {
/// use std::sync::Arc;
///
/// use cinescope_core::CinescopeConfig;
/// use cinescope_search::{MovieQueryClient, spawn_search_coordinator};
///
/// let config = CinescopeConfig::from_env();
/// let client = Arc::new(MovieQueryClient::new(config.api.clone()));
/// let handle = spawn_search_coordinator(config.search.clone(), client);
/// handle.set_search_text("batman").await.unwrap();
/// # }
/// ```
pub fn spawn_search_coordinator(
    config: SearchConfig,
    provider: Arc<dyn MovieProvider>,
) -> SearchHandle {
    let (sender, receiver) = mpsc::channel(100);
    let (outcome_sender, outcome_receiver) = mpsc::unbounded_channel();

    let state = SearchState::new();
    let (snapshots, snapshot_receiver) = watch::channel(state.snapshot());

    let coordinator = SearchCoordinator {
        state,
        provider,
        outcome_sender,
        snapshots,
    };
    let debouncer = Debouncer::new(config.debounce_period);

    tokio::spawn(async move {
        run_actor_loop(coordinator, debouncer, receiver, outcome_receiver).await;
    });

    SearchHandle::new(sender, snapshot_receiver)
}

struct SearchCoordinator {
    state: SearchState,
    provider: Arc<dyn MovieProvider>,
    outcome_sender: mpsc::UnboundedSender<FetchOutcome>,
    snapshots: watch::Sender<SearchSnapshot>,
}

impl SearchCoordinator {
    fn publish(&self) {
        self.snapshots.send_replace(self.state.snapshot());
    }

    /// Enters `Loading` and spawns the fetch for `query`.
    fn start_fetch(&mut self, query: String) {
        let sequence = self.state.begin_fetch(&query);
        self.publish();

        tracing::debug!(sequence, query = %query, "Starting movie fetch");

        let provider = Arc::clone(&self.provider);
        let outcome_sender = self.outcome_sender.clone();
        tokio::spawn(async move {
            let result = provider.fetch_movies(&query).await;
            let _ = outcome_sender.send(FetchOutcome {
                sequence,
                query,
                result,
            });
        });
    }

    fn on_debounced(&mut self, query: String) {
        if query == self.state.debounced_text() {
            tracing::trace!(query = %query, "Debounced text unchanged, skipping fetch");
            return;
        }
        self.start_fetch(query);
    }

    fn on_outcome(&mut self, outcome: FetchOutcome) {
        let sequence = outcome.sequence;
        let query = outcome.query.clone();

        match &outcome.result {
            Ok(movies) => {
                tracing::debug!(sequence, query = %query, count = movies.len(), "Movie fetch settled");
            }
            Err(FetchError::ApiError { message }) => {
                tracing::warn!(sequence, query = %query, "Movie API reported an error: {message}");
            }
            Err(error) => {
                tracing::warn!(sequence, query = %query, "Movie fetch failed: {error}");
            }
        }

        if self.state.apply_outcome(outcome) {
            self.publish();
        } else {
            tracing::debug!(sequence, query = %query, "Discarding stale fetch outcome");
        }
    }
}

/// Runs the main actor message processing loop.
///
/// Commands, debounced values and fetch outcomes are handled one at a time,
/// so every published snapshot is internally consistent.
async fn run_actor_loop(
    mut coordinator: SearchCoordinator,
    mut debouncer: Debouncer<String>,
    mut receiver: mpsc::Receiver<SearchCommand>,
    mut outcome_receiver: mpsc::UnboundedReceiver<FetchOutcome>,
) {
    tracing::debug!("Search coordinator started");

    coordinator.start_fetch(String::new());

    loop {
        tokio::select! {
            command = receiver.recv() => {
                let Some(command) = command else { break };
                if !handle_command(&mut coordinator, &mut debouncer, command) {
                    break;
                }
            }
            query = debouncer.settled(), if debouncer.is_pending() => {
                coordinator.on_debounced(query);
            }
            Some(outcome) = outcome_receiver.recv() => {
                coordinator.on_outcome(outcome);
            }
        }
    }

    tracing::debug!("Search coordinator stopped");
}

/// Handles a single command. Returns true to continue processing, false to
/// shut down.
fn handle_command(
    coordinator: &mut SearchCoordinator,
    debouncer: &mut Debouncer<String>,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::SetSearchText { text } => {
            if coordinator.state.set_search_text(&text) {
                coordinator.publish();
                debouncer.push(text);
            }
        }

        SearchCommand::Refresh => {
            let query = coordinator.state.debounced_text().to_string();
            coordinator.start_fetch(query);
        }

        SearchCommand::Shutdown { responder } => {
            let _ = responder.send(());
            return false;
        }
    }

    true
}
