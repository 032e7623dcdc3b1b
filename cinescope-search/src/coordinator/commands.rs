//! Command definitions for the search coordinator actor.

use tokio::sync::oneshot;

/// Commands that can be sent to the search coordinator actor.
pub(crate) enum SearchCommand {
    /// Replace the raw search text; feeds the debouncer.
    SetSearchText { text: String },
    /// Re-issue the fetch for the current debounced text.
    Refresh,
    /// Stop the actor. In-flight fetches finish but are ignored.
    Shutdown { responder: oneshot::Sender<()> },
}

impl std::fmt::Debug for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::SetSearchText { text } => {
                f.debug_struct("SetSearchText").field("text", text).finish()
            }
            SearchCommand::Refresh => f.write_str("Refresh"),
            SearchCommand::Shutdown { .. } => f.write_str("Shutdown"),
        }
    }
}
