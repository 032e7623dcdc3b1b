//! Search input and results panel fragments

use axum::Form;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use cinescope_search::SearchHandle;
use serde::Deserialize;
use uuid::Uuid;

use crate::components::results;
use crate::server::AppState;

/// Form posted by the search box on every keystroke.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Session of the page the box belongs to
    pub session: Uuid,
    /// Current value of the search box
    #[serde(default)]
    pub query: String,
}

/// Form posted by the refresh button.
#[derive(Debug, Deserialize)]
pub struct SessionForm {
    /// Session of the page the button belongs to
    pub session: Uuid,
}

/// Query string of a results long-poll.
#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    /// Session whose results are shown
    pub session: Uuid,
    /// Revision the client already shows
    pub since: Option<u64>,
}

/// Looks up the page's session, or tells HTMX to reload the page when the
/// session has been evicted.
fn session_handle(state: &AppState, session: &Uuid) -> Result<SearchHandle, Response> {
    state.sessions.get(session).ok_or_else(|| {
        tracing::debug!(session = %session, "Unknown search session, asking page to reload");
        (StatusCode::GONE, [("HX-Refresh", "true")]).into_response()
    })
}

/// Passes the typed text to the page's search coordinator.
pub async fn search_input(State(state): State<AppState>, Form(form): Form<SearchForm>) -> Response {
    let handle = match session_handle(&state, &form.session) {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    match handle.set_search_text(form.query).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to update search text: {e}");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

/// Re-runs the page's current search.
pub async fn refresh(State(state): State<AppState>, Form(form): Form<SessionForm>) -> Response {
    let handle = match session_handle(&state, &form.session) {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    match handle.refresh().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to refresh search: {e}");
            StatusCode::SERVICE_UNAVAILABLE.into_response()
        }
    }
}

/// Results panel fragment.
///
/// With `since`, waits until a newer snapshot exists or the long-poll
/// timeout elapses, then renders whatever is current.
pub async fn results_fragment(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Response {
    let handle = match session_handle(&state, &query.session) {
        Ok(handle) => handle,
        Err(response) => return response,
    };

    let snapshot = match query.since {
        Some(revision) => {
            handle
                .wait_for_revision_after(revision, state.config.web.long_poll_timeout)
                .await
        }
        None => handle.snapshot(),
    };

    Html(results::results_panel(&snapshot, query.session, state.posters())).into_response()
}
