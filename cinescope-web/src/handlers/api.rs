//! JSON endpoints

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::server::AppState;

/// Query string for a one-shot movie lookup.
#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    /// Keywords; blank asks for the popular listing
    #[serde(default)]
    pub query: String,
}

/// Query string selecting a page's search session.
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    /// Session id handed out with the search page
    pub session: Uuid,
}

/// Current snapshot of one page's search session.
pub async fn api_search_state(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Response {
    match state.sessions.get(&params.session) {
        Some(handle) => Json(handle.snapshot()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Unknown search session" })),
        )
            .into_response(),
    }
}

/// Fetches a listing directly, bypassing the coordinator and its debounce.
pub async fn api_movies(State(state): State<AppState>, Query(params): Query<MovieQuery>) -> Response {
    match state.provider.fetch_movies(&params.query).await {
        Ok(movies) => Json(json!({
            "query": params.query,
            "results": movies,
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!(query = %params.query, "Movie lookup failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({
                    "error": e.user_message(),
                    "detail": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// Liveness probe with uptime and the number of live search sessions.
pub async fn api_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "uptime_secs": state.server_started_at.elapsed().as_secs(),
        "search_sessions": state.sessions.len(),
    }))
}
