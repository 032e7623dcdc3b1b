//! HTMX + Tailwind web server for Cinescope
//!
//! Serves the search page, the HTMX fragments that keep it live, and a small
//! JSON API. Each page load owns its own search session.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::routing::{get, post};
use cinescope_core::{CinescopeConfig, CinescopeError};
use cinescope_search::{MovieProvider, MovieQueryClient};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::components::PosterSource;
use crate::handlers::{api_health, api_movies, api_search_state};
use crate::htmx::{refresh, results_fragment, search_input};
use crate::pages::search_page;
use crate::sessions::SearchSessions;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Search sessions, one per loaded page
    pub sessions: Arc<SearchSessions>,
    /// Provider used for one-shot lookups
    pub provider: Arc<dyn MovieProvider>,
    /// Configuration the server was started with
    pub config: Arc<CinescopeConfig>,
    /// Used by the health endpoint to report uptime
    pub server_started_at: Instant,
}

impl AppState {
    /// Creates state whose search sessions fetch through `provider`.
    pub fn new(config: CinescopeConfig, provider: Arc<dyn MovieProvider>) -> Self {
        let sessions = SearchSessions::new(
            config.search.clone(),
            Arc::clone(&provider),
            config.web.session_idle_timeout,
        );

        Self {
            sessions: Arc::new(sessions),
            provider,
            config: Arc::new(config),
            server_started_at: Instant::now(),
        }
    }

    /// Poster settings for rendering cards.
    pub fn posters(&self) -> PosterSource<'_> {
        PosterSource {
            image_base_url: &self.config.api.image_base_url,
            placeholder: &self.config.web.placeholder_poster,
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.web.static_dir.clone();

    Router::new()
        // Main page (HTMX + Tailwind)
        .route("/", get(search_page))
        // HTMX partial update endpoints
        .route("/htmx/search", post(search_input))
        .route("/htmx/refresh", post(refresh))
        .route("/htmx/results", get(results_fragment))
        // JSON API endpoints (for external clients)
        .route("/api/search/state", get(api_search_state))
        .route("/api/movies", get(api_movies))
        .route("/api/health", get(api_health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server against the real movie API until it fails.
///
/// # Errors
/// - `CinescopeError::Configuration` - API URLs or bind address are invalid
/// - `CinescopeError::Io` - Listener could not be bound or serving failed
pub async fn run_server(config: CinescopeConfig) -> Result<(), CinescopeError> {
    config.api.validate()?;

    let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
        .parse()
        .map_err(|e| CinescopeError::Configuration {
            reason: format!(
                "invalid bind address {}:{}: {e}",
                config.web.host, config.web.port
            ),
        })?;

    if config.api.bearer_token.is_empty() {
        tracing::warn!("No API token configured; requests will likely be rejected");
    }

    let provider: Arc<dyn MovieProvider> = Arc::new(MovieQueryClient::new(config.api.clone()));
    let state = AppState::new(config, provider);

    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

/// Serves the application on an already bound listener.
///
/// # Errors
/// - `CinescopeError::Io` - Serving failed
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), CinescopeError> {
    let local_addr = listener.local_addr()?;
    tracing::info!("Cinescope running on http://{local_addr}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
