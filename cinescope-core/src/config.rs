//! Centralized configuration for Cinescope.
//!
//! All tunable parameters and settings are defined here so the API client,
//! the search coordinator and the web server receive them explicitly instead
//! of reading globals.

use std::path::PathBuf;
use std::time::Duration;

use crate::CinescopeError;

/// Central configuration for all Cinescope components.
///
/// Groups related configuration settings into logical sections.
/// Supports environment variable overrides for runtime customization.
#[derive(Debug, Clone, Default)]
pub struct CinescopeConfig {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub web: WebConfig,
}

/// Remote movie metadata API configuration.
#[derive(Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Bearer credential sent with every request
    pub bearer_token: String,
    /// Prefix used to turn poster paths into image URLs
    pub image_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            bearer_token: String::new(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }
}

// Hand-written so the credential never ends up in logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = if self.bearer_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };

        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &token)
            .field("image_base_url", &self.image_base_url)
            .finish()
    }
}

impl ApiConfig {
    /// Checks that the configured URLs are absolute HTTP(S) URLs.
    ///
    /// The bearer token is deliberately not checked; a missing token shows
    /// up as authorization failures from the remote API.
    ///
    /// # Errors
    /// - `CinescopeError::Configuration` - Base URL or image base URL is invalid
    pub fn validate(&self) -> crate::Result<()> {
        for (name, value) in [
            ("base_url", &self.base_url),
            ("image_base_url", &self.image_base_url),
        ] {
            let parsed = url::Url::parse(value).map_err(|e| CinescopeError::Configuration {
                reason: format!("{name} '{value}' is not a valid URL: {e}"),
            })?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(CinescopeError::Configuration {
                    reason: format!("{name} '{value}' must use http or https"),
                });
            }
        }

        Ok(())
    }

    /// Returns the base URL without a trailing slash.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Search behaviour configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period the search text must be stable for before a fetch
    pub debounce_period: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_period: Duration::from_millis(500),
        }
    }
}

/// Embedded web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Image shown on cards whose movie has no poster
    pub placeholder_poster: String,
    /// Upper bound on how long a results long-poll waits for a new snapshot
    pub long_poll_timeout: Duration,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// How long a page's search session may go unused before it is dropped
    pub session_idle_timeout: Duration,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            placeholder_poster: "/static/no-movie.svg".to_string(),
            long_poll_timeout: Duration::from_secs(25),
            static_dir: PathBuf::from("cinescope-web/static"),
            session_idle_timeout: Duration::from_secs(600),
        }
    }
}

impl CinescopeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Allows runtime configuration via environment variables while
    /// maintaining sensible defaults. Values that fail to parse are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // API configuration overrides
        if let Ok(token) = std::env::var("CINESCOPE_API_TOKEN") {
            config.api.bearer_token = token;
        } else if let Ok(token) = std::env::var("TMDB_API_KEY") {
            config.api.bearer_token = token;
        }

        if let Ok(base_url) = std::env::var("CINESCOPE_API_BASE_URL") {
            config.api.base_url = base_url;
        }

        if let Ok(image_base_url) = std::env::var("CINESCOPE_IMAGE_BASE_URL") {
            config.api.image_base_url = image_base_url;
        }

        // Search configuration overrides
        if let Ok(debounce) = std::env::var("CINESCOPE_DEBOUNCE_MS") {
            if let Ok(millis) = debounce.parse::<u64>() {
                config.search.debounce_period = Duration::from_millis(millis);
            }
        }

        // Web configuration overrides
        if let Ok(host) = std::env::var("CINESCOPE_HOST") {
            config.web.host = host;
        }

        if let Ok(port) = std::env::var("CINESCOPE_PORT") {
            if let Ok(port) = port.parse::<u16>() {
                config.web.port = port;
            }
        }

        if let Ok(idle) = std::env::var("CINESCOPE_SESSION_IDLE_SECS") {
            if let Ok(secs) = idle.parse::<u64>() {
                config.web.session_idle_timeout = Duration::from_secs(secs);
            }
        }

        config
    }

    /// Creates a configuration pointing at a local fake API for testing.
    pub fn for_testing() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:9/3".to_string(),
                bearer_token: "test-token".to_string(),
                image_base_url: "https://images.test/t/p/w500".to_string(),
            },
            ..Default::default()
        }
    }
}
