//! Cinescope Core - Shared building blocks for movie discovery
//!
//! This crate provides the pieces every Cinescope surface relies on:
//! configuration management, tracing setup, the input debouncer that
//! throttles keystroke-driven searches, and the movie summary model with its
//! display formatting.

pub mod config;
pub mod debounce;
pub mod movie;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::CinescopeConfig;
pub use debounce::Debouncer;
pub use movie::MovieSummary;

/// Core errors that can bubble up from any Cinescope subsystem.
///
/// Fetch failures are not represented here: they are caught at the search
/// coordinator boundary and turned into user-facing status.
#[derive(Debug, thiserror::Error)]
pub enum CinescopeError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web UI error: {reason}")]
    WebUI { reason: String },
}

impl CinescopeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            CinescopeError::Configuration { reason } => format!("Invalid configuration: {reason}"),
            CinescopeError::Io(_) => "File system or network error occurred".to_string(),
            CinescopeError::WebUI { reason } => format!("Web interface error: {reason}"),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CinescopeError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, CinescopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_user_errors() {
        let error = CinescopeError::Configuration {
            reason: "bad base url".to_string(),
        };
        assert!(error.is_user_error());
        assert_eq!(error.user_message(), "Invalid configuration: bad base url");

        let io = CinescopeError::from(std::io::Error::other("socket closed"));
        assert!(!io.is_user_error());
    }
}
