//! Error types for the brochure core library.

use thiserror::Error;

/// Result type alias using `SiteError`.
pub type Result<T> = std::result::Result<T, SiteError>;

/// Errors raised while wiring or running site behaviours.
///
/// None of these are fatal for the page: a behaviour that fails to attach
/// is skipped and the rest of the site keeps working. Absent elements are
/// not errors; mounting simply yields nothing for that behaviour.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedded configuration could not be parsed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A DOM call failed.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The contact form request could not be completed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl SiteError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom(message.into())
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }
}
