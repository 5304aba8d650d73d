//! Error types for the router.
//!
//! [`RouterError`] covers construction, transport and handler failures.

use thiserror::Error;

/// Top-level error for the router (validation, bot transport, handler, config, IO).
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Token must not be empty")]
    MissingToken,

    #[error("Bot name must not be empty")]
    MissingBotName,

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`RouterError`].
pub type Result<T> = std::result::Result<T, RouterError>;
