//! Error types for habitseed

use thiserror::Error;

/// Errors surfaced by the seeder
#[derive(Debug, Error)]
pub enum SeedError {
    /// Invalid or missing configuration, detected before any backend call
    #[error("Configuration error: {0}")]
    Config(String),

    /// Service-account key could not be loaded or parsed
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Token exchange or Identity Toolkit failure
    #[error("Auth error: {0}")]
    Auth(String),

    /// Firestore rejected a write
    #[error("Firestore error: {0}")]
    Firestore(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(String),
}

/// Result type alias for seeder operations
pub type Result<T> = std::result::Result<T, SeedError>;
