use thiserror::Error;

/// Application-wide error types for the Restaurants API.
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The request is well-formed but refers to something invalid
    /// (id mismatch, unknown category).
    #[error("{0}")]
    BadRequest(String),

    /// A field failed its required/length constraint.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A write touched no row although the row still exists.
    #[error("Concurrency conflict: {0}")]
    Conflict(String),

    /// Missing, malformed, or expired bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The connection pool is closed, exhausted, or the database is unreachable.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Token could not be signed.
    #[error("Token error: {0}")]
    TokenError(String),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Failure already logged; the message is safe to show to clients.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns true if the error comes from the client's input rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::BadRequest(_)
                | AppError::Validation(_)
                | AppError::Unauthorized(_)
        )
    }
}
