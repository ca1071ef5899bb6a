//! Error types for the reading engine.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during an interactive session.
///
/// Catalog misses surface here only at the command layer; the underlying
/// lookup operations report absence with `Option` instead of an error.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Input that matches no command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A command invoked with missing or malformed arguments.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No spread carries the requested id.
    #[error("unknown spread: {0}")]
    SpreadNotFound(String),

    /// No card matches the requested name or id.
    #[error("unknown card: {0}")]
    CardNotFound(String),

    /// A command needed a prior reading and none exists.
    #[error("no reading performed yet")]
    NoReading,
}
