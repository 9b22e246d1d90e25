use chirp_db::StoreError;
use thiserror::Error;

/// What a service call can fail with.
///
/// Each variant maps to exactly one HTTP status; the api crate performs
/// that translation in a single place.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input failed validation, or referenced something that makes the
    /// request unfulfillable.
    #[error("{0}")]
    Invalid(String),

    /// The target of the operation does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Credentials matched no account.
    #[error("invalid username or password")]
    Unauthorized,

    /// The operation clashes with existing state.
    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
