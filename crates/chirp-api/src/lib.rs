//! HTTP surface for chirp: routing, extraction, and status mapping.
//!
//! Handlers deserialize, hand the work to a service on the blocking
//! pool, and translate the outcome through [`ApiError`]. Business rules
//! live in `chirp-service`; nothing here decides validity.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tracing::error;

use chirp_service::{AccountService, MessageService, ServiceError};

pub mod accounts;
pub mod error;
pub mod messages;

pub use error::ApiError;

pub struct AppStateInner {
    pub accounts: AccountService,
    pub messages: MessageService,
}

pub type AppState = Arc<AppStateInner>;

/// Build the full route table over shared state.
///
/// Separate from the binary so integration tests can drive the router
/// without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/messages", post(messages::create))
        .route("/messages", get(messages::all))
        .route("/messages/{id}", get(messages::by_id))
        .route("/messages/{id}", delete(messages::remove))
        .route("/messages/{id}", patch(messages::update_text))
        .route("/accounts/{id}/messages", get(messages::by_author))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

/// Run a service call on the blocking pool; rusqlite work must stay off
/// the async runtime.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(outcome) => outcome.map_err(ApiError::Service),
        Err(err) => {
            error!("blocking task failed to join: {err}");
            Err(ApiError::TaskFailed)
        }
    }
}
