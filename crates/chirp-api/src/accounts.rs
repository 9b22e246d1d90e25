use axum::{Json, extract::State, response::IntoResponse};

use chirp_types::api::{LoginRequest, RegisterRequest};

use crate::{ApiError, AppState, blocking};

/// POST /register: create an account, answering with its assigned id.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = blocking(move || state.accounts.register(req)).await?;
    Ok(Json(account))
}

/// POST /login: exact credential match, or 401.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let account = blocking(move || state.accounts.login(req)).await?;
    Ok(Json(account))
}
