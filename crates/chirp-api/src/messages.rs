use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use chirp_types::api::{CreateMessageRequest, UpdateMessageRequest};

use crate::{ApiError, AppState, blocking};

/// POST /messages: validate and persist a new message.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let message = blocking(move || state.messages.create(req)).await?;
    Ok(Json(message))
}

/// GET /messages: every message.
pub async fn all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let messages = blocking(move || state.messages.all()).await?;
    Ok(Json(messages))
}

/// GET /messages/{id}: the message, or an empty 200 when absent.
pub async fn by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let message = blocking(move || state.messages.by_id(id)).await?;
    Ok(match message {
        Some(message) => Json(message).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

/// DELETE /messages/{id}: rows removed, or an empty 200 when there was
/// nothing to remove.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = blocking(move || state.messages.delete(id)).await?;
    Ok(match removed {
        0 => StatusCode::OK.into_response(),
        n => Json(n).into_response(),
    })
}

/// PATCH /messages/{id}: replace the text, answering with rows updated.
pub async fn update_text(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = blocking(move || state.messages.update_text(id, req)).await?;
    Ok(Json(updated))
}

/// GET /accounts/{id}/messages: everything one author posted.
pub async fn by_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = blocking(move || state.messages.by_author(id)).await?;
    Ok(Json(messages))
}
