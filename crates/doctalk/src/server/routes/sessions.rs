//! Session lifecycle endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::Result;
use crate::server::state::AppState;
use crate::types::{SessionDocumentsResponse, SessionResponse};

/// POST /api/sessions - Start a new session with an empty corpus
pub async fn create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(state.create_session())
}

/// GET /api/sessions/:id - Session overview
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>> {
    Ok(Json(state.session_overview(&id)?))
}

/// DELETE /api/sessions/:id - Delete a session and its corpus
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    state.delete_session(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sessions/:id/documents - List stored documents in upload order
pub async fn list_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionDocumentsResponse>> {
    let documents = state.document_summaries(&id)?;
    Ok(Json(SessionDocumentsResponse {
        session_id: id,
        documents,
    }))
}
