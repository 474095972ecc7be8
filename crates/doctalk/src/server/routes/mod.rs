//! API routes for the Q&A server

pub mod ask;
pub mod sessions;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};

use crate::server::state::AppState;

/// Build all API routes
pub fn api_routes(max_upload_size: usize) -> Router<AppState> {
    Router::new()
        // Session lifecycle
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/:id", get(sessions::get_session))
        .route("/sessions/:id", delete(sessions::delete_session))
        .route("/sessions/:id/documents", get(sessions::list_documents))
        // Upload - with larger body limit for multipart file batches
        .route(
            "/sessions/:id/documents",
            post(upload::upload_documents).layer(DefaultBodyLimit::max(max_upload_size)),
        )
        // Question answering
        .route("/sessions/:id/ask", post(ask::ask))
        // Info
        .route("/info", get(info))
}

/// API info endpoint
async fn info() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "name": "doctalk",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Session-scoped document Q&A over uploaded files",
        "endpoints": {
            "POST /api/sessions": "Start a session",
            "GET /api/sessions/:id": "Session overview",
            "DELETE /api/sessions/:id": "Delete a session and its corpus",
            "GET /api/sessions/:id/documents": "List stored documents",
            "POST /api/sessions/:id/documents": "Upload files (multipart)",
            "POST /api/sessions/:id/ask": "Ask a question against the corpus"
        },
        "formats": [
            "text/plain",
            "application/pdf",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "application/msword",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            "application/vnd.ms-excel"
        ]
    }))
}
