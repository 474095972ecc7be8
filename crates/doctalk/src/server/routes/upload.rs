//! Document upload endpoint

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use std::time::Instant;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::ingestion;
use crate::server::state::AppState;
use crate::types::{UploadError, UploadResponse};

/// One file read out of the multipart body
struct UploadedFile {
    filename: String,
    content_type: String,
    data: Vec<u8>,
}

/// POST /api/sessions/:id/documents - Upload and normalize files.
///
/// Files are extracted independently and in upload order; a file that fails
/// is reported in the response's error list and never blocks the rest of the
/// batch.
pub async fn upload_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let start = Instant::now();

    // Read the whole batch before touching the session so the registry lock
    // is never held across a body read
    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::Internal(format!("failed to read multipart field: {}", e)))?
    {
        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("file_{}", Uuid::new_v4()));

        let content_type = field.content_type().map(|s| s.to_string()).unwrap_or_default();

        let data = field
            .bytes()
            .await
            .map_err(|e| Error::Internal(format!("failed to read '{}': {}", filename, e)))?;

        files.push(UploadedFile {
            filename,
            content_type,
            data: data.to_vec(),
        });
    }

    let (documents, errors) = state.with_session_mut(&id, |session| {
        let mut documents = Vec::new();
        let mut errors = Vec::new();

        for file in &files {
            tracing::info!("processing file: {} ({} bytes)", file.filename, file.data.len());

            match ingestion::ingest_file(
                &mut session.corpus,
                &file.filename,
                &file.content_type,
                &file.data,
            ) {
                Ok(summary) => {
                    session.uploads.push(summary.clone());
                    documents.push(summary);
                }
                Err(e) => {
                    tracing::warn!("failed to ingest '{}': {}", file.filename, e);
                    errors.push(UploadError {
                        filename: file.filename.clone(),
                        kind: e.kind().to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        (documents, errors)
    })?;

    let processing_time_ms = start.elapsed().as_millis() as u64;

    Ok(Json(UploadResponse {
        success: !documents.is_empty(),
        documents,
        errors,
        processing_time_ms,
    }))
}
