//! Resume upload handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub resume_text: String,
    pub characters: usize,
    pub session: Session,
}

/// POST /api/v1/resume/upload
///
/// Multipart form: a `user_id` text field plus a `file` field carrying the
/// resume. The field's declared content type selects the extractor.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut user_id: Option<String> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|_| AppError::Validation("Invalid user_id field".to_string()))?;
                user_id = Some(value);
            }
            Some("file") => {
                let content_type = field
                    .content_type()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::Validation(
                            "file field must declare a content type".to_string(),
                        )
                    })?;
                let data = field
                    .bytes()
                    .await
                    .map_err(|_| AppError::Validation("Invalid file".to_string()))?;
                file = Some((content_type, data));
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("user_id field is required".to_string()))?;
    let (content_type, data) =
        file.ok_or_else(|| AppError::Validation("file field is required".to_string()))?;

    let resume_text = extract_text(&data, &content_type)?;
    info!(
        user_id = %user_id,
        content_type = %content_type,
        characters = resume_text.len(),
        "resume text extracted"
    );

    let session = state
        .sessions
        .apply(
            &user_id,
            SessionEvent::ResumeUploaded {
                resume_text: resume_text.clone(),
            },
        )
        .await;

    Ok(Json(UploadResponse {
        characters: resume_text.len(),
        resume_text,
        session,
    }))
}
