//! Axum route handlers for saving and loading user profiles.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use sqlx::types::Json as SqlJson;
use tracing::info;

use crate::errors::AppError;
use crate::profile::{load_profile, save_profile, UserProfile};
use crate::session::handlers::UserIdPayload;
use crate::state::AppState;

/// POST /api/v1/profile/save
///
/// Snapshots the user's current session into the store, replacing any
/// previously saved record wholesale.
pub async fn handle_save(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Result<Json<UserProfile>, AppError> {
    let session = state.sessions.get(&req.user_id).await;
    let email = session.email.clone().ok_or_else(|| {
        AppError::Validation("No active session for this user. Please log in first.".to_string())
    })?;

    let profile = UserProfile {
        user_id: req.user_id.clone(),
        email,
        resume_text: session.resume_text.clone(),
        interests: SqlJson(session.interests.clone()),
        career_goal: session.career_goal.clone(),
        analysis_result: session.analysis_result.clone().map(SqlJson),
        updated_at: Utc::now(),
    };

    save_profile(&state.db, &profile).await?;
    info!(user_id = %req.user_id, "profile saved");

    Ok(Json(profile))
}

/// GET /api/v1/profile/:user_id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = load_profile(&state.db, &user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No saved profile for user {user_id}")))?;

    Ok(Json(profile))
}
