//! Axum route handlers for session state.

use std::collections::BTreeSet;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

/// Session-keyed request body shared by every handler that acts on behalf of
/// one user.
#[derive(Debug, Deserialize)]
pub struct UserIdPayload {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct InterestsPayload {
    pub user_id: String,
    pub interests: BTreeSet<String>,
}

#[derive(Debug, Deserialize)]
pub struct CareerGoalPayload {
    pub user_id: String,
    pub career_goal: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Json<Session> {
    Json(state.sessions.get(&params.user_id).await)
}

/// POST /api/v1/session/interests
pub async fn handle_set_interests(
    State(state): State<AppState>,
    Json(req): Json<InterestsPayload>,
) -> Json<Session> {
    let session = state
        .sessions
        .apply(
            &req.user_id,
            SessionEvent::InterestsChosen {
                interests: req.interests,
            },
        )
        .await;
    Json(session)
}

/// POST /api/v1/session/career-goal
pub async fn handle_set_career_goal(
    State(state): State<AppState>,
    Json(req): Json<CareerGoalPayload>,
) -> Result<Json<Session>, AppError> {
    if req.career_goal.trim().is_empty() {
        return Err(AppError::Validation(
            "career_goal cannot be empty".to_string(),
        ));
    }
    let session = state
        .sessions
        .apply(
            &req.user_id,
            SessionEvent::GoalChosen {
                career_goal: req.career_goal,
            },
        )
        .await;
    Ok(Json(session))
}

/// POST /api/v1/session/start-fresh
///
/// Drops the uploaded resume, interests, goal, and analysis while keeping
/// the user logged in, returning the interaction to the upload page.
pub async fn handle_start_fresh(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Json<Session> {
    let session = state
        .sessions
        .apply(&req.user_id, SessionEvent::StartFresh)
        .await;
    Json(session)
}
