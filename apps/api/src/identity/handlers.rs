//! Axum route handlers for signup, login, and logout.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::session::handlers::UserIdPayload;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub email: String,
    pub session: Session,
}

fn require_credentials(req: &CredentialsPayload) -> Result<(), AppError> {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Please enter both email and password.".to_string(),
        ));
    }
    Ok(())
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsPayload>,
) -> Result<Json<SignupResponse>, AppError> {
    require_credentials(&req)?;

    let user = state.identity.signup(&req.email, &req.password).await?;
    info!(user_id = %user.user_id, "account created");

    Ok(Json(SignupResponse {
        user_id: user.user_id,
        email: user.email,
    }))
}

/// POST /api/v1/auth/login
///
/// On success the `LoggedIn` event is applied, making the returned session
/// the starting point for the upload flow.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    require_credentials(&req)?;

    let user = state.identity.login(&req.email, &req.password).await?;
    info!(user_id = %user.user_id, "user logged in");

    let session = state
        .sessions
        .apply(
            &user.user_id,
            SessionEvent::LoggedIn {
                user_id: user.user_id.clone(),
                email: user.email.clone(),
            },
        )
        .await;

    Ok(Json(LoginResponse {
        user_id: user.user_id,
        email: user.email,
        session,
    }))
}

/// POST /api/v1/auth/logout — fully resets the user's session state.
pub async fn handle_logout(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Json<Session> {
    let session = state
        .sessions
        .apply(&req.user_id, SessionEvent::LoggedOut)
        .await;
    info!(user_id = %req.user_id, "user logged out");
    Json(session)
}
