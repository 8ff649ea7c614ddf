pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::extract::handlers as extract;
use crate::identity::handlers as identity;
use crate::profile::handlers as profile;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(identity::handle_signup))
        .route("/api/v1/auth/login", post(identity::handle_login))
        .route("/api/v1/auth/logout", post(identity::handle_logout))
        // Session
        .route("/api/v1/session", get(session::handle_get_session))
        .route("/api/v1/session/interests", post(session::handle_set_interests))
        .route(
            "/api/v1/session/career-goal",
            post(session::handle_set_career_goal),
        )
        .route(
            "/api/v1/session/start-fresh",
            post(session::handle_start_fresh),
        )
        // Resume upload
        .route("/api/v1/resume/upload", post(extract::handle_upload))
        // Advisor
        .route("/api/v1/advisor/options", get(advisor::handle_options))
        .route(
            "/api/v1/advisor/career-goal",
            post(advisor::handle_suggest_career_goal),
        )
        .route("/api/v1/advisor/analyze", post(advisor::handle_analyze))
        .route("/api/v1/advisor/roadmap", post(advisor::handle_roadmap))
        .route("/api/v1/advisor/projects", post(advisor::handle_projects))
        // Profile persistence
        .route("/api/v1/profile/save", post(profile::handle_save))
        .route("/api/v1/profile/:user_id", get(profile::handle_get_profile))
        .with_state(state)
}
