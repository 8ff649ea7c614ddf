//! Axum route handlers for the advisor services.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::advisor::evaluator::{self, AnalysisResult};
use crate::advisor::projects::{self, ProjectSuggestion};
use crate::advisor::roadmap::{self, RoadmapItem};
use crate::errors::AppError;
use crate::normalize::Normalized;
use crate::session::handlers::UserIdPayload;
use crate::session::{Session, SessionEvent};
use crate::state::AppState;

/// Interest areas offered by the upload flow.
const INTEREST_OPTIONS: &[&str] = &[
    "Artificial Intelligence",
    "Web Development",
    "Data Science",
    "Cybersecurity",
    "Cloud Computing",
    "Mobile App Development",
    "Game Development",
    "UI/UX Design",
    "Software Developer",
];

/// Career goals offered when the user already knows their target role.
const CAREER_GOAL_OPTIONS: &[&str] = &[
    "Data Scientist",
    "Software Engineer",
    "Cybersecurity Analyst",
    "Cloud Architect",
    "Mobile App Developer",
    "Frontend Developer",
];

#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    pub interests: &'static [&'static str],
    pub career_goals: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_result: Normalized<AnalysisResult>,
    pub session: Session,
}

#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub roadmap: Vec<Normalized<RoadmapItem>>,
}

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: Vec<Normalized<ProjectSuggestion>>,
}

#[derive(Debug, Serialize)]
pub struct SuggestGoalResponse {
    pub career_goal: String,
    pub session: Session,
}

/// GET /api/v1/advisor/options
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        interests: INTEREST_OPTIONS,
        career_goals: CAREER_GOAL_OPTIONS,
    })
}

/// POST /api/v1/advisor/career-goal
///
/// Asks the model for one suitable job title based on the uploaded resume
/// and selected interests, and stores it on the session.
pub async fn handle_suggest_career_goal(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Result<Json<SuggestGoalResponse>, AppError> {
    let session = state.sessions.get(&req.user_id).await;
    let resume_text = session.resume_text.clone().ok_or_else(|| {
        AppError::Validation("No resume uploaded. Please upload your resume first.".to_string())
    })?;

    let goal =
        evaluator::suggest_career_goal(&resume_text, &session.interests, &state.llm).await?;
    info!(user_id = %req.user_id, career_goal = %goal, "career goal suggested");

    let session = state
        .sessions
        .apply(
            &req.user_id,
            SessionEvent::GoalChosen {
                career_goal: goal.clone(),
            },
        )
        .await;

    Ok(Json(SuggestGoalResponse {
        career_goal: goal,
        session,
    }))
}

/// POST /api/v1/advisor/analyze
///
/// Full evaluation of the session's resume against its interests and goal.
/// The outcome lands on the session and flips the page to the dashboard.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let session = state.sessions.get(&req.user_id).await;
    let resume_text = session.resume_text.clone().ok_or_else(|| {
        AppError::Validation("No resume uploaded. Please upload your resume first.".to_string())
    })?;
    let career_goal = session.career_goal.clone().ok_or_else(|| {
        AppError::Validation(
            "No career goal selected. Choose one or ask for a suggestion first.".to_string(),
        )
    })?;

    let outcome =
        evaluator::evaluate(&resume_text, &session.interests, &career_goal, &state.llm).await?;
    info!(
        user_id = %req.user_id,
        parsed = !outcome.is_placeholder(),
        "resume analysis completed"
    );

    let session = state
        .sessions
        .apply(
            &req.user_id,
            SessionEvent::AnalysisCompleted {
                outcome: outcome.clone(),
            },
        )
        .await;

    Ok(Json(AnalyzeResponse {
        analysis_result: outcome,
        session,
    }))
}

/// POST /api/v1/advisor/roadmap
///
/// Learning roadmap for the missing skills of the session's last analysis.
pub async fn handle_roadmap(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let session = state.sessions.get(&req.user_id).await;
    let analysis = session.analysis_result.as_ref().ok_or_else(|| {
        AppError::Validation(
            "No analysis data found. Please upload your resume and start analysis first."
                .to_string(),
        )
    })?;

    let missing_skills = analysis
        .as_item()
        .map(|result| result.missing_skills.clone())
        .unwrap_or_default();

    let roadmap = roadmap::generate(&missing_skills, &state.llm).await?;
    Ok(Json(RoadmapResponse { roadmap }))
}

/// POST /api/v1/advisor/projects
///
/// Project suggestions for the session's career goal. Also records that the
/// user asked for them.
pub async fn handle_projects(
    State(state): State<AppState>,
    Json(req): Json<UserIdPayload>,
) -> Result<Json<ProjectsResponse>, AppError> {
    let session = state
        .sessions
        .apply(&req.user_id, SessionEvent::ProjectsToggled { show: true })
        .await;

    let projects = projects::suggest(session.career_goal.as_deref(), &state.llm).await?;
    Ok(Json(ProjectsResponse { projects }))
}
