//! Per-user session state.
//!
//! A `Session` is immutable: every change is a pure transition
//! `Session::apply(&self, event) -> Session`. Handlers never touch fields
//! directly; they apply events through the `SessionStore`, which holds the
//! current state per user id.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::advisor::evaluator::AnalysisResult;
use crate::normalize::Normalized;

pub mod handlers;

/// Page the user's interaction is currently on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Upload,
    Dashboard,
}

/// Ephemeral UI state for one user. Created all-default, mutated only by
/// events, fully reset by logout. Never persisted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub current_page: Page,
    pub resume_text: Option<String>,
    pub interests: BTreeSet<String>,
    pub career_goal: Option<String>,
    pub analysis_result: Option<Normalized<AnalysisResult>>,
    pub show_projects: bool,
}

/// Everything that can happen to a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    LoggedIn { user_id: String, email: String },
    ResumeUploaded { resume_text: String },
    InterestsChosen { interests: BTreeSet<String> },
    GoalChosen { career_goal: String },
    AnalysisCompleted { outcome: Normalized<AnalysisResult> },
    ProjectsToggled { show: bool },
    StartFresh,
    LoggedOut,
}

impl Session {
    /// Pure transition: returns the successor state, leaving `self` intact.
    ///
    /// `StartFresh` clears the upload/analysis slots but keeps the user
    /// logged in and returns to the upload page; `LoggedOut` resets
    /// everything to defaults.
    #[must_use]
    pub fn apply(&self, event: SessionEvent) -> Session {
        match event {
            SessionEvent::LoggedIn { user_id, email } => Session {
                authenticated: true,
                user_id: Some(user_id),
                email: Some(email),
                ..self.clone()
            },
            SessionEvent::ResumeUploaded { resume_text } => Session {
                resume_text: Some(resume_text),
                ..self.clone()
            },
            SessionEvent::InterestsChosen { interests } => Session {
                interests,
                ..self.clone()
            },
            SessionEvent::GoalChosen { career_goal } => Session {
                career_goal: Some(career_goal),
                ..self.clone()
            },
            SessionEvent::AnalysisCompleted { outcome } => Session {
                analysis_result: Some(outcome),
                current_page: Page::Dashboard,
                ..self.clone()
            },
            SessionEvent::ProjectsToggled { show } => Session {
                show_projects: show,
                ..self.clone()
            },
            SessionEvent::StartFresh => Session {
                authenticated: self.authenticated,
                user_id: self.user_id.clone(),
                email: self.email.clone(),
                ..Session::default()
            },
            SessionEvent::LoggedOut => Session::default(),
        }
    }
}

/// In-memory session state keyed by user id. Clones are cheap handles onto
/// the same map; concurrent users only ever contend on their own entry's
/// short read/write sections.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session for a user; all-default for one never seen.
    pub async fn get(&self, user_id: &str) -> Session {
        self.inner
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Applies one event and stores and returns the successor state.
    pub async fn apply(&self, user_id: &str, event: SessionEvent) -> Session {
        let mut sessions = self.inner.write().await;
        let next = sessions
            .get(user_id)
            .cloned()
            .unwrap_or_default()
            .apply(event);
        sessions.insert(user_id.to_string(), next.clone());
        next
    }
}
