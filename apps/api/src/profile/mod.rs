//! Persistence Adapter — wholesale upsert and load of per-user records.
//!
//! One logical collection keyed by `user_id`. Writes replace the full set of
//! listed fields; there is no partial-field merge, no versioning, and no
//! retry — a connection failure aborts the calling operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use std::collections::BTreeSet;

use crate::advisor::evaluator::AnalysisResult;
use crate::normalize::Normalized;

pub mod handlers;

/// One persisted user record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub resume_text: Option<String>,
    pub interests: Json<BTreeSet<String>>,
    pub career_goal: Option<String>,
    pub analysis_result: Option<Json<Normalized<AnalysisResult>>>,
    pub updated_at: DateTime<Utc>,
}

/// Upserts the record: full-document replace of the listed fields.
pub async fn save_profile(pool: &PgPool, profile: &UserProfile) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_profiles
            (user_id, email, resume_text, interests, career_goal, analysis_result, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            email = EXCLUDED.email,
            resume_text = EXCLUDED.resume_text,
            interests = EXCLUDED.interests,
            career_goal = EXCLUDED.career_goal,
            analysis_result = EXCLUDED.analysis_result,
            updated_at = NOW()
        "#,
    )
    .bind(&profile.user_id)
    .bind(&profile.email)
    .bind(&profile.resume_text)
    .bind(&profile.interests)
    .bind(&profile.career_goal)
    .bind(&profile.analysis_result)
    .execute(pool)
    .await?;

    Ok(())
}

/// Loads the record for `user_id`, if one was ever saved.
pub async fn load_profile(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_serde_round_trip() {
        let profile = UserProfile {
            user_id: "uid-1".to_string(),
            email: "user@example.com".to_string(),
            resume_text: Some("resume".to_string()),
            interests: Json(["Data Science".to_string()].into_iter().collect()),
            career_goal: Some("Data Scientist".to_string()),
            analysis_result: Some(Json(Normalized::Item(AnalysisResult {
                missing_skills: vec!["SQL".to_string()],
                skill_gap_percentage: 50.0,
                ..AnalysisResult::default()
            }))),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["interests"], serde_json::json!(["Data Science"]));
        assert_eq!(value["analysis_result"]["missing_skills"], serde_json::json!(["SQL"]));

        let back: UserProfile = serde_json::from_value(value).unwrap();
        assert_eq!(back.user_id, profile.user_id);
        assert_eq!(back.interests.0, profile.interests.0);
        assert_eq!(
            back.analysis_result.unwrap().0,
            profile.analysis_result.unwrap().0
        );
    }

    #[test]
    fn test_stored_placeholder_outcome_survives_reload() {
        let stored = serde_json::json!({"message": "Failed to parse model output as JSON. Raw output: oops"});
        let outcome: Normalized<AnalysisResult> = serde_json::from_value(stored).unwrap();
        assert!(outcome.is_placeholder());
    }
}
