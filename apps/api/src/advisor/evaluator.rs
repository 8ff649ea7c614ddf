//! Profile Evaluator — skill extraction, match/gap scoring, and
//! recommendations for one resume against the selected interests and goal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advisor::prompts::{
    EVALUATE_PROMPT_TEMPLATE, GOAL_SUGGEST_PROMPT_TEMPLATE, GOAL_SUGGEST_SYSTEM,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::normalize::{normalize_object, Normalized};

/// Skill-gap analysis produced once per analysis request and immutable until
/// replaced. Fields default individually so a partially-keyed model response
/// still maps onto the full shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub extracted_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub skill_match_percentage: f64,
    #[serde(default)]
    pub skill_gap_percentage: f64,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

fn join_comma(items: &BTreeSet<String>) -> String {
    items
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the full evaluation: one model call at minimum temperature,
/// normalized into either an `AnalysisResult` or a distinguishable
/// placeholder when the output does not parse.
pub async fn evaluate(
    resume_text: &str,
    interests: &BTreeSet<String>,
    career_goal: &str,
    llm: &LlmClient,
) -> Result<Normalized<AnalysisResult>, LlmError> {
    let prompt = EVALUATE_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{interests}", &join_comma(interests))
        .replace("{career_goal}", career_goal);

    let raw = llm.call(&prompt, JSON_ONLY_SYSTEM).await?;

    let outcome = normalize_object::<AnalysisResult>(&raw);
    if outcome.is_placeholder() {
        warn!("resume evaluation produced unparseable model output");
    }
    Ok(outcome)
}

/// Suggests a single career goal (a job title) from the resume and
/// interests, for users who do not know theirs yet.
pub async fn suggest_career_goal(
    resume_text: &str,
    interests: &BTreeSet<String>,
    llm: &LlmClient,
) -> Result<String, LlmError> {
    let prompt = GOAL_SUGGEST_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{interests}", &join_comma(interests));

    let raw = llm.call(&prompt, GOAL_SUGGEST_SYSTEM).await?;
    Ok(raw.trim().to_string())
}
