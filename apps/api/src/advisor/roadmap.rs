//! Roadmap Generator — ordered learning steps toward closing a skill gap.

use serde::{Deserialize, Serialize};

use crate::advisor::prompts::ROADMAP_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::normalize::{normalize_list, Normalized};

/// One ordered step (course + platform + duration) of a learning roadmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub skill: String,
    pub recommended_course: String,
    pub platform: String,
    pub estimated_duration: String,
}

/// Message returned without a model call when there is nothing to bridge.
pub const NO_MISSING_SKILLS: &str = "No missing skills detected. No roadmap needed.";

/// Generates a learning roadmap for the given missing skills.
///
/// An empty list short-circuits to a single informational placeholder and
/// issues no model call. Otherwise one call per invocation; no caching
/// across repeated calls with the same skill set.
pub async fn generate(
    missing_skills: &[String],
    llm: &LlmClient,
) -> Result<Vec<Normalized<RoadmapItem>>, LlmError> {
    if missing_skills.is_empty() {
        return Ok(vec![Normalized::placeholder(NO_MISSING_SKILLS)]);
    }

    let prompt = ROADMAP_PROMPT_TEMPLATE.replace("{missing_skills}", &missing_skills.join(", "));
    let raw = llm.call(&prompt, JSON_ONLY_SYSTEM).await?;

    Ok(normalize_list::<RoadmapItem>(&raw))
}
