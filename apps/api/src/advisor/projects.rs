//! Project Recommender — practical projects matched to the career goal.

use serde::{Deserialize, Serialize};

use crate::advisor::prompts::PROJECTS_PROMPT_TEMPLATE;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};
use crate::normalize::{normalize_list, Normalized};

/// One suggested hands-on project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub project_name: String,
    pub description: String,
    pub estimated_duration: String,
}

/// Message returned without a model call when no goal has been chosen.
pub const NO_CAREER_GOAL: &str = "No career goal provided. Cannot suggest projects.";

/// Suggests projects for the given career goal. An absent or blank goal
/// short-circuits to a single placeholder and issues no model call.
pub async fn suggest(
    career_goal: Option<&str>,
    llm: &LlmClient,
) -> Result<Vec<Normalized<ProjectSuggestion>>, LlmError> {
    let goal = match career_goal {
        Some(goal) if !goal.trim().is_empty() => goal,
        _ => return Ok(vec![Normalized::placeholder(NO_CAREER_GOAL)]),
    };

    let prompt = PROJECTS_PROMPT_TEMPLATE.replace("{career_goal}", goal);
    let raw = llm.call(&prompt, JSON_ONLY_SYSTEM).await?;

    Ok(normalize_list::<ProjectSuggestion>(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20}
        })
    }

    #[tokio::test]
    async fn test_absent_goal_short_circuits_with_zero_model_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let llm = LlmClient::with_base_url("test-key".to_string(), server.uri());
        let projects = suggest(None, &llm).await.unwrap();

        assert_eq!(projects, vec![Normalized::placeholder(NO_CAREER_GOAL)]);
    }

    #[tokio::test]
    async fn test_blank_goal_counts_as_absent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let llm = LlmClient::with_base_url("test-key".to_string(), server.uri());
        let projects = suggest(Some("   "), &llm).await.unwrap();

        assert_eq!(projects, vec![Normalized::placeholder(NO_CAREER_GOAL)]);
    }

    #[tokio::test]
    async fn test_suggest_parses_a_project_array() {
        let server = MockServer::start().await;
        let body = r#"[{"project_name":"Churn Dashboard","description":"Predict and visualize customer churn.","estimated_duration":"3 weeks"}]"#;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion(body)))
            .expect(1)
            .mount(&server)
            .await;

        let llm = LlmClient::with_base_url("test-key".to_string(), server.uri());
        let projects = suggest(Some("Data Scientist"), &llm).await.unwrap();

        assert_eq!(projects.len(), 1);
        let project = projects[0].as_item().expect("expected a project");
        assert_eq!(project.project_name, "Churn Dashboard");
    }
}
