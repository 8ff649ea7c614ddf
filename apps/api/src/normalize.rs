//! Shared normalizer for raw LLM output.
//!
//! Every model-facing service funnels its response text through here: code
//! fences are stripped, the payload is parsed strictly, and anything
//! unparseable becomes a visible placeholder record carrying the raw text
//! instead of an error. Normalization never fails and never panics.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// Structurally valid but content-degenerate stand-in substituted when the
/// model output cannot be used as-is. The raw text rides along in `message`
/// so the failure stays visible to the end user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub message: String,
}

/// A normalized model payload: either the expected shape or a placeholder.
///
/// `Placeholder` is listed first so that untagged deserialization of a stored
/// `{"message": ...}` record never masquerades as a defaulted `Item`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Normalized<T> {
    Placeholder(Placeholder),
    Item(T),
}

impl<T> Normalized<T> {
    pub fn placeholder(message: impl Into<String>) -> Self {
        Normalized::Placeholder(Placeholder {
            message: message.into(),
        })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Normalized::Placeholder(_))
    }

    pub fn as_item(&self) -> Option<&T> {
        match self {
            Normalized::Item(item) => Some(item),
            Normalized::Placeholder(_) => None,
        }
    }
}

fn parse_failure(cleaned: &str) -> String {
    format!("Failed to parse model output as JSON. Raw output: {cleaned}")
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Normalizes model output expected to be a single JSON object of shape `T`.
/// A payload that does not parse as `T` becomes a placeholder.
pub fn normalize_object<T: DeserializeOwned>(raw: &str) -> Normalized<T> {
    let cleaned = strip_code_fences(raw);
    match serde_json::from_str::<T>(cleaned) {
        Ok(item) => Normalized::Item(item),
        Err(_) => Normalized::placeholder(parse_failure(cleaned)),
    }
}

/// Normalizes model output expected to be a JSON array of `T`.
///
/// A lone JSON value is wrapped into a one-element list. An unparseable
/// payload yields exactly one placeholder; an array element that fits
/// neither shape becomes its own placeholder while the rest survive.
pub fn normalize_list<T: DeserializeOwned>(raw: &str) -> Vec<Normalized<T>> {
    let cleaned = strip_code_fences(raw);
    let value: Value = match serde_json::from_str(cleaned) {
        Ok(v) => v,
        Err(_) => return vec![Normalized::placeholder(parse_failure(cleaned))],
    };

    let elements = match value {
        Value::Array(elements) => elements,
        lone => vec![lone],
    };

    elements
        .into_iter()
        .map(|element| {
            let rendered = element.to_string();
            serde_json::from_value::<Normalized<T>>(element)
                .unwrap_or_else(|_| Normalized::placeholder(parse_failure(&rendered)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Step {
        skill: String,
        platform: String,
    }

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_well_formed_json_round_trips() {
        let raw = r#"[{"skill":"SQL","platform":"Coursera"},{"skill":"Rust","platform":"Udemy"}]"#;
        let normalized = normalize_list::<Value>(raw);
        let round_tripped = serde_json::to_value(&normalized).unwrap();
        let original: Value = serde_json::from_str(raw).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_fenced_output_equals_unfenced() {
        let bare = r#"[{"skill":"SQL","platform":"Coursera"}]"#;
        let fenced = format!("```json\n{bare}\n```");
        let untagged_fence = format!("```\n{bare}\n```");
        assert_eq!(normalize_list::<Step>(bare), normalize_list::<Step>(&fenced));
        assert_eq!(
            normalize_list::<Step>(bare),
            normalize_list::<Step>(&untagged_fence)
        );
    }

    #[test]
    fn test_unparseable_output_yields_single_placeholder_with_raw_text() {
        let normalized = normalize_list::<Step>("sorry, I cannot answer that");
        assert_eq!(normalized.len(), 1);
        match &normalized[0] {
            Normalized::Placeholder(p) => {
                assert!(p.message.contains("sorry, I cannot answer that"))
            }
            Normalized::Item(_) => panic!("expected a placeholder"),
        }
    }

    #[test]
    fn test_lone_object_is_wrapped_into_one_element_list() {
        let normalized = normalize_list::<Step>(r#"{"skill":"SQL","platform":"Coursera"}"#);
        assert_eq!(normalized.len(), 1);
        assert_eq!(
            normalized[0].as_item(),
            Some(&Step {
                skill: "SQL".to_string(),
                platform: "Coursera".to_string(),
            })
        );
    }

    #[test]
    fn test_misshapen_element_becomes_its_own_placeholder() {
        let raw = r#"[{"skill":"SQL","platform":"Coursera"},{"unexpected":true}]"#;
        let normalized = normalize_list::<Step>(raw);
        assert_eq!(normalized.len(), 2);
        assert!(normalized[0].as_item().is_some());
        assert!(normalized[1].is_placeholder());
    }

    #[test]
    fn test_model_emitted_message_object_stays_a_placeholder() {
        let normalized = normalize_list::<Step>(r#"[{"message":"nothing to do"}]"#);
        assert_eq!(
            normalized,
            vec![Normalized::placeholder("nothing to do")]
        );
    }

    #[test]
    fn test_normalize_object_parses_and_falls_back() {
        let parsed = normalize_object::<Step>(r#"{"skill":"SQL","platform":"edX"}"#);
        assert!(parsed.as_item().is_some());

        let fallback = normalize_object::<Step>("not json");
        match fallback {
            Normalized::Placeholder(p) => assert!(p.message.contains("not json")),
            Normalized::Item(_) => panic!("expected a placeholder"),
        }
    }
}
