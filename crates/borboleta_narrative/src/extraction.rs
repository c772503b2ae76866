//! Pulling a story node out of raw model text.
//!
//! Even in JSON mode the model occasionally wraps its answer in a markdown
//! fence or adds a sentence before it. Extraction looks for a fenced block
//! first and falls back to the first balanced `{ ... }`.

use borboleta_core::StoryNode;
use borboleta_error::{StoryError, StoryErrorKind};

const PREVIEW_CHARS: usize = 100;

/// Extract the JSON object from a response that may contain markdown or prose.
///
/// # Errors
///
/// Returns [`StoryErrorKind::NoJson`] if no object is found.
///
/// # Examples
///
/// ```
/// use borboleta_narrative::extract_json;
///
/// let response = "```json\n{\"storyText\": \"Você acorda.\"}\n```";
/// assert_eq!(extract_json(response).unwrap(), "{\"storyText\": \"Você acorda.\"}");
/// ```
pub fn extract_json(response: &str) -> Result<String, StoryError> {
    if let Some(block) = fenced_block(response) {
        if let Some(object) = balanced_object(block) {
            return Ok(object.to_string());
        }
    }

    if let Some(object) = balanced_object(response) {
        return Ok(object.to_string());
    }

    tracing::error!(
        response_length = response.len(),
        "No JSON object found in model response"
    );
    Err(StoryError::new(StoryErrorKind::NoJson(response.chars().count())))
}

/// Body of the first markdown code fence, with or without a language tag.
///
/// A fence left open by a truncated response yields everything after it.
fn fenced_block(response: &str) -> Option<&str> {
    let start = response.find("```")? + 3;
    let after_tag = response[start..]
        .find('\n')
        .map(|n| start + n + 1)
        .unwrap_or(start);
    let body = &response[after_tag..];
    Some(match body.find("```") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    })
}

/// First `{ ... }` span with balanced braces outside of string literals.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Deserialize JSON text into `T`.
///
/// # Errors
///
/// Returns [`StoryErrorKind::InvalidJson`] with the serde message and a
/// short preview of the offending text.
///
/// # Examples
///
/// ```
/// use borboleta_narrative::parse_json;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Visit {
///     count: u64,
/// }
///
/// let visit: Visit = parse_json(r#"{"count": 7}"#).unwrap();
/// assert_eq!(visit.count, 7);
/// ```
pub fn parse_json<T>(json_str: &str) -> Result<T, StoryError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json_str).map_err(|e| {
        let preview: String = json_str.chars().take(PREVIEW_CHARS).collect();

        tracing::error!(
            error = %e,
            json_preview = %preview,
            "JSON parsing failed"
        );

        StoryError::new(StoryErrorKind::InvalidJson(format!(
            "{} (JSON: {}...)",
            e, preview
        )))
    })
}

/// Extract, parse and validate a story node from raw model text.
///
/// # Errors
///
/// Returns the first extraction, parse or invariant failure.
pub fn parse_story_node(response: &str, expected_choices: usize) -> Result<StoryNode, StoryError> {
    let json = extract_json(response)?;
    let node: StoryNode = parse_json(&json)?;
    node.validate(expected_choices).inspect_err(|e| {
        tracing::warn!(error = %e.kind, "Story node failed validation");
    })?;
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NODE: &str = r#"{
        "outcomeText": "A porta range.",
        "storyText": "Há uma carta {lacrada} sobre a mesa.",
        "choices": [
            {"id": "A", "text": "Abrir a carta"},
            {"id": "B", "text": "Queimar a carta"},
            {"id": "C", "text": "Sair da sala"}
        ],
        "imagePrompt": "quarto escuro, carta sobre a mesa",
        "soundDescription": "silêncio tenso",
        "isEnd": false
    }"#;

    #[test]
    fn test_extract_json_from_fenced_block() {
        let response = format!("Aqui está:\n```json\n{}\n```\nBoa sorte!", NODE);
        let json = extract_json(&response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("Queimar a carta"));
    }

    #[test]
    fn test_extract_json_from_unlabelled_fence() {
        let response = format!("```\n{}\n```", NODE);
        assert!(extract_json(&response).is_ok());
    }

    #[test]
    fn test_extract_json_ignores_braces_inside_strings() {
        let response = format!("Resposta: {} fim", NODE);
        let json = extract_json(&response).unwrap();
        assert!(json.contains("{lacrada}"));
        assert!(json.trim_end().ends_with('}'));
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn test_extract_json_handles_truncated_fence() {
        let response = "```json\n{\"storyText\": \"x\"}";
        assert_eq!(extract_json(response).unwrap(), "{\"storyText\": \"x\"}");
    }

    #[test]
    fn test_extract_json_without_object_fails() {
        let err = extract_json("Desculpe, não posso ajudar.").unwrap_err();
        assert!(matches!(err.kind, StoryErrorKind::NoJson(_)));
    }

    #[test]
    fn test_parse_story_node_accepts_valid_node() {
        let node = parse_story_node(NODE, 3).unwrap();
        assert_eq!(node.choices().len(), 3);
        assert_eq!(node.sound_description(), "silêncio tenso");
    }

    #[test]
    fn test_parse_story_node_reports_missing_field() {
        let err = parse_story_node(r#"{"outcomeText": "x", "choices": []}"#, 3).unwrap_err();
        match err.kind {
            StoryErrorKind::InvalidJson(message) => assert!(message.contains("storyText")),
            other => panic!("unexpected kind: {other}"),
        }
    }

    #[test]
    fn test_parse_story_node_rejects_non_list_choices() {
        let err = parse_story_node(
            r#"{"outcomeText": "x", "storyText": "y", "choices": "A, B, C"}"#,
            3,
        )
        .unwrap_err();
        assert!(matches!(err.kind, StoryErrorKind::InvalidJson(_)));
    }

    #[test]
    fn test_parse_story_node_enforces_invariants() {
        let ending_without_reference =
            r#"{"outcomeText": "Fim.", "storyText": "Seu destino está selado.", "choices": [],
                "imagePrompt": "", "soundDescription": "", "isEnd": true}"#;
        let err = parse_story_node(ending_without_reference, 3).unwrap_err();
        assert_eq!(err.kind, StoryErrorKind::MissingEventReference);
    }

    #[test]
    fn test_parse_story_node_requires_every_mandatory_field() {
        for missing in ["imagePrompt", "soundDescription", "isEnd"] {
            let mut value: serde_json::Value = serde_json::from_str(NODE).unwrap();
            value.as_object_mut().unwrap().remove(missing);
            let err = parse_story_node(&value.to_string(), 3).unwrap_err();
            match err.kind {
                StoryErrorKind::InvalidJson(message) => {
                    assert!(message.contains(missing), "{missing}: {message}")
                }
                other => panic!("{missing}: unexpected kind: {other}"),
            }
        }
    }
}
