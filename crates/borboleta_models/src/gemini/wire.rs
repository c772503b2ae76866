//! JSON shapes of the `generateContent` endpoint.

use borboleta_core::{GenerateRequest, Input, Role};
use borboleta_error::{GeminiError, GeminiErrorKind};
use serde::{Deserialize, Serialize};

/// One text part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Part {
    /// Text of the part; absent on non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; omitted on the system instruction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: String) -> Self {
        Self {
            role: role.map(String::from),
            parts: vec![Part { text: Some(text) }],
        }
    }
}

/// Sampling and output-format settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// "application/json" when a schema is requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// Schema the JSON output must follow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<serde_json::Value>,
}

/// Request body for `generateContent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Standing instructions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Conversation turns
    pub contents: Vec<Content>,
    /// Sampling settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Map a provider-neutral request onto the Gemini body.
    ///
    /// System messages are merged into `systemInstruction`; assistant turns
    /// become the `model` role. Request values win over the fallbacks.
    pub fn from_request(
        req: &GenerateRequest,
        fallback_temperature: f32,
        fallback_max_tokens: Option<u32>,
    ) -> Self {
        let mut system_texts = Vec::new();
        let mut contents = Vec::new();

        for message in req.messages() {
            let text = message
                .content()
                .iter()
                .map(Input::as_text)
                .collect::<Vec<_>>()
                .join("\n");
            match message.role() {
                Role::System => system_texts.push(text),
                Role::User => contents.push(Content::text(Some("user"), text)),
                Role::Assistant => contents.push(Content::text(Some("model"), text)),
            }
        }

        let system_instruction = if system_texts.is_empty() {
            None
        } else {
            Some(Content::text(None, system_texts.join("\n\n")))
        };

        let (response_mime_type, response_schema) = match req.response_schema() {
            Some(schema) => (Some("application/json".to_string()), Some(schema.clone())),
            None => (None, None),
        };

        Self {
            system_instruction,
            contents,
            generation_config: Some(GenerationConfig {
                temperature: Some(req.temperature().unwrap_or(fallback_temperature)),
                max_output_tokens: req.max_tokens().or(fallback_max_tokens),
                response_mime_type,
                response_schema,
            }),
        }
    }
}

/// One generated candidate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped ("STOP", "MAX_TOKENS", "SAFETY")
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response body of `generateContent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// # Errors
    ///
    /// Returns [`GeminiErrorKind::EmptyResponse`] when there is no text.
    pub fn into_text(self) -> Result<String, GeminiError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
        }
        Ok(text)
    }
}
