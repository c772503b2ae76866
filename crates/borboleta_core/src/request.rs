//! Request and response types for model generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Provider-neutral generation request.
///
/// A [`Role::System`](crate::Role::System) message carries standing
/// instructions. When `response_schema` is set the driver asks the model for
/// JSON constrained by that schema.
///
/// # Examples
///
/// ```
/// use borboleta_core::{GenerateRequest, Message, Role};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::text(Role::User, "Comece a história")])
///     .temperature(Some(0.9))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages().len(), 1);
/// assert!(request.response_schema().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Conversation to send
    messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[getter(copy)]
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[getter(copy)]
    #[builder(default)]
    temperature: Option<f32>,
    /// Model identifier overriding the driver default
    #[builder(default)]
    model: Option<String>,
    /// JSON schema the output must follow
    #[builder(default)]
    response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Creates a builder for GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Provider-neutral generation response.
///
/// # Examples
///
/// ```
/// use borboleta_core::{GenerateResponse, Output};
///
/// let response = GenerateResponse::new(vec![Output::Text("{}".to_string())]);
/// assert_eq!(response.first_text(), Some("{}"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Outputs in the order the model produced them
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Wrap model outputs.
    pub fn new(outputs: Vec<Output>) -> Self {
        Self { outputs }
    }

    /// First text output, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.iter().find_map(|output| match output {
            Output::Text(text) => Some(text.as_str()),
            Output::Json(_) => None,
        })
    }
}
