//! Test utilities for end-to-end tests.

use async_trait::async_trait;
use borboleta::{
    BorboletaDriver, BorboletaResult, GeminiError, GeminiErrorKind, GenerateRequest,
    GenerateResponse, Output,
};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Driver replying with canned model text; `None` entries fail like a 503.
pub struct CannedDriver {
    replies: Mutex<VecDeque<Option<String>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl CannedDriver {
    /// Reply with `replies` in order.
    pub fn new(replies: Vec<Option<String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl BorboletaDriver for CannedDriver {
    async fn generate(&self, req: &GenerateRequest) -> BorboletaResult<GenerateResponse> {
        self.requests.lock().unwrap().push(req.clone());
        match self.replies.lock().unwrap().pop_front().flatten() {
            Some(text) => Ok(GenerateResponse::new(vec![Output::Text(text)])),
            None => Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: 503,
                message: "unavailable".to_string(),
            })
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "canned"
    }

    fn model_name(&self) -> &str {
        "canned-model"
    }
}

/// Model text for a node with choices A, B and C.
#[allow(dead_code)]
pub fn scene(story: &str) -> Option<String> {
    Some(format!(
        r#"```json
{{
  "outcomeText": "O ar muda.",
  "storyText": "{story}",
  "choices": [
    {{"id": "A", "text": "Esperar"}},
    {{"id": "B", "text": "Correr"}},
    {{"id": "C", "text": "Gritar"}}
  ],
  "imagePrompt": "praça vazia, neblina",
  "soundDescription": "vento na floresta",
  "isEnd": false
}}
```"#
    ))
}

/// Model text for an ending.
#[allow(dead_code)]
pub fn finale() -> Option<String> {
    Some(
        r#"{"outcomeText": "Nada foi como antes.", "storyText": "Seu destino está selado.",
           "choices": [], "imagePrompt": "amanhecer", "soundDescription": "silêncio",
           "isEnd": true, "realEventReference": "Inspirado no desastre de Chernobyl de 1986."}"#
            .to_string(),
    )
}
