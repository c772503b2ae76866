//! Scripted model driver for testing.

use async_trait::async_trait;
use borboleta_core::{GenerateRequest, GenerateResponse, Output};
use borboleta_error::{BorboletaResult, GeminiError, GeminiErrorKind};
use borboleta_interface::BorboletaDriver;
use std::sync::{Arc, Mutex};

/// How the mock answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answer with the given text
    Success(String),
    /// Always fail with the given error
    Error(GeminiErrorKind),
    /// Answer from the list in order; fails once exhausted
    Sequence(Vec<MockResponse>),
}

/// A single scripted answer.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Text output
    Success(String),
    /// Driver failure
    Error(GeminiErrorKind),
    /// Response with no outputs at all
    Empty,
}

/// Driver that replays scripted answers and records every request.
#[derive(Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockDriver {
    /// Always succeed with `text`.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Always fail with `error`.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Replay `responses` in order.
    #[allow(dead_code)]
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of generate() calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Requests received, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn answer(response: &MockResponse) -> BorboletaResult<GenerateResponse> {
        match response {
            MockResponse::Success(text) => {
                Ok(GenerateResponse::new(vec![Output::Text(text.clone())]))
            }
            MockResponse::Error(kind) => Err(GeminiError::new(kind.clone()).into()),
            MockResponse::Empty => Ok(GenerateResponse::new(Vec::new())),
        }
    }

    fn next_response(&self, req: &GenerateRequest) -> BorboletaResult<GenerateResponse> {
        let mut requests = self.requests.lock().unwrap();
        let index = requests.len();
        requests.push(req.clone());

        match &self.behavior {
            MockBehavior::Success(text) => Self::answer(&MockResponse::Success(text.clone())),
            MockBehavior::Error(kind) => Self::answer(&MockResponse::Error(kind.clone())),
            MockBehavior::Sequence(responses) => match responses.get(index) {
                Some(response) => Self::answer(response),
                None => Err(GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    index + 1,
                    responses.len()
                )))
                .into()),
            },
        }
    }
}

#[async_trait]
impl BorboletaDriver for MockDriver {
    async fn generate(&self, req: &GenerateRequest) -> BorboletaResult<GenerateResponse> {
        tokio::time::sleep(tokio::time::Duration::from_millis(1)).await;
        self.next_response(req)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
