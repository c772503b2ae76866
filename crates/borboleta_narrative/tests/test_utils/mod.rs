//! Test utilities for story generation tests.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

/// JSON for a valid three-choice node.
#[allow(dead_code)]
pub fn node_json(story_text: &str) -> String {
    serde_json::json!({
        "outcomeText": "As luzes se apagam.",
        "storyText": story_text,
        "choices": [
            {"id": "A", "text": "Esconder-se"},
            {"id": "B", "text": "Chamar ajuda"},
            {"id": "C", "text": "Investigar"}
        ],
        "imagePrompt": "corredor escuro, luz de emergência vermelha",
        "soundDescription": "sirene distante",
        "isEnd": false
    })
    .to_string()
}

/// JSON for a valid ending node.
#[allow(dead_code)]
pub fn ending_json() -> String {
    serde_json::json!({
        "outcomeText": "A cidade nunca soube o que você fez.",
        "storyText": "Seu destino está selado.",
        "choices": [],
        "imagePrompt": "cidade ao amanhecer",
        "soundDescription": "vento",
        "isEnd": true,
        "realEventReference": "Inspirado no grande apagão de 2003."
    })
    .to_string()
}
