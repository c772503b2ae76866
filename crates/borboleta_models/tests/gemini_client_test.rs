#![cfg(feature = "gemini")]

//! Tests for the Gemini REST driver against a local fake endpoint.
//!
//! A single test at the bottom talks to the real API and only runs with the
//! `api` feature.

mod test_utils;

use borboleta_core::{GeminiConfig, GenerateRequest, Message, Role};
use borboleta_error::{BorboletaErrorKind, GeminiErrorKind};
use borboleta_interface::BorboletaDriver;
use borboleta_models::GeminiClient;
use serde_json::json;
use test_utils::FakeGemini;

const OK_BODY: &str = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"ok\":true}"}]},"finishReason":"STOP"}]}"#;

fn story_request() -> GenerateRequest {
    GenerateRequest::builder()
        .messages(vec![
            Message::text(Role::System, "Mestre do Jogo"),
            Message::text(Role::User, "Comece a história"),
        ])
        .temperature(Some(0.9))
        .response_schema(Some(json!({"type": "OBJECT"})))
        .build()
        .unwrap()
}

fn client_for(server: &FakeGemini) -> GeminiClient {
    let config = GeminiConfig::default().with_api_base(server.base.clone());
    GeminiClient::with_api_key("test-key", &config).unwrap()
}

fn gemini_kind(err: &borboleta_error::BorboletaError) -> GeminiErrorKind {
    match err.kind() {
        BorboletaErrorKind::Gemini(e) => e.kind.clone(),
        other => panic!("expected a Gemini error, got {other}"),
    }
}

#[tokio::test]
async fn test_generate_posts_mapped_body() -> anyhow::Result<()> {
    let server = FakeGemini::start(200, OK_BODY).await;
    let client = client_for(&server);

    let response = client.generate(&story_request()).await?;
    assert_eq!(response.first_text(), Some("{\"ok\":true}"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    let captured = &requests[0];
    assert_eq!(captured.path, "/models/gemini-2.5-flash:generateContent");
    assert_eq!(captured.header("x-goog-api-key"), Some("test-key"));
    assert_eq!(
        captured.body["systemInstruction"]["parts"][0]["text"],
        "Mestre do Jogo"
    );
    assert_eq!(captured.body["contents"][0]["role"], "user");
    assert_eq!(
        captured.body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    Ok(())
}

#[tokio::test]
async fn test_request_model_overrides_client_default() -> anyhow::Result<()> {
    let server = FakeGemini::start(200, OK_BODY).await;
    let client = client_for(&server);

    let request = GenerateRequest::builder()
        .messages(vec![Message::text(Role::User, "oi")])
        .model(Some("gemini-2.5-pro".to_string()))
        .build()?;
    client.generate(&request).await?;

    assert_eq!(
        server.requests()[0].path,
        "/models/gemini-2.5-pro:generateContent"
    );
    assert_eq!(client.model_name(), "gemini-2.5-flash");
    Ok(())
}

#[tokio::test]
async fn test_http_error_status_is_reported() {
    let server = FakeGemini::start(503, r#"{"error":{"message":"overloaded"}}"#).await;
    let client = client_for(&server);

    let err = client.generate(&story_request()).await.unwrap_err();
    match gemini_kind(&err) {
        GeminiErrorKind::HttpError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 503);
            assert!(message.contains("overloaded"));
        }
        other => panic!("unexpected kind: {other}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_response_decode() {
    let server = FakeGemini::start(200, "not json at all").await;
    let client = client_for(&server);

    let err = client.generate(&story_request()).await.unwrap_err();
    assert!(matches!(gemini_kind(&err), GeminiErrorKind::ResponseDecode(_)));
}

#[tokio::test]
async fn test_missing_candidates_is_empty_response() {
    let server = FakeGemini::start(200, r#"{"candidates":[]}"#).await;
    let client = client_for(&server);

    let err = client.generate(&story_request()).await.unwrap_err();
    assert_eq!(gemini_kind(&err), GeminiErrorKind::EmptyResponse);
}

#[tokio::test]
async fn test_unreachable_host_is_api_request_error() -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let config = GeminiConfig::default().with_api_base(format!("http://{addr}"));
    let client = GeminiClient::with_api_key("test-key", &config)?;

    let err = client.generate(&story_request()).await.unwrap_err();
    assert!(matches!(gemini_kind(&err), GeminiErrorKind::ApiRequest(_)));
    Ok(())
}

#[test]
fn test_debug_output_hides_api_key() -> anyhow::Result<()> {
    let client = GeminiClient::with_api_key("super-secret", &GeminiConfig::default())?;
    let debug = format!("{client:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("gemini-2.5-flash"));
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_api_answers_json() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::new()?;

    let request = GenerateRequest::builder()
        .messages(vec![Message::text(
            Role::User,
            "Responda apenas com o JSON {\"ok\": true}",
        )])
        .response_schema(Some(json!({
            "type": "OBJECT",
            "properties": {"ok": {"type": "BOOLEAN"}},
            "required": ["ok"]
        })))
        .build()?;

    let response = client.generate(&request).await?;
    let text = response.first_text().unwrap_or_default();
    let value: serde_json::Value = serde_json::from_str(text)?;
    assert_eq!(value["ok"], true);
    Ok(())
}
