//! Gemini client tests against a mock server

use super::client::ModelClient;
use super::gemini::GeminiClient;
use super::messages::LlmMessage;
use crate::config::ModelSettings;
use crate::error::{FailureKind, MentorError};
use crate::tools::{ToolParameter, ToolSchema};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(base_url: &str) -> GeminiClient {
    let settings = ModelSettings {
        base_url: base_url.to_string(),
        temperature: Some(0.5),
        ..ModelSettings::default()
    };
    let http_client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to create HTTP client");
    GeminiClient::with_http_client(settings, "test-api-key", http_client)
}

fn mock_gemini_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30}
    })
}

#[tokio::test]
async fn test_chat_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_partial_json(json!({
            "systemInstruction": {"parts": [{"text": "You are a professor."}]},
            "contents": [{"role": "user", "parts": [{"text": "Linear Algebra"}]}],
            "generationConfig": {"temperature": 0.5}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(mock_gemini_response("Vectors first.")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let response = client
        .chat(
            Some("You are a professor."),
            &[LlmMessage::user("Linear Algebra")],
            None,
        )
        .await
        .expect("chat should succeed");

    assert_eq!(response.content, "Vectors first.");
    assert_eq!(response.usage.map(|u| u.total_tokens), Some(30));
}

#[tokio::test]
async fn test_chat_advertises_tools() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "tools": [{"functionDeclarations": [{"name": "web_search"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"functionCall": {"name": "web_search", "args": {"query": "svd"}}}]},
                "finishReason": "STOP"
            }]
        })))
        .mount(&mock_server)
        .await;

    let tools = vec![ToolSchema::new(
        "web_search",
        "Search the web",
        vec![ToolParameter::string("query", "Search query")],
    )];
    let client = create_test_client(&mock_server.uri());
    let response = client
        .chat(None, &[LlmMessage::user("SVD")], Some(&tools))
        .await
        .unwrap();

    assert!(response.has_tool_calls());
    assert_eq!(response.tool_calls[0].get_string("query").as_deref(), Some("svd"));
}

#[tokio::test]
async fn test_chat_quota_error_is_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client
        .chat(None, &[LlmMessage::user("topic")], None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        MentorError::Http {
            status_code: Some(429),
            ..
        }
    ));
    assert!(err.to_string().contains("Resource has been exhausted"));
    assert_eq!(FailureKind::classify(&err), FailureKind::Quota);
}

#[tokio::test]
async fn test_chat_bad_key_is_authentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server.uri());
    let err = client
        .chat(None, &[LlmMessage::user("topic")], None)
        .await
        .unwrap_err();

    assert_eq!(FailureKind::classify(&err), FailureKind::Authentication);
}

#[tokio::test]
async fn test_chat_unreachable_server_is_network() {
    // Nothing listens on a port released by a closed listener
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let client = create_test_client(&format!("http://127.0.0.1:{}", port));
    let err = client
        .chat(None, &[LlmMessage::user("topic")], None)
        .await
        .unwrap_err();

    assert_eq!(FailureKind::classify(&err), FailureKind::Network);
}

#[test]
fn test_new_rejects_empty_key() {
    let result = GeminiClient::new(ModelSettings::default(), "  ");
    assert!(matches!(result, Err(MentorError::Config { .. })));
}
