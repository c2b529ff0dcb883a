use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::debug;

use super::error::TranslationError;
use super::prompt::{MAX_PROMPT_TOKENS, Prompt};

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub source_text: String,
    pub source_language: String,
    pub target_language: String,
    pub model: String,
    pub max_output_tokens: u32,
}

/// Anything that can turn a [`TranslationRequest`] into translated text.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError>;
}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for OpenAI-compatible chat-completion endpoints.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: String,
    temperature: f32,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: String, temperature: f32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            temperature,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let prompt = Prompt::new(
            &request.source_language,
            &request.target_language,
            &request.source_text,
        );

        let estimated = prompt.estimated_tokens();
        if estimated > MAX_PROMPT_TOKENS {
            return Err(TranslationError::PromptTooLarge {
                estimated,
                limit: MAX_PROMPT_TOKENS,
            });
        }

        debug!(
            "Preparing translation request using model {} with max_output_tokens={}",
            request.model, request.max_output_tokens
        );

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&prompt.system),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&prompt.user),
                },
            ],
            max_tokens: request.max_output_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&chat_request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status, &body));
        }

        let body = response.text().await.map_err(classify_transport_error)?;
        parse_completion(&body)
    }
}

fn classify_transport_error(err: reqwest::Error) -> TranslationError {
    if err.is_connect() || err.is_timeout() {
        TranslationError::Connection(err.to_string())
    } else {
        TranslationError::Other(err.to_string())
    }
}

fn classify_status(status: StatusCode, body: &str) -> TranslationError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return TranslationError::RateLimited;
    }

    TranslationError::Status {
        status: status.as_u16(),
        message: api_error_message(body),
    }
}

fn api_error_message(body: &str) -> String {
    if let Ok(response) = serde_json::from_str::<ErrorResponse>(body) {
        return response.error.message;
    }

    let body = body.trim();
    if body.is_empty() {
        "(empty response body)".to_string()
    } else {
        body.to_string()
    }
}

/// Extracts the first choice's content, trimmed. An empty result counts as a failure.
fn parse_completion(body: &str) -> Result<String, TranslationError> {
    let response: ChatCompletionResponse = serde_json::from_str(body).map_err(|e| {
        TranslationError::Other(format!("Failed to decode completion response: {e}"))
    })?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            TranslationError::Other("Completion response contained no message".to_string())
        })?;

    let translated = content.trim();
    if translated.is_empty() {
        return Err(TranslationError::Other(
            "Completion response was empty".to_string(),
        ));
    }

    Ok(translated.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn create_test_request(source_text: String) -> TranslationRequest {
        TranslationRequest {
            source_text,
            source_language: "en-US".to_string(),
            target_language: "es".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_output_tokens: 16_384,
        }
    }

    #[test]
    fn test_parse_completion_trims_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  ¡Hola, {{name}}!\n"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "¡Hola, {{name}}!");
    }

    #[test]
    fn test_parse_completion_uses_first_choice() {
        let body = r#"{"choices":[{"message":{"content":"first"}},{"message":{"content":"second"}}]}"#;
        assert_eq!(parse_completion(body).unwrap(), "first");
    }

    #[test]
    fn test_parse_completion_no_choices() {
        let result = parse_completion(r#"{"choices":[]}"#);
        assert!(matches!(result, Err(TranslationError::Other(_))));
    }

    #[test]
    fn test_parse_completion_null_content() {
        let result = parse_completion(r#"{"choices":[{"message":{"content":null}}]}"#);
        assert!(matches!(result, Err(TranslationError::Other(_))));
    }

    #[test]
    fn test_parse_completion_blank_content() {
        let result = parse_completion(r#"{"choices":[{"message":{"content":"  \n "}}]}"#);
        assert!(matches!(result, Err(TranslationError::Other(_))));
    }

    #[test]
    fn test_parse_completion_invalid_json() {
        let result = parse_completion("not json");
        assert!(matches!(result, Err(TranslationError::Other(_))));
    }

    #[test]
    fn test_classify_status_rate_limited() {
        let err = classify_status(StatusCode::TOO_MANY_REQUESTS, "{}");
        assert!(matches!(err, TranslationError::RateLimited));
    }

    #[test]
    fn test_classify_status_extracts_api_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = classify_status(StatusCode::UNAUTHORIZED, body);

        match err {
            TranslationError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_status_plain_body() {
        let err = classify_status(StatusCode::BAD_GATEWAY, " upstream down \n");
        assert_eq!(err.to_string(), "API error: 502 - upstream down");
    }

    #[test]
    fn test_classify_status_empty_body() {
        let err = classify_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "API error: 500 - (empty response body)");
    }

    #[test]
    fn test_completions_url_trims_trailing_slash() {
        let client = TranslationClient::new(
            "https://api.openai.com/".to_string(),
            "key".to_string(),
            0.3,
        );
        assert_eq!(
            client.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_serialization() {
        let chat_request = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![Message {
                role: "user",
                content: Cow::Borrowed("hi"),
            }],
            max_tokens: 16_384,
            temperature: 0.5,
        };

        let json = serde_json::to_value(&chat_request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["max_tokens"], 16_384);
        assert_eq!(json["temperature"], 0.5);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[tokio::test]
    async fn test_oversized_prompt_is_refused_without_network() {
        // Unroutable endpoint: reaching the network would fail with Connection instead
        let client = TranslationClient::new("http://127.0.0.1:9".to_string(), "key".to_string(), 0.3);
        let request = create_test_request("word ".repeat(MAX_PROMPT_TOKENS + 1));

        let result = client.translate(&request).await;

        assert!(matches!(
            result,
            Err(TranslationError::PromptTooLarge { limit: MAX_PROMPT_TOKENS, .. })
        ));
    }

    #[tokio::test]
    async fn test_refused_connection_is_reported_as_connection_error() {
        // Port 9 (discard) has no listener on loopback
        let client = TranslationClient::new("http://127.0.0.1:9".to_string(), "key".to_string(), 0.3);
        let request = create_test_request("Hello".to_string());

        let result = client.translate(&request).await;

        assert!(
            matches!(result, Err(TranslationError::Connection(_))),
            "unexpected result: {result:?}"
        );
    }
}
