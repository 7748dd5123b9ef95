//! HTTP client for the Anthropic Messages API.
//!
//! Wraps `reqwest` with API key management, the `anthropic-version` header,
//! and typed response deserialization. Non-2xx responses surface the
//! provider's `error.message` when the payload is parseable, otherwise a
//! generic message carrying the status code.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API.
///
/// Use [`AnthropicClient::new`] for production or
/// [`AnthropicClient::with_base_url`] to point at a mock server in tests.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u32,
    output_tokens: u32,
}

/// A successful completion: the generated text plus token usage.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl AnthropicClient {
    /// Creates a client pointed at the production Anthropic API.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("postpilot/0.1 (content-generation)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Sends one completion request. A single attempt is made — transient
    /// failures are the caller's to surface, not retry.
    ///
    /// # Errors
    ///
    /// - [`AiError::Http`] on network failure or timeout.
    /// - [`AiError::ApiError`] on a non-2xx response, carrying the
    ///   provider's message when present.
    /// - [`AiError::Deserialize`] if a success body does not match the
    ///   expected shape.
    pub async fn complete(
        &self,
        model: &str,
        max_tokens: u32,
        system: &str,
        user: &str,
    ) -> Result<Completion, AiError> {
        let request = MessagesRequest {
            model,
            max_tokens,
            system,
            messages: [Message {
                role: "user",
                content: user,
            }],
        };

        let url = format!("{}{MESSAGES_PATH}", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiError::ApiError(provider_error_message(&body, status)));
        }

        let parsed: MessagesResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Deserialize {
                context: "messages response".to_string(),
                source: e,
            })?;

        let text = parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| AiError::ApiError("response contained no content blocks".to_string()))?;

        Ok(Completion {
            text,
            input_tokens: parsed.usage.input_tokens,
            output_tokens: parsed.usage.output_tokens,
        })
    }
}

/// Extracts `error.message` from a provider error payload, falling back to
/// a generic message with the HTTP status code.
fn provider_error_message(body: &str, status: reqwest::StatusCode) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| format!("API request failed: {}", status.as_u16()))
}
