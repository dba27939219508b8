//! Raw HTTP client for the Anthropic Messages API.
//!
//! No pipeline awareness — just makes API calls via reqwest.

use async_trait::async_trait;
use reqwest::Client;

use super::types::{resolve_model, Message, MessagesRequest, MessagesResponse};
use super::{Completion, CompletionBackend};

/// Errors from LLM operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("rate limited (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("response carried no usage metadata")]
    MissingUsage,

    #[error("missing API key: {0}")]
    MissingApiKey(String),
}

/// Raw HTTP client for the Anthropic Messages API.
///
/// Carries the model and max-tokens settings so the rest of the pipeline
/// only deals in (system instruction, prompt) pairs.
#[derive(Debug)]
pub struct AnthropicClient {
    http: Client,
    api_key: String,
    base_url: String,
    api_version: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicClient {
    /// Create a client with the default base URL (https://api.anthropic.com).
    pub fn new(api_key: String, model: &str, max_tokens: u32) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: "https://api.anthropic.com".into(),
            api_version: "2023-06-01".into(),
            model: resolve_model(model).to_string(),
            max_tokens,
        }
    }

    /// Create a client reading ANTHROPIC_API_KEY from the environment.
    pub fn from_env(model: &str, max_tokens: u32) -> Result<Self, LlmError> {
        let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
            LlmError::MissingApiKey("ANTHROPIC_API_KEY environment variable not set".into())
        })?;
        Ok(Self::new(api_key, model, max_tokens))
    }

    /// Point the client at a different base URL (for testing with mock servers).
    pub fn set_base_url(&mut self, base_url: String) {
        self.base_url = base_url;
    }

    /// The resolved model ID this client sends.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a messages request to the Anthropic API.
    pub async fn messages(&self, request: &MessagesRequest) -> Result<MessagesResponse, LlmError> {
        let url = format!("{}/v1/messages", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(LlmError::RateLimited { retry_after });
        }

        if status >= 400 {
            let body = response.text().await.unwrap_or_else(|_| "(no body)".into());
            return Err(LlmError::ApiError {
                status,
                message: body,
            });
        }

        let resp: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {e}")))?;

        Ok(resp)
    }
}

#[async_trait]
impl CompletionBackend for AnthropicClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<Completion, LlmError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user".into(),
                content: prompt.to_string(),
            }],
            system: Some(system.to_string()),
        };

        let resp = self.messages(&request).await?;

        let text = resp
            .text()
            .ok_or_else(|| LlmError::InvalidResponse("no text block in response".into()))?
            .to_string();

        // Every successful call must report usage; the agents bill against it.
        let usage = resp.usage.ok_or(LlmError::MissingUsage)?;

        tracing::debug!(
            model = %resp.model,
            input_tokens = usage.input_tokens,
            output_tokens = usage.output_tokens,
            "completion finished"
        );

        Ok(Completion {
            text,
            tokens: usage.total(),
        })
    }
}
