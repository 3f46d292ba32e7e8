//! OpenAIApiClient - Direct REST API implementation for OpenAI Chat Completions.
//!
//! One non-streaming request per call, no retries. Failures are classified
//! into `CompletionError` variants for the turn handler to branch on.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use wineai_core::completion::{ChatMessage, CompletionClient, CompletionError, CompletionRequest};
use wineai_core::secret::ApiCredentials;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Client that talks to the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAIApiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAIApiClient {
    /// Creates a new client with the provided API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: BASE_URL.to_string(),
        }
    }

    /// Replaces the underlying HTTP client (custom timeouts, proxy settings).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn from_credentials(credentials: &ApiCredentials) -> Self {
        Self::new(credentials.api_key.clone())
    }

    /// Points the client at a different Chat Completions URL (proxies,
    /// compatible gateways, local test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn send_request(&self, body: &ChatCompletionRequest<'_>) -> Result<String, CompletionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport {
                message: err.to_string(),
                retryable: err.is_connect() || err.is_timeout(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read OpenAI error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|err| {
            CompletionError::InvalidResponse(format!("Failed to parse OpenAI response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionClient for OpenAIApiClient {
    fn provider_name(&self) -> &str {
        "OpenAI"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatCompletionRequest::from(request);

        tracing::debug!(
            model = body.model,
            messages = body.messages.len(),
            max_tokens = body.max_tokens,
            "[OpenAI] Sending chat completion request"
        );

        let text = self.send_request(&body).await?;

        tracing::debug!(chars = text.len(), "[OpenAI] Received completion");
        Ok(text)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: &request.params.model,
            messages: &request.messages,
            temperature: request.params.temperature,
            max_tokens: request.params.max_tokens,
            stream: request.params.stream,
        }
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            CompletionError::InvalidResponse("OpenAI API returned no content in the response".into())
        })
}

fn map_http_error(status: StatusCode, body: String) -> CompletionError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);

    let retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    CompletionError::Api {
        status: status.as_u16(),
        message,
        retryable,
    }
}
