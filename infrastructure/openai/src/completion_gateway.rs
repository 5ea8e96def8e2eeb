use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::text::errors::TextError;
use business::domain::text::model::{Completion, CompletionRequest};
use business::domain::text::services::CompletionGateway;

use crate::client::OpenAIClient;

const MAX_TOKENS: u32 = 2000;
const TEMPERATURE: f64 = 0.7;
/// Characters of a non-JSON error body echoed back to the caller.
const RAW_ERROR_PREVIEW_LEN: usize = 200;

pub struct CompletionGatewayOpenAI {
    client: OpenAIClient,
}

impl CompletionGatewayOpenAI {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, request: &CompletionRequest) -> Value {
        let mut messages = Vec::with_capacity(2);
        if let Some(instruction) = &request.instruction {
            messages.push(json!({"role": "system", "content": instruction}));
        }
        messages.push(json!({"role": "user", "content": request.user_text}));

        json!({
            "model": self.client.model,
            "messages": messages,
            "max_tokens": MAX_TOKENS,
            "temperature": TEMPERATURE,
        })
    }

    /// Turns a non-success response into the matching error.
    fn error_from_response(status: u16, body: &str) -> TextError {
        let message = match serde_json::from_str::<Value>(body) {
            Ok(data) => data["error"]["message"].as_str().map(|m| m.to_string()),
            Err(_) => Some(body.chars().take(RAW_ERROR_PREVIEW_LEN).collect()),
        };
        TextError::from_status(status, message)
    }

    fn parse_response(body: &str) -> Result<Completion, TextError> {
        let data: Value = serde_json::from_str(body)
            .map_err(|e| TextError::Unexpected(format!("invalid completion body: {}", e)))?;

        data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .and_then(|choice| choice["message"]["content"].as_str())
            .map(Completion::from_raw)
            .ok_or_else(|| TextError::Unexpected("completion body has no choices".to_string()))
    }

    fn transport_error(err: reqwest::Error) -> TextError {
        if err.is_timeout() {
            TextError::Timeout
        } else {
            TextError::Unexpected(err.to_string())
        }
    }
}

#[async_trait]
impl CompletionGateway for CompletionGatewayOpenAI {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, TextError> {
        let api_key = self.client.api_key().ok_or(TextError::MissingApiKey)?;

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", OpenAIClient::auth_header(api_key))
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(Self::transport_error)?;

        // Any 2xx carries a completion body; only the other statuses are failures.
        if !status.is_success() {
            return Err(Self::error_from_response(status.as_u16(), &body));
        }

        Self::parse_response(&body)
    }
}
