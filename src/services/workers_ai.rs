use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::services::completion::{CompletionService, OutputShape, UpstreamError};

/// Client for Cloudflare Workers AI text generation in JSON mode.
pub struct WorkersAiClient {
    http: Client,
    base_url: String,
    account_id: String,
    api_token: String,
    model: String,
    max_tokens: u32,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    messages: [ChatMessage<'a>; 1],
    response_format: ResponseFormat,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
    json_schema: Value,
}

#[derive(Deserialize)]
struct GenerationEnvelope {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    errors: Vec<ApiMessage>,
    result: Option<GenerationResult>,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    code: Option<i64>,
    message: String,
}

#[derive(Deserialize)]
struct GenerationResult {
    response: Option<Value>,
}

fn default_success() -> bool {
    true
}

impl WorkersAiClient {
    pub fn new(
        base_url: &str,
        account_id: &str,
        api_token: &str,
        model: &str,
    ) -> Result<Self, UpstreamError> {
        Self::build(base_url, account_id, api_token, model, 512, None)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, UpstreamError> {
        Self::build(
            &config.cf_api_base_url,
            &config.cf_account_id,
            &config.cf_api_token,
            &config.cf_ai_model,
            config.completion_max_tokens,
            config.completion_timeout_secs.map(Duration::from_secs),
        )
    }

    fn build(
        base_url: &str,
        account_id: &str,
        api_token: &str,
        model: &str,
        max_tokens: u32,
        timeout: Option<Duration>,
    ) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            account_id: account_id.to_string(),
            api_token: api_token.to_string(),
            model: model.to_string(),
            max_tokens,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn run_url(&self) -> String {
        format!(
            "{}/accounts/{}/ai/run/{}",
            self.base_url, self.account_id, self.model
        )
    }
}

#[async_trait]
impl CompletionService for WorkersAiClient {
    async fn complete(&self, prompt: &str, shape: &OutputShape) -> Result<Value, UpstreamError> {
        let request_body = GenerationRequest {
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_schema",
                json_schema: shape.json_schema(),
            },
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending Workers AI request");

        let response = self
            .http
            .post(self.run_url())
            .bearer_auth(&self.api_token)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to read Workers AI error body");
                    String::new()
                }
            };
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerationEnvelope = response.json().await?;
        reply_from_envelope(envelope)
    }
}

fn reply_from_envelope(envelope: GenerationEnvelope) -> Result<Value, UpstreamError> {
    if !envelope.success {
        let messages: Vec<String> = envelope
            .errors
            .iter()
            .map(|e| match e.code {
                Some(code) => format!("{} ({})", e.message, code),
                None => e.message.clone(),
            })
            .collect();
        return Err(UpstreamError::Api(messages.join("; ")));
    }

    // Models in JSON mode return either an object or a JSON-encoded string.
    match envelope.result.and_then(|r| r.response) {
        None | Some(Value::Null) => Err(UpstreamError::EmptyReply),
        Some(Value::String(text)) if text.trim().is_empty() => Err(UpstreamError::EmptyReply),
        Some(Value::String(text)) => Ok(serde_json::from_str(&text)?),
        Some(other) => Ok(other),
    }
}
