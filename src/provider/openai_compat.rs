// src/provider/openai_compat.rs — Generic OpenAI-compatible generator client
//
// Works against any /chat/completions endpoint (OpenAI, Together, Groq,
// glhf.chat, self-hosted vLLM, etc.).

use async_trait::async_trait;
use std::time::Duration;

use super::{GenerationRequest, GenerationResponse, Role, TextGenerator, TokenUsage};
use crate::infra::errors::LearnPathError;

pub struct OpenAiCompatGenerator {
    id_str: String,
    name_str: String,
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl OpenAiCompatGenerator {
    /// `base_url` should include the version prefix (e.g. `.../api/openai/v1`);
    /// `/chat/completions` is appended per request. `timeout_seconds` bounds
    /// the whole request — on expiry the call fails with a retriable error and
    /// no partial path is ever produced.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        api_key: String,
        base_url: String,
        timeout_seconds: u64,
    ) -> Result<Self, LearnPathError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| LearnPathError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            id_str: id.into(),
            name_str: name.into(),
            api_key,
            base_url,
            client,
        })
    }

    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|m| {
                serde_json::json!({
                    "role": match m.role {
                        Role::System => "system",
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    },
                    "content": m.content,
                })
            })
            .collect();

        let mut body = serde_json::json!({
            "model": request.model,
            "messages": messages,
        });
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = serde_json::json!(max_tokens);
        }
        if let Some(temp) = request.temperature {
            body["temperature"] = serde_json::json!(temp);
        }
        body
    }
}

#[async_trait]
impl TextGenerator for OpenAiCompatGenerator {
    fn id(&self) -> &str {
        &self.id_str
    }

    fn name(&self) -> &str {
        &self.name_str
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, LearnPathError> {
        let body = self.build_request_body(&request);

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| LearnPathError::Generator {
                provider: self.id_str.clone(),
                message: e.to_string(),
                retriable: e.is_timeout() || e.is_connect(),
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(5);
            return Err(LearnPathError::RateLimited {
                provider: self.id_str.clone(),
                retry_after_ms: retry_after * 1000,
            });
        }

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(LearnPathError::Generator {
                provider: self.id_str.clone(),
                message: format!("HTTP {}: {}", status, error_body),
                retriable: status.is_server_error(),
            });
        }

        let resp: serde_json::Value =
            response.json().await.map_err(|e| LearnPathError::Generator {
                provider: self.id_str.clone(),
                message: format!("Failed to parse response: {e}"),
                retriable: false,
            })?;

        let content = resp["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or("")
            .to_string();

        let usage = TokenUsage {
            input_tokens: resp["usage"]["prompt_tokens"].as_u64().unwrap_or(0) as u32,
            output_tokens: resp["usage"]["completion_tokens"].as_u64().unwrap_or(0) as u32,
        };

        Ok(GenerationResponse { content, usage })
    }
}
