// src/provider/mod.rs — Text generator layer

pub mod openai_compat;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::infra::errors::LearnPathError;

/// Core trait for the external text-generation collaborator.
///
/// One request, one response. The generator is treated as a black box that
/// returns loosely structured natural-language text; the path extractor owns
/// tolerant consumption of whatever comes back.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, LearnPathError>;
}

#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn total(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}
