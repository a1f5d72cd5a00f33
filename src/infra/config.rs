// src/infra/config.rs — Engine configuration (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::infra::errors::LearnPathError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub dedup: DedupThresholds,
}

impl EngineConfig {
    /// Load configuration from a TOML file. Missing sections fall back to
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self, LearnPathError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| LearnPathError::Config(e.to_string()))
    }
}

/// Settings for the single outbound text-generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "Qwen2.5-Coder-32B-Instruct-AWQ-128k".into(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_seconds: 30,
        }
    }
}

/// Relevance-score component weights. Must sum to 1.0 for the final score
/// to span the full 0-10 range; kept fixed within a deployment so scoring
/// stays deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skill_level: f32,
    pub interests: f32,
    pub goals: f32,
    pub prerequisites: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_level: 0.30,
            interests: 0.25,
            goals: 0.25,
            prerequisites: 0.20,
        }
    }
}

/// Similarity thresholds above which a later step counts as a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupThresholds {
    pub title: f32,
    pub description: f32,
}

impl Default for DedupThresholds {
    fn default() -> Self {
        Self {
            title: 0.6,
            description: 0.7,
        }
    }
}
