// src/path/engine.rs — Learning-path orchestration

use std::sync::Arc;

use super::types::{LearnerProfile, ScoredStep};
use super::{dedup, extractor, order, prompt, scorer::RelevanceScorer};
use crate::infra::config::EngineConfig;
use crate::infra::errors::LearnPathError;
use crate::provider::{GenerationRequest, Message, TextGenerator};
use crate::util::truncate_str;

/// Drives one profile through the whole pipeline: prompt → generator →
/// extract → score → deduplicate → order.
///
/// The engine holds no per-call state; concurrent calls from different
/// learners are independent and need no coordination.
pub struct PathEngine {
    generator: Arc<dyn TextGenerator>,
    scorer: RelevanceScorer,
    config: EngineConfig,
}

impl PathEngine {
    pub fn new(generator: Arc<dyn TextGenerator>, config: EngineConfig) -> Self {
        let scorer = RelevanceScorer::new(config.scoring.clone());
        Self {
            generator,
            scorer,
            config,
        }
    }

    /// Generate an ordered learning path for a profile.
    ///
    /// Fails only when the generator itself fails (unreachable, timeout,
    /// transport error); check `LearnPathError::is_retriable` before
    /// re-issuing. A response that parses to zero steps is a valid empty
    /// path, not an error — the caller decides whether to prompt again.
    /// The engine never retries.
    pub async fn generate_learning_path(
        &self,
        profile: &LearnerProfile,
    ) -> Result<Vec<ScoredStep>, LearnPathError> {
        let request = GenerationRequest {
            model: self.config.generation.model.clone(),
            messages: vec![
                Message::system(prompt::SYSTEM_PROMPT),
                Message::user(prompt::build_path_prompt(profile)),
            ],
            max_tokens: Some(self.config.generation.max_tokens),
            temperature: Some(self.config.generation.temperature),
        };

        let response = self.generator.generate(request).await?;
        tracing::debug!(
            provider = self.generator.id(),
            tokens = response.usage.total(),
            preview = truncate_str(&response.content, 120),
            "generator response received",
        );

        let candidates = extractor::extract(&response.content);
        if candidates.is_empty() {
            tracing::warn!(
                provider = self.generator.id(),
                "no step segments found in generator output",
            );
            return Ok(Vec::new());
        }

        let extracted = candidates.len();
        let scored: Vec<ScoredStep> = candidates
            .into_iter()
            .map(|step| {
                let relevance_score = self.scorer.score(&step, profile);
                ScoredStep {
                    step,
                    relevance_score,
                }
            })
            .collect();

        let deduped = dedup::deduplicate(scored, &self.config.dedup);
        let ordered = order::order_by_progression(deduped, profile.current_skill_level);

        tracing::info!(
            extracted,
            kept = ordered.len(),
            level = %profile.current_skill_level,
            "learning path generated",
        );
        Ok(ordered)
    }
}
