// src/path/dedup.rs — Near-duplicate step removal

use super::types::ScoredStep;
use crate::infra::config::DedupThresholds;

/// Drop steps that read as near-duplicates of an earlier step.
///
/// First-seen order wins: a step is removed when its title similarity
/// against any already-kept step exceeds the title threshold, or its
/// description similarity exceeds the description threshold. Quadratic in
/// the candidate count, which stays well under a hundred per call.
pub fn deduplicate(steps: Vec<ScoredStep>, thresholds: &DedupThresholds) -> Vec<ScoredStep> {
    let mut kept: Vec<ScoredStep> = Vec::with_capacity(steps.len());

    for step in steps {
        let duplicate = kept.iter().any(|existing| {
            similarity(&step.step.title, &existing.step.title) > thresholds.title
                || similarity(&step.step.description, &existing.step.description)
                    > thresholds.description
        });

        if duplicate {
            tracing::debug!(title = %step.step.title, "dropping near-duplicate step");
        } else {
            kept.push(step);
        }
    }

    kept
}

/// Normalized Levenshtein similarity over lowercased text: 1.0 for
/// identical strings (two empty strings included), 0.0 for strings with
/// nothing in common. Symmetric in its arguments.
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = strsim::levenshtein(&a, &b);
    (max_len - distance) as f32 / max_len as f32
}
