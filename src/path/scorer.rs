// src/path/scorer.rs — Multi-factor relevance scoring

use super::types::{LearnerProfile, StepCandidate};
use crate::infra::config::ScoringWeights;
use crate::util::contains_ignore_case;

/// Scores one step candidate against one learner profile.
///
/// Pure and deterministic: identical inputs always produce an identical
/// 0-10 score. Four weighted components: skill-level alignment, interest
/// alignment, goal alignment, prerequisite satisfaction.
pub struct RelevanceScorer {
    weights: ScoringWeights,
}

impl RelevanceScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, step: &StepCandidate, profile: &LearnerProfile) -> f32 {
        let total = self.weights.skill_level * skill_alignment(step, profile)
            + self.weights.interests * interest_alignment(step, &profile.interests)
            + self.weights.goals * goal_alignment(step, &profile.learning_goals)
            + self.weights.prerequisites
                * prerequisite_satisfaction(&step.prerequisites, &profile.completed_courses);

        10.0 * total.clamp(0.0, 1.0)
    }
}

/// 1.0 at the learner's own level, minus 0.3 per level of distance,
/// floored at 0.
fn skill_alignment(step: &StepCandidate, profile: &LearnerProfile) -> f32 {
    let delta = step.difficulty.distance(profile.current_skill_level) as f32;
    (1.0 - 0.3 * delta).max(0.0)
}

/// Per interest: a title match contributes 0.6, a description match 0.4,
/// capped at 1.0. Averaged over all interests; 0 when there are none.
fn interest_alignment(step: &StepCandidate, interests: &[String]) -> f32 {
    if interests.is_empty() {
        return 0.0;
    }
    let sum: f32 = interests
        .iter()
        .map(|interest| {
            let mut hit = 0.0;
            if contains_ignore_case(&step.title, interest) {
                hit += 0.6;
            }
            if contains_ignore_case(&step.description, interest) {
                hit += 0.4;
            }
            f32::min(hit, 1.0)
        })
        .sum();
    sum / interests.len() as f32
}

/// Per goal: a match in any learning outcome contributes 0.7, in the
/// description 0.3. Averaged over all goals; 0 when there are none.
fn goal_alignment(step: &StepCandidate, goals: &[String]) -> f32 {
    if goals.is_empty() {
        return 0.0;
    }
    let sum: f32 = goals
        .iter()
        .map(|goal| {
            let mut hit = 0.0;
            if step
                .learning_outcomes
                .iter()
                .any(|outcome| contains_ignore_case(outcome, goal))
            {
                hit += 0.7;
            }
            if contains_ignore_case(&step.description, goal) {
                hit += 0.3;
            }
            f32::min(hit, 1.0)
        })
        .sum();
    sum / goals.len() as f32
}

/// Fraction of prerequisites found among completed courses. A step with no
/// prerequisites gets full credit: nothing blocks it.
fn prerequisite_satisfaction(prerequisites: &[String], completed: &[String]) -> f32 {
    if prerequisites.is_empty() {
        return 1.0;
    }
    let satisfied = prerequisites
        .iter()
        .filter(|prereq| completed.iter().any(|course| contains_ignore_case(course, prereq)))
        .count();
    satisfied as f32 / prerequisites.len() as f32
}
