// src/path/order.rs — Progression ordering

use std::cmp::Ordering;

use super::types::{ScoredStep, SkillLevel};

/// Stable-sort steps by distance from the learner's current level, then by
/// relevance score descending.
///
/// Difficulty distance dominates relevance: a step at the learner's own
/// level always sorts ahead of a step two levels away, however well the
/// distant step scored on interests. Exact ties keep their original
/// (extraction) order — `sort_by` is stable, so repeated runs over the same
/// input reproduce the same sequence.
pub fn order_by_progression(
    mut steps: Vec<ScoredStep>,
    current_level: SkillLevel,
) -> Vec<ScoredStep> {
    steps.sort_by(|a, b| {
        let da = a.step.difficulty.distance(current_level);
        let db = b.step.difficulty.distance(current_level);
        da.cmp(&db).then_with(|| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(Ordering::Equal)
        })
    });
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::types::StepCandidate;

    fn scored(id: &str, difficulty: SkillLevel, relevance_score: f32) -> ScoredStep {
        ScoredStep {
            step: StepCandidate {
                id: id.into(),
                title: format!("{id} title"),
                description: format!("{id} description"),
                difficulty,
                duration: "1 week".into(),
                modules: vec![],
                prerequisites: vec![],
                learning_outcomes: vec![],
            },
            relevance_score,
        }
    }

    fn ids(steps: &[ScoredStep]) -> Vec<&str> {
        steps.iter().map(|s| s.step.id.as_str()).collect()
    }

    #[test]
    fn test_difficulty_distance_dominates_relevance() {
        // An intermediate learner sees the intermediate 5.0 step before the
        // advanced 9.0 step
        let steps = vec![
            scored("advanced-high", SkillLevel::Advanced, 9.0),
            scored("matched-low", SkillLevel::Intermediate, 5.0),
        ];
        let ordered = order_by_progression(steps, SkillLevel::Intermediate);
        assert_eq!(ids(&ordered), vec!["matched-low", "advanced-high"]);
    }

    #[test]
    fn test_relevance_breaks_distance_ties() {
        let steps = vec![
            scored("weak", SkillLevel::Beginner, 3.0),
            scored("strong", SkillLevel::Beginner, 8.0),
        ];
        let ordered = order_by_progression(steps, SkillLevel::Beginner);
        assert_eq!(ids(&ordered), vec!["strong", "weak"]);
    }

    #[test]
    fn test_exact_ties_keep_original_order() {
        let steps = vec![
            scored("first", SkillLevel::Beginner, 6.0),
            scored("second", SkillLevel::Beginner, 6.0),
            scored("third", SkillLevel::Beginner, 6.0),
        ];
        let ordered = order_by_progression(steps, SkillLevel::Beginner);
        assert_eq!(ids(&ordered), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_full_progression_for_beginner() {
        let steps = vec![
            scored("adv", SkillLevel::Advanced, 9.5),
            scored("mid", SkillLevel::Intermediate, 9.0),
            scored("beg", SkillLevel::Beginner, 2.0),
        ];
        let ordered = order_by_progression(steps, SkillLevel::Beginner);
        assert_eq!(ids(&ordered), vec!["beg", "mid", "adv"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(order_by_progression(vec![], SkillLevel::Advanced).is_empty());
    }

    #[test]
    fn test_intermediate_equidistant_levels_fall_back_to_relevance() {
        // Beginner and advanced are both distance 1 from intermediate
        let steps = vec![
            scored("beg", SkillLevel::Beginner, 4.0),
            scored("adv", SkillLevel::Advanced, 7.0),
        ];
        let ordered = order_by_progression(steps, SkillLevel::Intermediate);
        assert_eq!(ids(&ordered), vec!["adv", "beg"]);
    }
}
