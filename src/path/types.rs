// src/path/types.rs — Learning-path type definitions

use serde::{Deserialize, Serialize};

/// Position on the beginner → advanced axis, shared by learner profiles
/// and step difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Ordinal distance to another level (0..=2).
    pub fn distance(self, other: SkillLevel) -> u8 {
        (self.ordinal() - other.ordinal()).unsigned_abs()
    }

    fn ordinal(self) -> i8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Parse a generator-emitted difficulty token. Anything unrecognized
    /// resolves to `Beginner`, matching the extractor's defaulting rules.
    pub fn parse_lenient(s: &str) -> SkillLevel {
        match s.trim().to_ascii_lowercase().as_str() {
            "intermediate" => SkillLevel::Intermediate,
            "advanced" => SkillLevel::Advanced,
            _ => SkillLevel::Beginner,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the caller knows about a learner. Immutable for the duration of
/// one engine call; the engine neither stores nor mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerProfile {
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub current_skill_level: SkillLevel,
    /// Carried through for prompt construction and presentation; scoring
    /// ignores it.
    #[serde(default)]
    pub preferred_learning_style: String,
    #[serde(default)]
    pub learning_goals: Vec<String>,
}

/// One proposed learning unit parsed out of generator text, prior to scoring.
///
/// List fields are always present (possibly empty), never null. `difficulty`
/// is always one of the three levels after extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepCandidate {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: SkillLevel,
    pub duration: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
}

/// A step candidate with its 0-10 relevance score attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredStep {
    #[serde(flatten)]
    pub step: StepCandidate,
    pub relevance_score: f32,
}
