// src/path/prompt.rs — Prompt construction for the path generator

use super::types::LearnerProfile;

/// System framing sent with every path-generation request.
pub const SYSTEM_PROMPT: &str =
    "You are an expert educational AI that creates personalized learning paths.";

/// Build the user prompt for one profile.
///
/// This is the engine's half of the collaborator contract: the profile is
/// interpolated into a natural-language instruction that asks for the exact
/// labeled-section layout the extractor knows how to read. Nothing enforces
/// the layout on the wire — the extractor tolerates drift instead.
pub fn build_path_prompt(profile: &LearnerProfile) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "Generate a personalized learning path for a student with the following profile:\n",
    );
    prompt.push_str(&format!(
        "- Current Skill Level: {}\n",
        profile.current_skill_level
    ));
    prompt.push_str(&format!(
        "- Learning Style: {}\n",
        profile.preferred_learning_style
    ));
    prompt.push_str(&format!("- Interests: {}\n", profile.interests.join(", ")));
    prompt.push_str(&format!(
        "- Learning Goals: {}\n",
        profile.learning_goals.join(", ")
    ));
    prompt.push_str(&format!(
        "- Completed Courses: {}\n",
        profile.completed_courses.join(", ")
    ));

    prompt.push_str("\nCreate a detailed, step-by-step learning path that:\n");
    prompt.push_str("1. Matches their current skill level and gradually progresses\n");
    prompt.push_str(&format!(
        "2. Aligns with their preferred learning style ({})\n",
        profile.preferred_learning_style
    ));
    prompt.push_str("3. Incorporates their specific interests and goals\n");
    prompt.push_str("4. Builds upon their completed courses\n");
    prompt.push_str("5. Includes practical exercises and assessments\n");
    prompt.push_str("6. Provides clear learning outcomes for each step\n");

    prompt.push_str("\nFormat each step as follows:\n");
    prompt.push_str("Step [number]:\n");
    prompt.push_str("Title: [concise title]\n");
    prompt.push_str("Description: [detailed description]\n");
    prompt.push_str("Difficulty: [beginner/intermediate/advanced]\n");
    prompt.push_str("Duration: [estimated time]\n");
    prompt.push_str("Key Modules:\n- [module 1]\n- [module 2]\n");
    prompt.push_str("Prerequisites:\n- [prerequisite 1]\n- [prerequisite 2]\n");
    prompt.push_str("Learning Outcomes:\n- [outcome 1]\n- [outcome 2]\n");

    prompt
}
