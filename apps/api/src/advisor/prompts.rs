// All LLM prompt constants for the Advisor module.

use crate::models::user::{OnboardingRow, UserRow};

/// Career path suggestion prompt template — enforces JSON-only output.
/// Filled by [`build_career_prompt`].
pub const CAREER_PATHS_PROMPT_TEMPLATE: &str = r#"You are an experienced career advisor for technology professionals.
Suggest 2-4 realistic career paths for the candidate below.

You MUST respond with valid JSON only.
Do NOT include any text outside the JSON object.
Do NOT use markdown code fences.

Return a JSON object with this EXACT schema (no extra fields):
{
  "career_paths": [
    {
      "title": "Engineering Manager",
      "suggested_job_titles": ["Engineering Manager", "Team Lead"],
      "required_skills": {
        "existing": ["skills the candidate already has"],
        "to_develop": ["skills the candidate should build"]
      },
      "next_steps": ["concrete, ordered actions"],
      "industries": ["industries where this path is in demand"]
    }
  ]
}

CANDIDATE PROFILE:
{profile}"#;

/// Renders the candidate profile section from the user's onboarding record
/// and, when available, their latest assessment skill scores.
pub fn build_career_prompt(
    user: &UserRow,
    onboarding: &OnboardingRow,
    skill_scores: Option<&serde_json::Value>,
) -> String {
    let mut profile = String::new();
    if let Some(name) = &user.name {
        profile.push_str(&format!("Name: {name}\n"));
    }
    profile.push_str(&format!("Current role: {}\n", onboarding.current_role));
    profile.push_str(&format!("Experience: {}\n", onboarding.experience));
    profile.push_str(&format!("Self-reported skills: {}\n", join_json_list(&onboarding.skills)));
    profile.push_str(&format!("Interests: {}\n", join_json_list(&onboarding.interests)));
    profile.push_str(&format!("Goals: {}\n", onboarding.goals));
    profile.push_str(&format!(
        "Preferred industries: {}\n",
        join_json_list(&onboarding.preferred_industries)
    ));
    if let Some(scores) = skill_scores {
        profile.push_str(&format!(
            "Assessed skill scores (0-100): {}\n",
            serde_json::to_string(scores).unwrap_or_default()
        ));
    }

    CAREER_PATHS_PROMPT_TEMPLATE.replace("{profile}", profile.trim_end())
}

/// Joins a JSON array of strings as "a, b, c"; anything else renders as-is.
fn join_json_list(value: &serde_json::Value) -> String {
    match value.as_array() {
        Some(items) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect::<Vec<_>>()
            .join(", "),
        None => value.to_string(),
    }
}
