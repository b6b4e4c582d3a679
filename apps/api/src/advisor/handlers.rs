//! Axum route handlers for the Advisor API — free-text career suggestions
//! from the generative backend. Nothing here feeds back into the scorer.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::advisor::prompts::build_career_prompt;
use crate::assessment::store::latest_result;
use crate::errors::AppError;
use crate::llm_client::strip_json_fences;
use crate::state::AppState;
use crate::users::store::{get_onboarding, get_user};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathsRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkills {
    #[serde(default)]
    pub existing: Vec<String>,
    #[serde(default)]
    pub to_develop: Vec<String>,
}

/// One AI-suggested career path, in the shape the dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedPath {
    pub title: String,
    #[serde(default)]
    pub suggested_job_titles: Vec<String>,
    pub required_skills: RequiredSkills,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSuggestions {
    pub career_paths: Vec<SuggestedPath>,
}

/// POST /api/v1/advisor/generate
///
/// Raw prompt pass-through. Kept for the frontend's free-form usage.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt is required".to_string()));
    }
    let content = state.advisor.generate(&request.prompt).await?;
    Ok(Json(GenerateResponse { content }))
}

/// POST /api/v1/advisor/career-paths
///
/// Builds a prompt from the user's onboarding record plus their latest
/// assessment scores, asks for strict JSON, and returns the parsed paths.
pub async fn handle_career_paths(
    State(state): State<AppState>,
    Json(request): Json<CareerPathsRequest>,
) -> Result<Json<CareerSuggestions>, AppError> {
    let user = get_user(&state.db, request.user_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", request.user_id)))?;

    let onboarding = get_onboarding(&state.db, request.user_id)
        .await
        .map_err(AppError::Internal)?
        .filter(|o| o.has_completed)
        .ok_or_else(|| {
            AppError::Validation("complete onboarding before requesting suggestions".to_string())
        })?;

    let latest = latest_result(&state.db, request.user_id)
        .await
        .map_err(AppError::Internal)?;

    let prompt = build_career_prompt(&user, &onboarding, latest.as_ref().map(|r| &r.skill_scores));
    let raw = state.advisor.generate(&prompt).await?;
    let suggestions = parse_suggestions(&raw)?;

    Ok(Json(suggestions))
}

/// Parses the model's reply, tolerating markdown code fences.
fn parse_suggestions(raw: &str) -> Result<CareerSuggestions, AppError> {
    serde_json::from_str(strip_json_fences(raw))
        .map_err(|e| AppError::Llm(format!("unparseable suggestion payload: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggestions_plain_json() {
        let raw = r#"{
            "career_paths": [{
                "title": "Engineering Manager",
                "suggested_job_titles": ["EM", "Team Lead"],
                "required_skills": {"existing": ["React"], "to_develop": ["Hiring"]},
                "next_steps": ["Lead a project"],
                "industries": ["SaaS"]
            }]
        }"#;
        let parsed = parse_suggestions(raw).unwrap();
        assert_eq!(parsed.career_paths.len(), 1);
        assert_eq!(parsed.career_paths[0].title, "Engineering Manager");
        assert_eq!(parsed.career_paths[0].required_skills.to_develop, vec!["Hiring"]);
    }

    #[test]
    fn test_parse_suggestions_fenced_json() {
        let raw = "```json\n{\"career_paths\": []}\n```";
        let parsed = parse_suggestions(raw).unwrap();
        assert!(parsed.career_paths.is_empty());
    }

    #[test]
    fn test_parse_suggestions_rejects_prose() {
        let err = parse_suggestions("Here are some ideas for you!").unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_missing_optional_fields_default_empty() {
        let raw = r#"{"career_paths": [{"title": "Architect", "required_skills": {}}]}"#;
        let parsed = parse_suggestions(raw).unwrap();
        let path = &parsed.career_paths[0];
        assert!(path.suggested_job_titles.is_empty());
        assert!(path.next_steps.is_empty());
        assert!(path.industries.is_empty());
    }
}
