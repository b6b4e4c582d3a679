//! Axum route handlers for the Assessment API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::career_match::CareerPath;
use crate::assessment::question_bank::Question;
use crate::assessment::recommendation::{generate_recommendations, Recommendation};
use crate::assessment::scorer::{AnswerMap, ScoreError, ScorePolicy, SkillScores};
use crate::assessment::store::{self, ReportBlobs};
use crate::errors::AppError;
use crate::models::assessment::AssessmentResultRow;
use crate::state::AppState;

/// Client-facing view of a question. Skill weights stay server-side; the
/// presentation layer only needs the prompt and its options.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub id: u32,
    pub category: String,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionView {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            category: q.category.clone(),
            question: q.prompt.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub user_id: Uuid,
    pub answers: AnswerMap,
    /// Overrides the server default when present.
    pub allow_partial: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub result_id: Uuid,
    pub skill_scores: SkillScores,
    pub recommendations: Vec<Recommendation>,
    pub career_paths: Vec<CareerPath>,
}

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// GET /api/v1/assessment/questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<Vec<QuestionView>> {
    let questions = state
        .scorer
        .bank()
        .questions()
        .iter()
        .map(QuestionView::from)
        .collect();
    Json(questions)
}

/// POST /api/v1/assessment/score
///
/// Validates the answer map, scores it, generates recommendations and
/// career paths, and persists the report as opaque JSON blobs.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    validate_answers(&state, &request.answers)?;

    let policy = ScorePolicy {
        allow_partial: request
            .allow_partial
            .unwrap_or(state.scorer.policy().allow_partial),
    };

    let skill_scores = state
        .scorer
        .score_with(&request.answers, policy)
        .map_err(|e: ScoreError| AppError::Validation(e.to_string()))?;

    let recommendations = generate_recommendations(&skill_scores);
    let career_paths = state.matcher.match_paths(&skill_scores);

    let blobs = ReportBlobs {
        skill_scores: serde_json::to_value(&skill_scores)?,
        recommendations: serde_json::to_value(&recommendations)?,
        career_paths: serde_json::to_value(&career_paths)?,
    };
    let row = store::insert_result(&state.db, request.user_id, blobs)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(ScoreResponse {
        result_id: row.id,
        skill_scores,
        recommendations,
        career_paths,
    }))
}

/// GET /api/v1/assessment/results?user_id=
pub async fn handle_list_results(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AssessmentResultRow>>, AppError> {
    let results = store::list_results(&state.db, params.user_id)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(results))
}

/// Rejects unknown question ids and out-of-range option indices before the
/// scorer runs. The scorer itself is total and would clamp, but garbage in a
/// submission is a client bug worth surfacing.
fn validate_answers(state: &AppState, answers: &AnswerMap) -> Result<(), AppError> {
    let bank = state.scorer.bank();
    for (question_id, selected) in answers {
        let question = bank.question(*question_id).ok_or_else(|| {
            AppError::Validation(format!("unknown question id {question_id}"))
        })?;
        if *selected >= question.options.len() {
            return Err(AppError::Validation(format!(
                "question {question_id}: option index {selected} out of range (0-{})",
                question.options.len() - 1
            )));
        }
    }
    Ok(())
}
