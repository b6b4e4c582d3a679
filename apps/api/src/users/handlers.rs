//! Axum route handlers for the Users API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{OnboardingRow, UserRow};
use crate::state::AppState;
use crate::users::store::{self, OnboardingUpdate};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub google_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserRow,
    pub onboarding: OnboardingView,
}

/// Onboarding as the profile dashboard consumes it. A user who has not
/// submitted onboarding gets the empty, not-completed shape rather than 404.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingView {
    pub current_role: String,
    pub experience: String,
    pub skills: serde_json::Value,
    pub interests: serde_json::Value,
    pub goals: String,
    pub preferred_industries: serde_json::Value,
    pub has_completed: bool,
}

impl Default for OnboardingView {
    fn default() -> Self {
        Self {
            current_role: String::new(),
            experience: String::new(),
            skills: serde_json::json!([]),
            interests: serde_json::json!([]),
            goals: String::new(),
            preferred_industries: serde_json::json!([]),
            has_completed: false,
        }
    }
}

impl From<OnboardingRow> for OnboardingView {
    fn from(row: OnboardingRow) -> Self {
        Self {
            current_role: row.current_role,
            experience: row.experience,
            skills: row.skills,
            interests: row.interests,
            goals: row.goals,
            preferred_industries: row.preferred_industries,
            has_completed: row.has_completed,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    pub current_role: String,
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub preferred_industries: Vec<String>,
}

/// POST /api/v1/users
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserRow>), AppError> {
    if request.google_id.trim().is_empty() {
        return Err(AppError::Validation("googleId cannot be empty".to_string()));
    }
    let user = store::upsert_user(
        &state.db,
        &request.google_id,
        request.name.as_deref(),
        request.email.as_deref(),
    )
    .await
    .map_err(AppError::Internal)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn handle_list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRow>>, AppError> {
    let users = store::list_users(&state.db).await.map_err(AppError::Internal)?;
    Ok(Json(users))
}

/// GET /api/v1/users/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user = store::get_user(&state.db, user_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let onboarding = store::get_onboarding(&state.db, user_id)
        .await
        .map_err(AppError::Internal)?
        .map(OnboardingView::from)
        .unwrap_or_default();

    Ok(Json(ProfileResponse { user, onboarding }))
}

/// PUT /api/v1/users/:id/onboarding
pub async fn handle_upsert_onboarding(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<OnboardingRequest>,
) -> Result<Json<OnboardingRow>, AppError> {
    store::get_user(&state.db, user_id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let update = OnboardingUpdate {
        current_role: request.current_role,
        experience: request.experience,
        skills: request.skills,
        interests: request.interests,
        goals: request.goals,
        preferred_industries: request.preferred_industries,
    };
    let row = store::upsert_onboarding(&state.db, user_id, &update)
        .await
        .map_err(AppError::Internal)?;
    Ok(Json(row))
}
