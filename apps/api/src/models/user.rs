use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub google_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Self-reported onboarding snapshot. Input to UI personalization and the
/// advisor prompt, never to the scorer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OnboardingRow {
    pub user_id: Uuid,
    // CURRENT_ROLE is reserved in Postgres; the column drops the underscore.
    #[sqlx(rename = "currentrole")]
    pub current_role: String,
    pub experience: String,
    pub skills: serde_json::Value,
    pub interests: serde_json::Value,
    pub goals: String,
    pub preferred_industries: serde_json::Value,
    pub has_completed: bool,
    pub updated_at: DateTime<Utc>,
}
