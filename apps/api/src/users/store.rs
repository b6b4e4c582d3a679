//! Persistence for user and onboarding records.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::user::{OnboardingRow, UserRow};

/// Finds a user by Google subject id, creating the row on first sight.
/// This is the DB half of the OAuth callback; the handshake itself lives in
/// the surrounding auth service.
pub async fn upsert_user(
    pool: &PgPool,
    google_id: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<UserRow> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (google_id, name, email)
        VALUES ($1, $2, $3)
        ON CONFLICT (google_id)
        DO UPDATE SET name = COALESCE(EXCLUDED.name, users.name),
                      email = COALESCE(EXCLUDED.email, users.email)
        RETURNING *
        "#,
    )
    .bind(google_id)
    .bind(name)
    .bind(email)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn list_users(pool: &PgPool) -> Result<Vec<UserRow>> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users ORDER BY created_at ASC")
            .fetch_all(pool)
            .await?,
    )
}

pub async fn get_user(pool: &PgPool, user_id: Uuid) -> Result<Option<UserRow>> {
    Ok(
        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

pub async fn get_onboarding(pool: &PgPool, user_id: Uuid) -> Result<Option<OnboardingRow>> {
    Ok(
        sqlx::query_as::<_, OnboardingRow>("SELECT * FROM user_onboarding WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Fields written by an onboarding submission.
pub struct OnboardingUpdate {
    pub current_role: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub goals: String,
    pub preferred_industries: Vec<String>,
}

/// Inserts or replaces the onboarding record and marks it completed.
pub async fn upsert_onboarding(
    pool: &PgPool,
    user_id: Uuid,
    update: &OnboardingUpdate,
) -> Result<OnboardingRow> {
    let row = sqlx::query_as::<_, OnboardingRow>(
        r#"
        INSERT INTO user_onboarding
            (user_id, currentrole, experience, skills, interests, goals,
             preferred_industries, has_completed, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE, now())
        ON CONFLICT (user_id)
        DO UPDATE SET currentrole = EXCLUDED.currentrole,
                      experience = EXCLUDED.experience,
                      skills = EXCLUDED.skills,
                      interests = EXCLUDED.interests,
                      goals = EXCLUDED.goals,
                      preferred_industries = EXCLUDED.preferred_industries,
                      has_completed = TRUE,
                      updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&update.current_role)
    .bind(&update.experience)
    .bind(sqlx::types::Json(&update.skills))
    .bind(sqlx::types::Json(&update.interests))
    .bind(&update.goals)
    .bind(sqlx::types::Json(&update.preferred_industries))
    .fetch_one(pool)
    .await?;

    info!("Saved onboarding for user {user_id}");
    Ok(row)
}
