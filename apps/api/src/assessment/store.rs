//! Persistence for generated assessment reports.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::assessment::AssessmentResultRow;

/// The three report payloads, already serialized for storage.
pub struct ReportBlobs {
    pub skill_scores: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub career_paths: serde_json::Value,
}

pub async fn insert_result(
    pool: &PgPool,
    user_id: Uuid,
    blobs: ReportBlobs,
) -> Result<AssessmentResultRow> {
    let row = sqlx::query_as::<_, AssessmentResultRow>(
        r#"
        INSERT INTO assessment_results
            (user_id, skill_scores, recommendations, career_paths)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&blobs.skill_scores)
    .bind(&blobs.recommendations)
    .bind(&blobs.career_paths)
    .fetch_one(pool)
    .await?;

    info!("Stored assessment result {} for user {user_id}", row.id);
    Ok(row)
}

/// All stored reports for a user, newest first.
pub async fn list_results(pool: &PgPool, user_id: Uuid) -> Result<Vec<AssessmentResultRow>> {
    Ok(sqlx::query_as::<_, AssessmentResultRow>(
        "SELECT * FROM assessment_results WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// The most recent report for a user, if any.
pub async fn latest_result(pool: &PgPool, user_id: Uuid) -> Result<Option<AssessmentResultRow>> {
    Ok(sqlx::query_as::<_, AssessmentResultRow>(
        "SELECT * FROM assessment_results WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?)
}
