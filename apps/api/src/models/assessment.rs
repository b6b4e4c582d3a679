use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted assessment report. The three payload columns are stored as
/// opaque JSON snapshots of the generated report, never recomputed or
/// validated server-side on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentResultRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill_scores: serde_json::Value,
    pub recommendations: serde_json::Value,
    pub career_paths: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
