use std::sync::Arc;

use sqlx::PgPool;

use crate::assessment::career_match::CareerMatcher;
use crate::assessment::scorer::Scorer;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Scorer over the immutable question bank; holds the default
    /// partial-scoring policy, overridable per request.
    pub scorer: Arc<Scorer>,
    pub matcher: Arc<CareerMatcher>,
    /// Pluggable text generator for the advisor endpoints. Default: GeminiClient.
    pub advisor: Arc<dyn TextGenerator>,
}
