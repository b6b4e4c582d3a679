pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::advisor::handlers as advisor_handlers;
use crate::assessment::handlers as assessment_handlers;
use crate::state::AppState;
use crate::users::handlers as user_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessment/questions",
            get(assessment_handlers::handle_get_questions),
        )
        .route(
            "/api/v1/assessment/score",
            post(assessment_handlers::handle_score),
        )
        .route(
            "/api/v1/assessment/results",
            get(assessment_handlers::handle_list_results),
        )
        // Users API
        .route(
            "/api/v1/users",
            get(user_handlers::handle_list_users).post(user_handlers::handle_create_user),
        )
        .route(
            "/api/v1/users/:id/profile",
            get(user_handlers::handle_get_profile),
        )
        .route(
            "/api/v1/users/:id/onboarding",
            put(user_handlers::handle_upsert_onboarding),
        )
        // Advisor API
        .route(
            "/api/v1/advisor/generate",
            post(advisor_handlers::handle_generate),
        )
        .route(
            "/api/v1/advisor/career-paths",
            post(advisor_handlers::handle_career_paths),
        )
        .with_state(state)
}
