mod advisor;
mod assessment;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::career_match::CareerMatcher;
use crate::assessment::question_bank::QuestionBank;
use crate::assessment::scorer::{ScorePolicy, Scorer};
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the assessment core: question bank, scorer, matcher
    let bank = Arc::new(QuestionBank::standard());
    let scorer = Arc::new(Scorer::new(
        bank,
        ScorePolicy {
            allow_partial: config.allow_partial_scoring,
        },
    ));
    let matcher = Arc::new(CareerMatcher::default());
    info!(
        "Question bank loaded: {} questions, {} skills",
        scorer.bank().len(),
        scorer.bank().skill_names().len()
    );

    // Initialize LLM client behind the TextGenerator capability
    let advisor = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        scorer,
        matcher,
        advisor,
    };

    // CORS mirrors the original backend: one trusted frontend origin with credentials
    let cors = CorsLayer::new()
        .allow_origin(config.frontend_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
