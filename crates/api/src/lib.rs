//! Vehicle Price Estimator Web Server
//!
//! Serves a search form, accepts a form submission with a vehicle's year,
//! make, and model, and renders the predicted price from the pre-trained
//! regression artifacts.

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod pages;
mod routes;
mod settings;

pub use settings::AppConfig;

use predictor::Predictor;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded artifacts; read-only after startup, safe to share unlocked
    pub predictor: Predictor,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state around a loaded predictor
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub feature_dimension: usize,
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::search::get_search))
        .route("/results", post(routes::results::post_results))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        feature_dimension: state.predictor.feature_dimension(),
    })
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load artifacts and run the server until shutdown
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let predictor = Predictor::load(&config.weights_dir)?;
    let state = Arc::new(AppState::new(predictor));
    let app = create_router(state);

    info!("Starting web server on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
