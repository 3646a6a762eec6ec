//! HTTP handlers for REST API endpoints
//!
//! POST bodies are read as raw bytes and parsed leniently: a missing,
//! malformed or non-object body is treated as an empty object and never
//! rejected.

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use study_data::signal::{optional_signal, parse_body, signal_from_map};

use crate::config::SERVICE_NAME;
use crate::engine::{RandomSource, StudyEngine};
use crate::error::{ApiError, ApiResult};
use crate::responses::{
    AnalyticsResponse,
    HealthResponse,
    PredictionResponse,
    RecommendationsResponse,
    ScheduleResponse,
};

/// State shared across all handlers
///
/// Both fields are immutable: each request derives its own RNG from
/// `random`, so handlers never contend on shared state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<StudyEngine>,
    pub random: RandomSource,
}

impl AppState {
    pub fn new(engine: StudyEngine, random: RandomSource) -> Self {
        Self {
            engine: Arc::new(engine),
            random,
        }
    }
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/recommendations - Unpersonalized recommendations
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> ApiResult<Json<RecommendationsResponse>> {
    info!("Generating recommendations");
    let mut rng = state.random.rng()?;
    let recommendations = state.engine.generate_recommendations(None, &mut rng);
    Ok(Json(RecommendationsResponse::new(recommendations)))
}

/// POST /api/recommendations - Recommendations personalized by the body
pub async fn post_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<RecommendationsResponse>> {
    let signal = optional_signal(&body);
    info!(
        "Generating recommendations (personalized: {})",
        signal.is_some()
    );
    let mut rng = state.random.rng()?;
    let recommendations = state
        .engine
        .generate_recommendations(signal.as_ref(), &mut rng);
    Ok(Json(RecommendationsResponse::new(recommendations)))
}

/// POST /api/analytics - Efficiency, focus time, breaks and trends
pub async fn analyze_study_data(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AnalyticsResponse>> {
    let signal = signal_from_map(&parse_body(&body));
    info!("Analyzing study data");
    let mut rng = state.random.rng()?;
    let analytics = state.engine.analyze(&signal, &mut rng);
    Ok(Json(AnalyticsResponse::new(analytics)))
}

/// POST /api/schedule/optimize - Ranked study slots for the day
pub async fn optimize_schedule(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<ScheduleResponse>> {
    let preferences = parse_body(&body);
    info!("Optimizing schedule");
    let mut rng = state.random.rng()?;
    let schedule = state
        .engine
        .predict_optimal_schedule(Some(&preferences), &mut rng)
        .map_err(|e| {
            error!("Error optimizing schedule: {}", e);
            ApiError::from(e)
        })?;
    let score = state.engine.optimization_score(&mut rng);
    Ok(Json(ScheduleResponse::new(schedule, score)))
}

/// POST /api/prediction/performance - Mock performance prediction
pub async fn predict_performance(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<PredictionResponse>> {
    let signal = optional_signal(&body);
    info!("Predicting performance");
    let mut rng = state.random.rng()?;
    let prediction = state.engine.predict_performance(signal.as_ref(), &mut rng);
    Ok(Json(PredictionResponse::new(prediction)))
}

/// Render a handler panic as a 500 in the usual error shape.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    error!("Handler panicked: {}", detail);

    ApiError::internal("Internal server error").into_response()
}

/// Create router with all API endpoints
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/api/recommendations",
            get(get_recommendations).post(post_recommendations),
        )
        .route("/api/analytics", post(analyze_study_data))
        .route("/api/schedule/optimize", post(optimize_schedule))
        .route("/api/prediction/performance", post(predict_performance));

    with_layers(router).with_state(state)
}

/// Wrap routes in the panic, trace and CORS layers every endpoint shares.
pub fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
