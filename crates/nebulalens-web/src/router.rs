//! Axum router: maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use crate::state::SharedState;
use crate::handlers::{
    home::home,
    predict::predict_submit,
    visualizer::visualizer_page,
    pages::{models_page, about_page},
    api::{api_state, api_history, api_predict, api_feature_importance},
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(shared: SharedState) -> Router {
    let static_dir = shared.config.server.static_dir.clone();

    Router::new()
        // Pages
        .route("/",           get(home))
        .route("/predict",    post(predict_submit))
        .route("/visualizer", get(visualizer_page))
        .route("/models",     get(models_page))
        .route("/about",      get(about_page))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/state",              get(api_state))
        .route("/api/history",            get(api_history))
        .route("/api/predict",            post(api_predict))
        .route("/api/feature-importance", get(api_feature_importance))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
