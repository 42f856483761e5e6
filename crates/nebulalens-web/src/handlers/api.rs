//! JSON API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use nebulalens_common::{CosmicFeatures, ImportanceView, LogEntry, PredictionResult};

use crate::dashboard::DashboardSnapshot;
use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/state - current dashboard session
pub async fn api_state(State(state): State<SharedState>) -> Json<DashboardSnapshot> {
    Json(state.dashboard.snapshot().await)
}

/// GET /api/history - recorded predictions, oldest first
pub async fn api_history(State(state): State<SharedState>) -> Json<Vec<LogEntry>> {
    Json(state.dashboard.snapshot().await.prediction_log)
}

/// POST /api/predict - classify and wait for the result
pub async fn api_predict(
    State(state): State<SharedState>,
    payload: Result<Json<CosmicFeatures>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(features) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    features.validate()?;
    let task = state.start_prediction(features).await?;
    let result = task.await??;
    Ok(Json(result))
}

/// GET /api/feature-importance - one upstream fetch per call
pub async fn api_feature_importance(State(state): State<SharedState>) -> Json<ImportanceView> {
    let outcome = state.classifier.feature_importance().await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "Feature importance unavailable");
    }
    Json(ImportanceView::from_outcome(outcome))
}
