//! Form submission: validates the six fields and starts a prediction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use nebulalens_common::FeatureForm;
use tracing::{debug, info};

use crate::dashboard::SubmitError;
use crate::handlers::home::render_home;
use crate::state::SharedState;

/// POST /predict
///
/// Invalid input re-renders the form with field errors (422). A valid request
/// starts the classifier call in the background and redirects to `/`, which
/// shows the analyzing view until the call settles. A submission while one is
/// pending is refused (409).
pub async fn predict_submit(
    State(state): State<SharedState>,
    Form(form): Form<FeatureForm>,
) -> Response {
    let features = match form.parse() {
        Ok(features) => features,
        Err(errors) => {
            debug!(invalid = errors.len(), "Rejected parameter form");
            let snapshot = state.dashboard.snapshot().await;
            let html = render_home(&snapshot, &form, Some(&errors), None);
            return (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
        }
    };

    match state.start_prediction(features).await {
        Ok(_task) => {
            info!(features = %features.summary(), "Prediction submitted");
            Redirect::to("/").into_response()
        }
        Err(SubmitError::Busy) => {
            let snapshot = state.dashboard.snapshot().await;
            let html = render_home(&snapshot, &form, None, Some("A prediction is already in progress."));
            (StatusCode::CONFLICT, Html(html)).into_response()
        }
    }
}
