//! Shared application state for the web server.

use std::sync::Arc;
use nebulalens_client::{Classifier, HttpClassifier};
use nebulalens_common::{CosmicFeatures, NebulaError, PredictionResult};
use nebulalens_config::Config;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::dashboard::{Dashboard, SubmitError};

/// Events pushed to connected clients via SSE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A prediction request left for the classifier
    PredictionStarted { features: CosmicFeatures },
    /// The classifier answered and the history gained an entry
    PredictionCompleted { entry_id: Uuid, prediction: String, count: u32, total: u32 },
    /// The classifier call failed; result and history are unchanged
    PredictionFailed { message: String },
}

impl AppEvent {
    /// SSE event name.
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::PredictionStarted { .. } => "prediction_started",
            AppEvent::PredictionCompleted { .. } => "prediction_completed",
            AppEvent::PredictionFailed { .. } => "prediction_failed",
        }
    }
}

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub config: Config,
    pub classifier: Arc<dyn Classifier>,
    pub dashboard: Dashboard,
    /// Broadcast channel for SSE push events
    pub event_tx: broadcast::Sender<AppEvent>,
}

impl AppState {
    /// State backed by the HTTP classifier named in `config`.
    pub fn new(config: Config) -> Result<Self, NebulaError> {
        let classifier = HttpClassifier::new(&config.classifier)?;
        Ok(Self::with_classifier(config, Arc::new(classifier)))
    }

    pub fn with_classifier(config: Config, classifier: Arc<dyn Classifier>) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        let dashboard = Dashboard::new(config.history.max_entries);
        Self { config, classifier, dashboard, event_tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: AppEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }

    /// Mark the session loading and run the classifier call on its own task,
    /// so a dropped HTTP connection can't leave the session stuck in loading.
    /// Overlapping submissions are rejected with [`SubmitError::Busy`].
    ///
    /// The returned handle belongs to a supervisor that waits on the call;
    /// if the call panics the session is failed instead of staying loading.
    pub async fn start_prediction(
        self: &Arc<Self>,
        request: CosmicFeatures,
    ) -> Result<JoinHandle<Result<PredictionResult, NebulaError>>, SubmitError> {
        self.dashboard.begin(&request).await?;
        self.emit(AppEvent::PredictionStarted { features: request });

        let worker = {
            let state = Arc::clone(self);
            tokio::spawn(async move { state.finish_prediction(request).await })
        };
        let state = Arc::clone(self);
        Ok(tokio::spawn(async move {
            match worker.await {
                Ok(outcome) => outcome,
                Err(join_err) => {
                    error!(error = %join_err, "Prediction task did not finish");
                    let err = NebulaError::Aborted(join_err.to_string());
                    state.dashboard.fail(err.to_string()).await;
                    state.emit(AppEvent::PredictionFailed { message: err.to_string() });
                    Err(err)
                }
            }
        }))
    }

    async fn finish_prediction(&self, request: CosmicFeatures) -> Result<PredictionResult, NebulaError> {
        match self.classifier.predict(&request).await {
            Ok(result) => {
                let entry = self.dashboard.complete(request, result.clone()).await;
                info!(
                    entry = %entry.id,
                    consensus = %entry.model_agreement.prediction,
                    agreement = %entry.model_agreement.ratio_label(),
                    "Prediction recorded"
                );
                self.emit(AppEvent::PredictionCompleted {
                    entry_id: entry.id,
                    prediction: entry.model_agreement.prediction.clone(),
                    count: entry.model_agreement.count,
                    total: entry.model_agreement.total,
                });
                Ok(result)
            }
            Err(e) => {
                warn!(error = %e, "Prediction failed");
                self.dashboard.fail(e.to_string()).await;
                self.emit(AppEvent::PredictionFailed { message: e.to_string() });
                Err(e)
            }
        }
    }
}

pub type SharedState = Arc<AppState>;
