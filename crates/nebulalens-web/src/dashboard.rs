//! The dashboard session: loading flag, last result, error line and history.
//!
//! All four live behind one lock so a finished prediction updates them
//! together; readers only ever see a cloned [`DashboardSnapshot`].

use nebulalens_common::{CosmicFeatures, LogEntry, PredictionLog, PredictionResult};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("A prediction is already in progress")]
    Busy,
}

/// Read-only view handed to the render components.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub is_loading: bool,
    pub api_result: Option<PredictionResult>,
    pub prediction_log: Vec<LogEntry>,
    pub history_capacity: usize,
    /// Message of the most recent failed submission, cleared when the next one starts.
    pub last_error: Option<String>,
    pub last_request: Option<CosmicFeatures>,
}

struct Session {
    is_loading: bool,
    api_result: Option<PredictionResult>,
    log: PredictionLog,
    last_error: Option<String>,
    last_request: Option<CosmicFeatures>,
}

pub struct Dashboard {
    inner: RwLock<Session>,
}

impl Dashboard {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            inner: RwLock::new(Session {
                is_loading: false,
                api_result: None,
                log: PredictionLog::with_capacity(history_capacity),
                last_error: None,
                last_request: None,
            }),
        }
    }

    /// Enter the loading state, or refuse if a prediction is in flight.
    pub async fn begin(&self, request: &CosmicFeatures) -> Result<(), SubmitError> {
        let mut session = self.inner.write().await;
        if session.is_loading {
            return Err(SubmitError::Busy);
        }
        session.is_loading = true;
        session.last_error = None;
        session.last_request = Some(*request);
        Ok(())
    }

    /// Store the result, append one history entry and leave the loading state.
    pub async fn complete(&self, request: CosmicFeatures, result: PredictionResult) -> LogEntry {
        let entry = LogEntry::new(result.model_agreement.clone(), request);
        let mut session = self.inner.write().await;
        session.api_result = Some(result);
        session.log.push(entry.clone());
        session.is_loading = false;
        entry
    }

    /// Leave the loading state without touching the result or history.
    pub async fn fail(&self, message: String) {
        let mut session = self.inner.write().await;
        session.is_loading = false;
        session.last_error = Some(message);
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.is_loading
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        let session = self.inner.read().await;
        DashboardSnapshot {
            is_loading: session.is_loading,
            api_result: session.api_result.clone(),
            prediction_log: session.log.to_vec(),
            history_capacity: session.log.capacity(),
            last_error: session.last_error.clone(),
            last_request: session.last_request,
        }
    }
}
