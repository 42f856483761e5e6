//! Classifier response types.

use serde::{Deserialize, Serialize};
use crate::error::NebulaError;
use crate::ordered::OrderedMap;

/// Majority label across the queried models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAgreement {
    pub prediction: String,
    pub count: u32,
    pub total: u32,
}

impl ModelAgreement {
    pub fn validate(&self) -> Result<(), NebulaError> {
        if self.count > self.total {
            return Err(NebulaError::MalformedResponse(format!(
                "model_agreement.count {} exceeds total {}",
                self.count, self.total
            )));
        }
        Ok(())
    }

    /// `count / total` as shown in the history log.
    pub fn ratio_label(&self) -> String {
        format!("{} / {}", self.count, self.total)
    }
}

/// Precomputed test-set metrics for one model, all in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub f1_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recall: Option<f64>,
}

impl ModelMetrics {
    pub const ZERO: ModelMetrics = ModelMetrics {
        accuracy: 0.0,
        f1_score: 0.0,
        precision: None,
        recall: None,
    };
}

/// The models the classifier is known to run, in display order. Only used to
/// shape the placeholder card before the first response arrives.
pub const PLACEHOLDER_MODELS: [&str; 4] = ["rf", "mlp", "svm", "knn"];

/// All-zero metrics shown before any prediction has completed.
pub fn placeholder_performance() -> OrderedMap<ModelMetrics> {
    PLACEHOLDER_MODELS.iter().map(|m| (*m, ModelMetrics::ZERO)).collect()
}

/// Full response of a successful prediction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// model name -> predicted label
    pub predictions: OrderedMap<String>,
    pub model_agreement: ModelAgreement,
    #[serde(default)]
    pub performance: OrderedMap<ModelMetrics>,
}

impl PredictionResult {
    /// Reject shapes the dashboard can't render consistently.
    pub fn validate(&self) -> Result<(), NebulaError> {
        self.model_agreement.validate()?;
        let models = self.predictions.len();
        if self.model_agreement.total as usize != models {
            return Err(NebulaError::MalformedResponse(format!(
                "model_agreement.total {} does not match {} model predictions",
                self.model_agreement.total, models
            )));
        }
        Ok(())
    }
}
