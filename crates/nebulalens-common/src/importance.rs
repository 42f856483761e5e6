//! Feature importance weights and their chart-ready shape.

use serde::{Deserialize, Serialize};
use crate::error::NebulaError;
use crate::ordered::OrderedMap;

/// Shown when the weights could not be fetched or understood.
pub const GENERIC_IMPORTANCE_ERROR: &str = "Failed to fetch feature importance.";

/// feature name -> weight, in the order the classifier sent them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureImportance(pub OrderedMap<f64>);

/// Two parallel sequences for a bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ImportanceBody {
    Failure { error: String },
    Weights(OrderedMap<f64>),
}

impl FeatureImportance {
    /// Parse a response body: either the weight mapping or `{ "error": ... }`.
    pub fn from_json(body: &[u8]) -> Result<Self, NebulaError> {
        match serde_json::from_slice::<ImportanceBody>(body) {
            Ok(ImportanceBody::Failure { error }) => Err(NebulaError::Server(error)),
            Ok(ImportanceBody::Weights(weights)) => Ok(Self(weights)),
            Err(e) => Err(NebulaError::MalformedResponse(format!(
                "feature importance is not a name -> number mapping: {}",
                e
            ))),
        }
    }

    pub fn chart_series(&self) -> ChartSeries {
        ChartSeries {
            labels: self.0.keys().map(str::to_string).collect(),
            values: self.0.values().copied().collect(),
        }
    }
}

/// Display state of the feature-importance chart. `Loading` is initial,
/// `Error` and `Ready` are terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ImportanceView {
    Loading,
    Error { message: String },
    Ready { labels: Vec<String>, values: Vec<f64> },
}

impl ImportanceView {
    /// Server-reported errors are shown verbatim; anything else gets the generic line.
    pub fn from_outcome(outcome: Result<FeatureImportance, NebulaError>) -> Self {
        match outcome {
            Ok(importance) => {
                let ChartSeries { labels, values } = importance.chart_series();
                ImportanceView::Ready { labels, values }
            }
            Err(NebulaError::Server(message)) => ImportanceView::Error { message },
            Err(_) => ImportanceView::Error { message: GENERIC_IMPORTANCE_ERROR.to_string() },
        }
    }
}
