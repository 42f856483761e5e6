//! Client for the remote NebulaLens classification service.
//!
//! Endpoints (relative to `classifier.base_url`):
//!   POST /predict             six features -> per-model labels + consensus
//!   GET  /feature_importance  feature -> weight, or `{ "error": ... }`

use async_trait::async_trait;
use nebulalens_common::{CosmicFeatures, FeatureImportance, NebulaError, PredictionResult, Result};
use nebulalens_config::ClassifierConfig;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

/// Common interface for classification backends.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify one parameter vector. Exactly one request, no retry.
    async fn predict(&self, features: &CosmicFeatures) -> Result<PredictionResult>;

    /// Fetch the per-feature weights of the reference model.
    async fn feature_importance(&self) -> Result<FeatureImportance>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PredictBody {
    Failure { error: String },
    Success(PredictionResult),
}

/// reqwest-backed client with the endpoints resolved from configuration.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: Client,
    predict_url: String,
    importance_url: String,
}

impl HttpClassifier {
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            predict_url: config.predict_url(),
            importance_url: config.feature_importance_url(),
        })
    }

    async fn read_body(resp: reqwest::Response) -> Result<Vec<u8>> {
        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "classifier returned non-success status");
            return Err(NebulaError::Status { status: status.as_u16() });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    #[instrument(skip(self), fields(url = %self.predict_url))]
    async fn predict(&self, features: &CosmicFeatures) -> Result<PredictionResult> {
        features.validate()?;

        let resp = self.client
            .post(&self.predict_url)
            .json(features)
            .send()
            .await?;
        let body = Self::read_body(resp).await?;

        let result = match serde_json::from_slice::<PredictBody>(&body) {
            Ok(PredictBody::Failure { error }) => return Err(NebulaError::Server(error)),
            Ok(PredictBody::Success(result)) => result,
            Err(e) => {
                return Err(NebulaError::MalformedResponse(format!(
                    "prediction response: {}",
                    e
                )))
            }
        };
        result.validate()?;

        debug!(
            consensus = %result.model_agreement.prediction,
            count = result.model_agreement.count,
            total = result.model_agreement.total,
            "prediction received"
        );
        Ok(result)
    }

    #[instrument(skip(self), fields(url = %self.importance_url))]
    async fn feature_importance(&self) -> Result<FeatureImportance> {
        let resp = self.client.get(&self.importance_url).send().await?;
        let body = Self::read_body(resp).await?;
        let importance = FeatureImportance::from_json(&body)?;
        debug!(features = importance.0.len(), "feature importance received");
        Ok(importance)
    }
}
