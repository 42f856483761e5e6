//! nebulalens-common: Shared data model, errors and history log used across all NebulaLens crates.

pub mod error;
pub mod ordered;
pub mod features;
pub mod prediction;
pub mod reference;
pub mod importance;
pub mod history;

// Re-export commonly used types
pub use error::{NebulaError, Result};
pub use ordered::OrderedMap;
pub use features::{CosmicFeatures, FeatureForm, FieldErrors, FEATURE_NAMES};
pub use prediction::{ModelAgreement, ModelMetrics, PredictionResult};
pub use importance::{ChartSeries, FeatureImportance, ImportanceView};
pub use history::{LogEntry, PredictionLog};
