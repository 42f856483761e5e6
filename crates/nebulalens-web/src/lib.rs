//! nebulalens-web: Web dashboard for the NebulaLens classifier.
//! Provides:
//!   - Parameter form with per-model predictions and consensus
//!   - Model performance bars and a rolling prediction history
//!   - Visualizer charts (model profiles, feature importance, comparison)
//!   - JSON API and SSE push for prediction progress

pub mod router;
pub mod handlers;
pub mod components;
pub mod dashboard;
pub mod error;
pub mod state;
pub mod sse;
