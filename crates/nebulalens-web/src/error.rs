//! JSON error responses for the `/api` routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nebulalens_common::NebulaError;
use serde_json::json;
use thiserror::Error;

use crate::dashboard::SubmitError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("A prediction is already in progress")]
    Busy,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Upstream(NebulaError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Busy => StatusCode::CONFLICT,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NebulaError> for ApiError {
    fn from(e: NebulaError) -> Self {
        match e {
            NebulaError::InvalidInput(msg) => ApiError::BadRequest(msg),
            aborted @ NebulaError::Aborted(_) => ApiError::Internal(aborted.to_string()),
            other => ApiError::Upstream(other),
        }
    }
}

impl From<SubmitError> for ApiError {
    fn from(e: SubmitError) -> Self {
        match e {
            SubmitError::Busy => ApiError::Busy,
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "API request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
