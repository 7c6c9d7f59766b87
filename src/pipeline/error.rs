// Start of file: /src/pipeline/error.rs

use axum::{
    http,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tower_sessions::session;

/// Failures a pipeline stage can surface. None are recovered locally;
/// every variant fails the offending request and nothing else.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("session store error: {0}")]
    Session(#[from] session::Error),

    #[error("failed to read request body: {0}")]
    BodyRead(#[from] axum::Error),

    #[error("failed to build response: {0}")]
    Http(#[from] http::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        tracing::error!("pipeline failure: {self}");

        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

// End of file: /src/pipeline/error.rs
