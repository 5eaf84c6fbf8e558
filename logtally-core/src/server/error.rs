use crate::error::AnalyzeError;
use crate::limit::InvalidLimit;
use crate::server::resolve::ResolveError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing required query parameter 'file'")]
    MissingFile,

    #[error(transparent)]
    InvalidLimit(#[from] InvalidLimit),

    #[error("invalid log file name '{file}'")]
    BadPath { file: String },

    #[error("log file '{file}' is outside the log root")]
    Forbidden { file: String },

    #[error("log file '{file}' not found")]
    NotFound { file: String },

    #[error(transparent)]
    Analyze(AnalyzeError),

    #[error("analysis task failed: {0}")]
    Task(#[from] JoinError),
}

impl ApiError {
    pub(crate) fn from_resolve(err: ResolveError, file: &str) -> Self {
        let file = file.to_string();
        match err {
            ResolveError::NotFound => Self::NotFound { file },
            ResolveError::Forbidden => Self::Forbidden { file },
            ResolveError::BadPath => Self::BadPath { file },
        }
    }

    /// Keeps the absolute on-disk path out of client-facing messages.
    pub(crate) fn from_analyze(err: AnalyzeError, file: &str) -> Self {
        match err {
            AnalyzeError::SourceUnavailable { .. } => Self::NotFound {
                file: file.to_string(),
            },
            other => Self::Analyze(other),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFile | Self::InvalidLimit(_) | Self::BadPath { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Analyze(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, %status, "request rejected");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
