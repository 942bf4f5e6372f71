use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Requested model is not a catalog key
    #[error("Model not found: {0}")]
    ModelNotFound(String),
    /// Catalog entries failed validation
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl AppError {
    /// Stable machine-readable name, used in JSON bodies and metric labels
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ModelNotFound(_) => "model_not_found",
            Self::InvalidCatalog(_) => "invalid_catalog",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::ModelNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCatalog(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.to_string(),
                "type": self.type_name(),
            }
        }));

        (self.status(), body).into_response()
    }
}
