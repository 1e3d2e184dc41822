use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] flavorgraph_engine::CatalogError),
}

/// JSON error body returned by the API routes.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error, message) = match self {
            AppError::ValidationError(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", msg)
            }
            AppError::CatalogError(e) => {
                tracing::error!("Catalog error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "catalog_error",
                    "The recipe catalog could not be loaded.".to_string(),
                )
            }
        };

        (
            status_code,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}
