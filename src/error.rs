use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::profit::ErrorResponse;
use crate::services::calculation_service::CalculationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// Body is not JSON, not an object, or sent without a JSON content type.
    #[error(transparent)]
    BadRequest(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Calculation(err) => {
                tracing::info!(field = ?err.field(), error = %err.model_error(), "calculation rejected");
                let body = ErrorResponse {
                    error: err.model_error().to_string(),
                    field: err.field().map(String::from),
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::BadRequest(rejection) => {
                tracing::info!(status = %rejection.status(), "request body rejected");
                let body = ErrorResponse {
                    error: rejection.body_text(),
                    field: None,
                };
                (rejection.status(), Json(body)).into_response()
            }
        }
    }
}
