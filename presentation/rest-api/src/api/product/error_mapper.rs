use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::{ProductError, ProductOperationError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductOperationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match self.kind() {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty".to_string(),
            ),
            ProductError::PriceOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_out_of_range".to_string(),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "product.not_found".to_string(),
            ),
            ProductError::Permission(_) => (
                StatusCode::FORBIDDEN,
                "PermissionDenied",
                self.kind().to_string(),
            ),
            ProductError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Cancelled",
                "request.cancelled".to_string(),
            ),
            ProductError::DeadlineExceeded => (
                StatusCode::GATEWAY_TIMEOUT,
                "Timeout",
                "request.deadline_exceeded".to_string(),
            ),
            ProductError::Repository(_) if self.is_backend_failure() => (
                StatusCode::BAD_GATEWAY,
                "BackendError",
                "repository.backend".to_string(),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
