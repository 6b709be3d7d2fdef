use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use resto_core::error::AppError;

use crate::dto::ErrorResponse;

/// Wrapper so we can implement `IntoResponse` for `AppError`.
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// Error mapping for reads and deletes: an unreachable store reports the
    /// entity set as missing.
    pub fn unavailable_as_not_found(err: AppError) -> Self {
        match err {
            AppError::StoreUnavailable(detail) => {
                tracing::error!(%detail, "Store unavailable");
                Self(AppError::NotFound("The requested data is not available.".into()))
            }
            other => Self(other),
        }
    }

    fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "unauthorized"),
            AppError::Conflict(_) => (StatusCode::INTERNAL_SERVER_ERROR, "conflict"),
            AppError::StoreUnavailable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable")
            }
            AppError::DatabaseError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::TokenError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "token_error"),
            AppError::ConfigError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_kind();

        let message = match &self.0 {
            AppError::DatabaseError(_) => {
                tracing::error!(error = %self.0, "Request failed");
                "An unexpected database error occurred.".to_string()
            }
            AppError::StoreUnavailable(_) => {
                tracing::error!(error = %self.0, "Request failed");
                "The data store is currently unavailable.".to_string()
            }
            err if err.is_client_error() => {
                tracing::debug!(error = %err, "Request rejected");
                err.to_string()
            }
            err => {
                tracing::error!(error = %err, "Request failed");
                err.to_string()
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}
