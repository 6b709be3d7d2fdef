use std::sync::Arc;

use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use resto_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware that validates `Authorization: Bearer <jwt>` and stores the
/// token's [`resto_core::Claims`] in the request extensions.
pub async fn require_bearer_token(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    let Some(token) = token else {
        return ApiError(AppError::Unauthorized(
            "Missing or invalid Authorization header. Expected: Bearer <token>".into(),
        ))
        .into_response();
    };

    match state.keys.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(err) => ApiError(err).into_response(),
    }
}
