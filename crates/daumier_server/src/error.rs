//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use daumier_error::{ServerError, ServerErrorKind};
use serde_json::json;

/// A [`ServerError`] carried across an axum handler boundary.
///
/// Handlers return this so `?` works on fallible setup paths; logical
/// operation failures never reach it, they come back inside the response
/// envelope instead.
#[derive(Debug, derive_more::From)]
pub struct ApiError(pub ServerError);

impl ApiError {
    /// A bad-request error naming the offending parameter.
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self(ServerError::new(ServerErrorKind::InvalidRequest(
            message.into(),
        )))
    }

    /// An unexpected internal failure.
    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self(ServerError::new(ServerErrorKind::Internal(message.into())))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ServerErrorKind::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerErrorKind::Startup(_) | ServerErrorKind::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let message = self.0.kind.to_string();

        tracing::error!(error.message = %message, error.status = %status, "Responding with error");

        (status, Json(json!({ "success": false, "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_bad_request() {
        let response = ApiError::invalid_request("missing topic").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_maps_to_server_error() {
        let response = ApiError::internal("boom").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
